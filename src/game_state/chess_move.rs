use crate::board::coords::Coords0x88;
use crate::board::piece::PieceRecord;

/// One piece relocation: which piece leaves `from` and lands on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveStage {
    pub piece: PieceRecord,
    pub from: Coords0x88,
    pub to: Coords0x88,
}

impl MoveStage {
    #[inline]
    pub const fn new(piece: PieceRecord, from: Coords0x88, to: Coords0x88) -> Self {
        Self { piece, from, to }
    }
}

/// A complete move. `second` carries the auxiliary relocation of composite
/// moves — the rook of a castle, the vanishing pawn of an en passant. The
/// generator in this crate never fills it, but validation and the state
/// overlay both honor it, so a future rules layer can populate it without
/// touching either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub first: MoveStage,
    pub second: Option<MoveStage>,
}

impl ChessMove {
    #[inline]
    pub const fn single(first: MoveStage) -> Self {
        Self {
            first,
            second: None,
        }
    }
}
