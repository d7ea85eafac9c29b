//! Full-board piece storage.
//!
//! The register keeps one optional record per 0x88 byte value, wasted
//! off-board slots included, so `view` is a direct index with no translation.
//! Off-board slots stay empty for the register's whole lifetime.

use crate::board::coords::{self, Coords0x88, BOARD_SLOTS};
use crate::board::piece::{Color, PieceKind, PieceRecord};
use crate::errors::Errors;

#[derive(Clone)]
pub struct PieceRegister {
    buffer: [Option<PieceRecord>; BOARD_SLOTS],
}

impl Default for PieceRegister {
    fn default() -> Self {
        Self {
            buffer: [None; BOARD_SLOTS],
        }
    }
}

impl PieceRegister {
    /// Direct lookup. Off-board bytes are empty by invariant, so they are
    /// answered without touching the buffer (the high half of the byte range
    /// has no slot at all).
    #[inline]
    pub fn view(&self, coords: Coords0x88) -> Option<PieceRecord> {
        if coords::off_the_board(coords) {
            return None;
        }
        self.buffer[coords as usize]
    }

    pub fn add_piece_record(
        &mut self,
        record: PieceRecord,
        coords: Coords0x88,
    ) -> Result<(), Errors> {
        if coords::off_the_board(coords) {
            return Err(Errors::OutOfBounds);
        }
        if self.buffer[coords as usize].is_some() {
            return Err(Errors::BoardLocationOccupied);
        }
        self.buffer[coords as usize] = Some(record);
        Ok(())
    }

    pub fn remove_piece_record(&mut self, coords: Coords0x88) -> Option<PieceRecord> {
        if coords::off_the_board(coords) {
            return None;
        }
        self.buffer[coords as usize].take()
    }

    /// The conventional starting arrangement: back ranks on ranks 0 and 7,
    /// pawns on ranks 1 and 6.
    pub fn standard_arrangement() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut register = Self::default();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            let placements = [
                (PieceRecord::new(Color::Light, kind), 0),
                (PieceRecord::new(Color::Light, PieceKind::Pawn), 1),
                (PieceRecord::new(Color::Dark, PieceKind::Pawn), 6),
                (PieceRecord::new(Color::Dark, kind), 7),
            ];
            for (record, rank) in placements {
                register
                    .add_piece_record(record, coords::coords_from_file_rank(file, rank))
                    .expect("standard arrangement must not collide");
            }
        }
        register
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::coords::coords_from_file_rank;

    #[test]
    fn add_rejects_occupied_square() {
        let mut dut = PieceRegister::default();
        let e4 = coords_from_file_rank(4, 3);
        let rook = PieceRecord::new(Color::Light, PieceKind::Rook);

        assert_eq!(dut.add_piece_record(rook, e4), Ok(()));
        assert_eq!(
            dut.add_piece_record(rook, e4),
            Err(Errors::BoardLocationOccupied)
        );
    }

    #[test]
    fn add_rejects_off_board_slot() {
        let mut dut = PieceRegister::default();
        let rook = PieceRecord::new(Color::Dark, PieceKind::Rook);
        assert_eq!(dut.add_piece_record(rook, 0x88), Err(Errors::OutOfBounds));
    }

    #[test]
    fn remove_returns_the_evicted_record() {
        let mut dut = PieceRegister::default();
        let c6 = coords_from_file_rank(2, 5);
        let knight = PieceRecord::new(Color::Dark, PieceKind::Knight);

        dut.add_piece_record(knight, c6).unwrap();
        assert_eq!(dut.remove_piece_record(c6), Some(knight));
        assert_eq!(dut.remove_piece_record(c6), None);
        assert_eq!(dut.view(c6), None);
    }

    #[test]
    fn standard_arrangement_places_thirty_two_pieces() {
        let dut = PieceRegister::standard_arrangement();

        let occupied = (0..=255u8)
            .filter(|&c| dut.view(c).is_some())
            .count();
        assert_eq!(occupied, 32);

        let e1 = coords_from_file_rank(4, 0);
        assert_eq!(
            dut.view(e1),
            Some(PieceRecord::new(Color::Light, PieceKind::King))
        );
        let d8 = coords_from_file_rank(3, 7);
        assert_eq!(
            dut.view(d8),
            Some(PieceRecord::new(Color::Dark, PieceKind::Queen))
        );
        for file in 0..8 {
            assert_eq!(
                dut.view(coords_from_file_rank(file, 1)),
                Some(PieceRecord::new(Color::Light, PieceKind::Pawn))
            );
            assert_eq!(
                dut.view(coords_from_file_rank(file, 6)),
                Some(PieceRecord::new(Color::Dark, PieceKind::Pawn))
            );
        }
    }
}
