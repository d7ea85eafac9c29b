/// Represents the error types that can occur while assembling a board
/// position. Move application and move generation never fail; only explicit
/// piece placement does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errors {
    /// Indicates an attempted access outside the 64 playable squares.
    OutOfBounds,
    /// Attempted to place a piece on a square that is already occupied.
    BoardLocationOccupied,
}
