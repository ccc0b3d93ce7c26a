use crate::game::Board;

/// Interface for computer opponents.
pub trait Agent {
    /// Pick a column to play given the current board.
    ///
    /// The column is not required to be playable; the caller retries on a
    /// full column.
    fn select_column(&mut self, board: &Board) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
