//! Four-in-a-row detection around the most recently placed token.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Actor;

/// Matching tokens needed on either side of the placed one.
const NEEDED_NEIGHBOURS: usize = 3;

impl Board {
    /// Check if the token `actor` just placed at (row, col) completes a run
    /// of four or more.
    pub fn check_win(&self, row: usize, col: usize, actor: Actor) -> bool {
        let cell = actor.to_cell();

        self.check_horizontal(row, col, cell)
            || self.check_vertical(row, col, cell)
            || self.check_diagonal_down(row, col, cell)
            || self.check_diagonal_up(row, col, cell)
    }

    /// Check horizontal win (left-right through the position)
    fn check_horizontal(&self, row: usize, col: usize, cell: Cell) -> bool {
        let left = self.count_run(row, col, (0, -1), cell);
        let right = self.count_run(row, col, (0, 1), cell);
        left + right >= NEEDED_NEIGHBOURS
    }

    /// Check vertical win (down from the position)
    fn check_vertical(&self, row: usize, col: usize, cell: Cell) -> bool {
        // A freshly dropped token is always the top of its column
        self.count_run(row, col, (1, 0), cell) >= NEEDED_NEIGHBOURS
    }

    /// Check diagonal win (top-left to bottom-right, \)
    fn check_diagonal_down(&self, row: usize, col: usize, cell: Cell) -> bool {
        let up_left = self.count_run(row, col, (-1, -1), cell);
        let down_right = self.count_run(row, col, (1, 1), cell);
        up_left + down_right >= NEEDED_NEIGHBOURS
    }

    /// Check diagonal win (bottom-left to top-right, /)
    fn check_diagonal_up(&self, row: usize, col: usize, cell: Cell) -> bool {
        let up_right = self.count_run(row, col, (-1, 1), cell);
        let down_left = self.count_run(row, col, (1, -1), cell);
        up_right + down_left >= NEEDED_NEIGHBOURS
    }

    /// Count consecutive `cell` tokens stepping from (row, col) by `step`,
    /// not counting the starting cell.
    fn count_run(&self, row: usize, col: usize, step: (i32, i32), cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as i32 + step.0;
        let mut c = col as i32 + step.1;
        while r >= 0
            && r < ROWS as i32
            && c >= 0
            && c < COLS as i32
            && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += step.0;
            c += step.1;
        }
        count
    }
}
