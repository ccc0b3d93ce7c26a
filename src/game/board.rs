use std::fmt;

use super::player::Actor;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Opponent,
}

impl Cell {
    /// Character used in the text board
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Player => 'X',
            Cell::Opponent => 'O',
        }
    }
}

/// A successful placement: where the token landed and who put it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub actor: Actor,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("column {0} is outside 0-{max}", max = COLS - 1)]
    InvalidColumn(i64),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    /// Panics if `row >= ROWS` or `col >= COLS`
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Parse a typed column and check it can take another token.
    ///
    /// Only the first whitespace-delimited token of `input` is considered.
    /// This is the admission check for human moves; anything it rejects is
    /// reported to the user and re-prompted.
    pub fn validate_column(&self, input: &str) -> Result<usize, MoveError> {
        let token = input.split_whitespace().next().unwrap_or("");
        let num: i64 = token
            .parse()
            .map_err(|_| MoveError::NotANumber(token.to_string()))?;

        if num < 0 || num >= COLS as i64 {
            return Err(MoveError::InvalidColumn(num));
        }

        let col = num as usize;
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        Ok(col)
    }

    /// Drop a token for `actor` into `col`.
    ///
    /// Walks down from the top while the cell below is still empty, so the
    /// token lands on the floor or on the highest occupied cell. Fullness is
    /// not checked up front: a full column is detected when the landing cell
    /// turns out to be occupied, and the board is left untouched.
    pub fn place(&mut self, col: usize, actor: Actor) -> Result<Move, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col as i64));
        }

        let mut row = 0;
        while row < ROWS - 1 && self.cells[row + 1][col] == Cell::Empty {
            row += 1;
        }

        if self.cells[row][col] != Cell::Empty {
            return Err(MoveError::ColumnFull(col));
        }

        self.cells[row][col] = actor.to_cell();
        Ok(Move { row, col, actor })
    }

    /// Build a board from its text rows, top row first (`_`, `X`, `O`;
    /// spaces ignored). Does not enforce gravity.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(symbols.len(), COLS, "row {row} must have {COLS} cells");
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '_' => Cell::Empty,
                    'X' => Cell::Player,
                    'O' => Cell::Opponent,
                    other => panic!("unknown cell symbol '{other}'"),
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, " {col}")?;
        }
        for row in &self.cells {
            write!(f, "\n|")?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        Board::new().get(ROWS, 0);
    }

    #[test]
    fn test_render_empty_board() {
        let expected = "  0 1 2 3 4 5 6\n\
                        | _ _ _ _ _ _ _ |\n\
                        | _ _ _ _ _ _ _ |\n\
                        | _ _ _ _ _ _ _ |\n\
                        | _ _ _ _ _ _ _ |\n\
                        | _ _ _ _ _ _ _ |\n\
                        | _ _ _ _ _ _ _ |";
        assert_eq!(Board::new().to_string(), expected);
    }

    #[test]
    fn test_render_tokens() {
        let mut board = Board::new();
        board.place(0, Actor::Player).unwrap();
        board.place(6, Actor::Opponent).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().last(), Some("| X _ _ _ _ _ O |"));
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();

        let mv = board.place(3, Actor::Player).unwrap();
        assert_eq!(mv, Move { row: 5, col: 3, actor: Actor::Player });
        assert_eq!(board.get(5, 3), Cell::Player);

        let mv = board.place(3, Actor::Opponent).unwrap();
        assert_eq!(mv.row, 4);
        assert_eq!(board.get(4, 3), Cell::Opponent);
        assert_eq!(board.get(3, 3), Cell::Empty);
    }

    #[test]
    fn test_place_into_full_column_leaves_board_unchanged() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place(0, Actor::Player).unwrap();
        }
        let before = board;

        assert_eq!(board.place(0, Actor::Opponent), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.place(7, Actor::Player), Err(MoveError::InvalidColumn(7)));
    }

    #[test]
    fn test_validate_column_accepts_open_columns() {
        let board = Board::new();
        for col in 0..COLS {
            assert_eq!(board.validate_column(&col.to_string()), Ok(col));
        }
        assert_eq!(board.validate_column("  4  \n"), Ok(4));
        assert_eq!(board.validate_column("+2"), Ok(2));
        assert_eq!(board.validate_column("5 trailing"), Ok(5));
    }

    #[test]
    fn test_validate_column_rejects_bad_input() {
        let board = Board::new();
        assert_eq!(board.validate_column("7"), Err(MoveError::InvalidColumn(7)));
        assert_eq!(board.validate_column("-1"), Err(MoveError::InvalidColumn(-1)));
        assert!(matches!(board.validate_column("abc"), Err(MoveError::NotANumber(_))));
        assert!(matches!(board.validate_column(""), Err(MoveError::NotANumber(_))));
        assert!(matches!(board.validate_column("3.0"), Err(MoveError::NotANumber(_))));
    }

    #[test]
    fn test_validate_column_rejects_full_column() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            assert!(board.validate_column("2").is_ok());
            board.place(2, Actor::Opponent).unwrap();
        }
        assert_eq!(board.validate_column("2"), Err(MoveError::ColumnFull(2)));
        assert!(board.is_column_full(2));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place(col, Actor::Player).unwrap();
            }
        }
        assert!(board.is_full());
        for col in 0..COLS {
            assert!(board.validate_column(&col.to_string()).is_err());
        }
    }

    #[test]
    fn test_place_lands_on_lowest_empty_row() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new();

        for turn in 0..200 {
            let col = rng.random_range(0..COLS);
            let actor = if turn % 2 == 0 { Actor::Player } else { Actor::Opponent };
            let lowest_empty = (0..ROWS).rev().find(|&r| board.get(r, col) == Cell::Empty);
            let above = lowest_empty.and_then(|r| r.checked_sub(1)).map(|r| board.get(r, col));

            match board.place(col, actor) {
                Ok(mv) => {
                    let expected_row = lowest_empty.expect("placement succeeded in a full column");
                    assert_eq!(mv.row, expected_row);
                    assert_eq!(board.get(mv.row, col), actor.to_cell());
                    if let (Some(r), Some(cell)) = (mv.row.checked_sub(1), above) {
                        assert_eq!(board.get(r, col), cell);
                    }
                }
                Err(MoveError::ColumnFull(c)) => {
                    assert_eq!(c, col);
                    assert!(lowest_empty.is_none());
                }
                Err(other) => panic!("unexpected error: {other}"),
            }

            assert_gravity(&board);
        }
    }

    fn assert_gravity(board: &Board) {
        for col in 0..COLS {
            let empties = (0..ROWS)
                .take_while(|&r| board.get(r, col) == Cell::Empty)
                .count();
            for row in empties..ROWS {
                assert_ne!(
                    board.get(row, col),
                    Cell::Empty,
                    "gap at row {row}, column {col}"
                );
            }
        }
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows([
            "_ _ _ _ _ _ _",
            "_ _ _ _ _ _ _",
            "_ _ _ _ _ _ _",
            "_ _ _ _ _ _ _",
            "_ _ _ _ _ _ _",
            "O O O O _ _ X",
        ]);
        assert_eq!(board.get(5, 0), Cell::Opponent);
        assert_eq!(board.get(5, 6), Cell::Player);
        assert_eq!(board.get(4, 0), Cell::Empty);
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::InvalidColumn(9).to_string(), "column 9 is outside 0-6");
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::NotANumber("x".into()).to_string(),
            "'x' is not a column number"
        );
    }
}
