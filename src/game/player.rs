use super::board::Cell;

/// Who is making a move: the human at the keyboard or the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    Player,
    Opponent,
}

impl Actor {
    /// Convert actor to the token it writes
    pub fn to_cell(self) -> Cell {
        match self {
            Actor::Player => Cell::Player,
            Actor::Opponent => Cell::Opponent,
        }
    }

    /// Name used in win announcements
    pub fn name(self) -> &'static str {
        match self {
            Actor::Player => "Player",
            Actor::Opponent => "Comp",
        }
    }
}
