//! Core Connect Four game logic: board, gravity-drop placement, actors and
//! win detection.

mod board;
mod player;
mod win;

pub use board::{Board, Cell, Move, MoveError, COLS, ROWS};
pub use player::Actor;
