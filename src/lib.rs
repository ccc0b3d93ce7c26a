//! # Connect Four
//!
//! Connect Four in the terminal: a human types columns on stdin and plays
//! against a computer opponent that drops its tokens into random columns.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, placement, win detection
//! - [`ai`] — Agent trait and the random opponent
//! - [`session`] — Turn loop alternating human and computer moves
//! - [`ui`] — Text rendering of the board and game messages
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
