//! The turn loop: human and computer alternate on one board until someone
//! connects four, the board fills, or input runs out.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::ai::Agent;
use crate::config::AppConfig;
use crate::error::SessionError;
use crate::game::{Actor, Board, Move};
use crate::ui::console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Actor),
    Draw,
    /// Input closed before the game finished.
    Abandoned,
}

/// A single game between the human on `input`/`output` and `opponent`.
pub struct Session<R, W, A> {
    board: Board,
    input: R,
    output: W,
    opponent: A,
    turn_delay: Duration,
    color: bool,
}

impl<R: BufRead, W: Write, A: Agent> Session<R, W, A> {
    pub fn new(input: R, output: W, opponent: A, config: &AppConfig) -> Self {
        Session {
            board: Board::new(),
            input,
            output,
            opponent,
            turn_delay: config.game.turn_delay(),
            color: config.ui.color,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until the game ends and return how it ended.
    pub fn run(&mut self) -> Result<GameOutcome, SessionError> {
        log::info!("new game against {} opponent", self.opponent.name());
        console::render_board(&mut self.output, &self.board, self.color)?;

        let outcome = loop {
            let Some(mv) = self.human_turn()? else {
                break GameOutcome::Abandoned;
            };
            if let Some(outcome) = self.finish_turn(mv)? {
                break outcome;
            }

            let mv = self.opponent_turn();
            if let Some(outcome) = self.finish_turn(mv)? {
                break outcome;
            }
        };

        self.output.flush()?;
        log::info!("game over: {:?}", outcome);
        Ok(outcome)
    }

    /// Prompt until the human enters a playable column. Returns `None` when
    /// input is exhausted.
    fn human_turn(&mut self) -> Result<Option<Move>, SessionError> {
        let mut buf = Vec::new();
        loop {
            console::prompt(&mut self.output)?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                log::info!("input closed, abandoning game");
                writeln!(self.output)?;
                return Ok(None);
            }
            // Undecodable bytes become U+FFFD and fail the column parse
            let line = String::from_utf8_lossy(&buf);

            let placed = self
                .board
                .validate_column(&line)
                .and_then(|col| self.board.place(col, Actor::Player));
            match placed {
                Ok(mv) => {
                    log::debug!("player placed at row {}, column {}", mv.row, mv.col);
                    return Ok(Some(mv));
                }
                Err(e) => {
                    log::debug!("rejected input {:?}: {}", line.trim_end(), e);
                    console::invalid(&mut self.output)?;
                }
            }
        }
    }

    /// Keep asking the opponent for columns until one accepts a token.
    ///
    /// Must not be called on a full board.
    fn opponent_turn(&mut self) -> Move {
        debug_assert!(!self.board.is_full(), "opponent asked to move on a full board");

        let mut attempts = 1;
        loop {
            let col = self.opponent.select_column(&self.board);
            match self.board.place(col, Actor::Opponent) {
                Ok(mv) => {
                    log::debug!(
                        "opponent placed at row {}, column {} after {} attempt(s)",
                        mv.row,
                        mv.col,
                        attempts
                    );
                    return mv;
                }
                Err(e) => {
                    log::debug!("opponent retrying: {}", e);
                    attempts += 1;
                }
            }
        }
    }

    /// Show the board after `mv` and decide whether the game is over.
    fn finish_turn(&mut self, mv: Move) -> Result<Option<GameOutcome>, SessionError> {
        console::render_board(&mut self.output, &self.board, self.color)?;

        if self.board.check_win(mv.row, mv.col, mv.actor) {
            console::announce_winner(&mut self.output, mv.actor)?;
            return Ok(Some(GameOutcome::Winner(mv.actor)));
        }

        if self.board.is_full() {
            console::announce_draw(&mut self.output)?;
            return Ok(Some(GameOutcome::Draw));
        }

        self.output.flush()?;
        if !self.turn_delay.is_zero() {
            std::thread::sleep(self.turn_delay);
        }
        Ok(None)
    }
}
