use std::io::{self, Write};

use crossterm::style::{style, Color, Stylize};

use crate::game::{Actor, Board, Cell, COLS, ROWS};

pub const PROMPT: &str = "Enter a column coordinate (0-6): ";
pub const INVALID: &str = "Invalid";
pub const DRAW: &str = "Board full, no winner";

/// Write the board followed by a blank line.
///
/// With `color` set, tokens are styled but the layout is identical to the
/// plain rendering.
pub fn render_board<W: Write>(out: &mut W, board: &Board, color: bool) -> io::Result<()> {
    if !color {
        writeln!(out, "{board}")?;
        writeln!(out)?;
        return Ok(());
    }

    write!(out, " ")?;
    for col in 0..COLS {
        write!(out, " {col}")?;
    }
    writeln!(out)?;

    for row in 0..ROWS {
        write!(out, "|")?;
        for col in 0..COLS {
            let cell = board.get(row, col);
            let symbol = style(cell.symbol());
            match cell {
                Cell::Empty => write!(out, " {}", symbol.with(Color::DarkGrey))?,
                Cell::Player => write!(out, " {}", symbol.with(Color::Red).bold())?,
                Cell::Opponent => write!(out, " {}", symbol.with(Color::Yellow).bold())?,
            }
        }
        writeln!(out, " |")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Ask for the human's next column. Flushes so the prompt shows before the
/// read blocks.
pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()
}

pub fn invalid<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{INVALID}")
}

pub fn announce_winner<W: Write>(out: &mut W, actor: Actor) -> io::Result<()> {
    writeln!(out, "{}", win_message(actor))
}

pub fn announce_draw<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{DRAW}")
}

pub fn win_message(actor: Actor) -> String {
    format!("4 in a Row, {} Wins", actor.name())
}
