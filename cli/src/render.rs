use std::io::{self, Write};

use minefield_core::{Cell, Outcome, format_time};

use crate::session::GameSession;

/// What a cell looks like on screen, mines only show up once the game is lost.
fn glyph(cell: Cell, outcome: Outcome) -> char {
    match (cell.is_open(), cell.is_mine()) {
        (true, true) => 'X',
        (true, false) => match cell.adjacent_mines() {
            0 => '.',
            count => char::from(b'0' + count),
        },
        (false, true) if outcome == Outcome::Loss && !cell.is_flagged() => '*',
        (false, false) if outcome == Outcome::Loss && cell.is_flagged() => 'x',
        (false, _) if cell.is_flagged() => 'F',
        (false, _) => '#',
    }
}

pub(crate) fn draw(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let board = session.board();
    let outcome = session.outcome();

    writeln!(
        out,
        "mines: {:>3}   time: {}   moves: {}",
        board.mines_left(),
        format_time(session.elapsed_secs()),
        session.move_count()
    )?;

    write!(out, "   ")?;
    for col in 0..board.size() {
        write!(out, " {}", col % 10)?;
    }
    writeln!(out)?;

    for row in 0..board.size() {
        write!(out, "{:>3}", row)?;
        for col in 0..board.size() {
            write!(out, " {}", glyph(board[(row, col)], outcome))?;
        }
        writeln!(out)?;
    }

    match outcome {
        Outcome::InProgress => {}
        Outcome::Win => writeln!(
            out,
            "cleared in {}! `n` for a new game",
            format_time(session.elapsed_secs())
        )?,
        Outcome::Loss => writeln!(out, "boom! `n` for a new game")?,
    }
    Ok(())
}
