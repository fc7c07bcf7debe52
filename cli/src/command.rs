use minefield_core::{Coord, Coord2};

/// A line typed by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Help,
    Quit,
}

impl Command {
    /// Parses `r ROW COL`, `f ROW COL`, a bare `ROW COL` (reveal), `n`, `h` or `q`.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".to_string());
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            "n" | "new" => Self::NewGame,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => {
                let row = parse_axis(head)?;
                let col = words.next().ok_or("missing column")?;
                Self::Reveal((row, parse_axis(col)?))
            }
        };

        match words.next() {
            Some(extra) => Err(format!("unexpected `{}`", extra)),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, String> {
    let row = words.next().ok_or("missing row")?;
    let col = words.next().ok_or("missing column")?;
    Ok((parse_axis(row)?, parse_axis(col)?))
}

fn parse_axis(word: &str) -> Result<Coord, String> {
    word.parse()
        .map_err(|_| format!("`{}` is not a valid coordinate", word))
}

pub(crate) const HELP: &str = "\
commands:
  r ROW COL   reveal a cell (or just ROW COL)
  f ROW COL   toggle a flag
  n           start a new game
  h           show this help
  q           quit";
