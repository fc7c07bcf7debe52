use serde::Serialize;

/// A single square of the board.
///
/// The mine flag and the adjacent count are fixed once the board is generated. `is_open` only ever goes from
/// `false` to `true`; `is_flagged` toggles while the cell is closed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_open: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn is_open(self) -> bool {
        self.is_open
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    /// Number of mines among the neighbors, not meaningful for mine cells.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// Whether a reveal targeting this cell may change it.
    pub(crate) const fn is_revealable(self) -> bool {
        !self.is_open && !self.is_flagged
    }

    pub(crate) const fn is_unopened_safe(self) -> bool {
        !self.is_mine && !self.is_open
    }
}
