use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Square grid of cells with a fixed mine layout.
///
/// The layout and the adjacent counts are set when the board is built and never change afterwards. Open and flag
/// state only change through [`Board::reveal`] and [`Board::toggle_flag`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Builds a closed board from a mine mask, precomputing the adjacent counts of every safe cell.
    pub(crate) fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let (rows, cols) = mine_mask.dim();
        debug_assert_eq!(rows, cols, "board must be square");
        let side = Coord::try_from(rows).unwrap_or(Coord::MAX);

        let mut mine_count: CellCount = 0;
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            let is_mine = mine_mask[[row, col]];
            if is_mine {
                mine_count += 1;
                return Cell {
                    is_mine,
                    ..Default::default()
                };
            }
            let coords = (row as Coord, col as Coord);
            let adjacent_mines = NeighborIter::new(coords, side)
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count() as u8;
            Cell {
                adjacent_mines,
                ..Default::default()
            }
        });

        Self { cells, mine_count }
    }

    /// Builds a board with mines at exactly the given coordinates, duplicates collapse into one mine.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default((usize::from(size), usize::from(size)));

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        GameConfig::new(size, CellCount::try_from(mines).unwrap_or(CellCount::MAX))?;

        Ok(Self::from_mine_mask(&mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(self.size(), self.mine_count).unwrap_or_default()
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let size = self.size();
        row < size && col < size
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// The cell at `coords`, or `None` when out of bounds.
    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_flagged).count() as CellCount
    }

    /// Mines not yet accounted for by a flag, negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.mine_count) - i32::from(self.flagged_count())
    }

    /// The mine that was opened, if the game has been lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.cells()
            .find(|(_, cell)| cell.is_mine && cell.is_open)
            .map(|(coords, _)| coords)
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        self.cells.get_mut(coords.to_nd_index())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// One row per line: `#` closed, `F` flagged, `*` opened mine, `.` open zero, digits for counts.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match (cell.is_open, cell.is_flagged, cell.is_mine) {
                    (false, true, _) => f.write_str("F")?,
                    (false, false, _) => f.write_str("#")?,
                    (true, _, true) => f.write_str("*")?,
                    (true, _, false) if cell.adjacent_mines == 0 => f.write_str(".")?,
                    (true, _, false) => write!(f, "{}", cell.adjacent_mines)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
