/// Single coordinate axis, used for the board side length and row/column positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn square(side: Coord) -> CellCount {
    let side = side as CellCount;
    side.saturating_mul(side)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it stays inside a `side`×`side` grid.
fn apply_delta(coords: Coord2, delta: (i8, i8), side: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row)?;
    let next_col = col.checked_add_signed(d_col)?;
    if next_row >= side || next_col >= side {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the up-to-8 Chebyshev neighbors of a cell, clipped to the grid.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    side: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, side: Coord) -> Self {
        Self {
            center,
            side,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next_item) = apply_delta(self.center, delta, self.side) {
                return Some(next_item);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors(center: Coord2, side: Coord) -> Vec<Coord2> {
        NeighborIter::new(center, side).collect()
    }

    #[test]
    fn interior_cell_has_eight_distinct_neighbors() {
        let found = neighbors((4, 4), 10);

        assert_eq!(
            found,
            vec![
                (3, 3),
                (3, 4),
                (3, 5),
                (4, 3),
                (4, 5),
                (5, 3),
                (5, 4),
                (5, 5)
            ]
        );
    }

    #[test]
    fn corners_and_edges_are_clipped() {
        assert_eq!(neighbors((0, 0), 10), vec![(0, 1), (1, 0), (1, 1)]);
        assert_eq!(neighbors((9, 9), 10), vec![(8, 8), (8, 9), (9, 8)]);
        assert_eq!(neighbors((0, 5), 10).len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert!(neighbors((0, 0), 1).is_empty());
    }

    #[test]
    fn square_saturates() {
        assert_eq!(square(10), 100);
        assert_eq!(square(Coord::MAX), 65025);
    }
}
