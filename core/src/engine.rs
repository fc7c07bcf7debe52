use crate::*;

/// Classifies the board: `Loss` once a mine is open, `Win` once every safe cell is open.
///
/// Always recomputed from the cells so it cannot drift from the board.
pub fn evaluate(board: &Board) -> Outcome {
    let mut all_safe_open = true;
    for (_, cell) in board.cells() {
        if cell.is_mine() && cell.is_open() {
            return Outcome::Loss;
        }
        if cell.is_unopened_safe() {
            all_safe_open = false;
        }
    }

    if all_safe_open {
        Outcome::Win
    } else {
        Outcome::InProgress
    }
}

impl Board {
    pub fn outcome(&self) -> Outcome {
        evaluate(self)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_finished()
    }

    /// Opens the cell at `coords`, flooding through zero-count cells.
    ///
    /// Out-of-bounds, open or flagged targets and finished games leave the board untouched and report
    /// [`RevealOutcome::NoChange`].
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(cell) = self.cell_at(coords) else {
            log::trace!("reveal {:?}: out of bounds", coords);
            return RevealOutcome::NoChange;
        };
        if !cell.is_revealable() || self.is_finished() {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine() {
            self.open(coords);
            log::debug!("reveal {:?}: hit mine", coords);
            return RevealOutcome::HitMine;
        }

        let opened = self.flood_open(coords);
        log::trace!("reveal {:?}: opened {} cells", coords, opened);

        match self.outcome() {
            Outcome::Win => {
                log::debug!("reveal {:?}: all safe cells open", coords);
                RevealOutcome::Won
            }
            _ => RevealOutcome::Revealed,
        }
    }

    /// Same as [`Board::reveal`] but reports the derived game outcome, for callers that only care about that.
    pub fn reveal_outcome(&mut self, coords: Coord2) -> Outcome {
        self.reveal(coords);
        self.outcome()
    }

    /// Flips the flag on a closed cell. Open cells and finished games are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.is_finished() {
            return MarkOutcome::NoChange;
        }
        match self.cell_mut(coords) {
            Some(cell) if !cell.is_open => {
                cell.is_flagged = !cell.is_flagged;
                MarkOutcome::Changed
            }
            _ => MarkOutcome::NoChange,
        }
    }

    fn open(&mut self, coords: Coord2) {
        if let Some(cell) = self.cell_mut(coords) {
            cell.is_open = true;
        }
    }

    /// Opens a safe cell and, through an explicit worklist, every cell reachable from it across zero-count cells.
    ///
    /// Each neighbor is pushed with its own coordinates; cells are checked before being pushed so nothing is
    /// opened twice. Mines and flagged cells stop the flood.
    fn flood_open(&mut self, start: Coord2) -> usize {
        let mut opened = 0;
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = self[coords];
            if !cell.is_revealable() || cell.is_mine() {
                continue;
            }

            self.open(coords);
            opened += 1;

            if cell.adjacent_mines() == 0 {
                to_visit.extend(
                    self.iter_neighbors(coords)
                        .filter(|&pos| self[pos].is_revealable() && !self[pos].is_mine()),
                );
            }
        }

        opened
    }
}
