use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Places mines uniformly at random by rejection sampling: draw a coordinate, keep it only if it holds no mine
/// yet, until enough mines are placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let side = config.size();
        let mut mines: Array2<bool> = Array2::default((usize::from(side), usize::from(side)));
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // `GameConfig` guarantees at least one free cell, so this terminates almost surely
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;
        while mines_placed < config.mines() {
            let coords: Coord2 = (rng.random_range(0..side), rng.random_range(0..side));
            draws += 1;
            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        log::debug!(
            "generated {}x{} board with {} mines in {} draws (seed {})",
            side,
            side,
            mines_placed,
            draws,
            self.seed
        );
        Board::from_mine_mask(&mines)
    }
}
