use serde::{Deserialize, Serialize};

pub use board::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod clock;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Side length of the classic board.
pub const DEFAULT_SIZE: Coord = 10;

/// Mines on the classic board.
pub const DEFAULT_MINES: CellCount = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Validates a square board of `size`×`size` cells holding `mines` mines.
    ///
    /// At least one mine and at least one safe cell are required.
    pub const fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 || mines == 0 || mines >= square(size) {
            return Err(GameError::InvalidConfiguration { size, mines });
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            mines: DEFAULT_MINES,
        }
    }
}

/// State of the game derived from the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win,
    Loss,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// What a single reveal did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Starts a new game on a randomly seeded board.
pub fn new_game(size: Coord, mine_count: CellCount) -> Result<Board> {
    new_game_with_seed(size, mine_count, rand::random())
}

/// Starts a new game whose layout is fully determined by `seed`.
pub fn new_game_with_seed(size: Coord, mine_count: CellCount, seed: u64) -> Result<Board> {
    let config = GameConfig::new(size, mine_count)?;
    Ok(RandomBoardGenerator::new(seed).generate(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_degenerate_boards() {
        use GameError::InvalidConfiguration;

        assert_eq!(
            GameConfig::new(0, 1),
            Err(InvalidConfiguration { size: 0, mines: 1 })
        );
        assert_eq!(
            GameConfig::new(10, 0),
            Err(InvalidConfiguration { size: 10, mines: 0 })
        );
        assert_eq!(
            GameConfig::new(10, 100),
            Err(InvalidConfiguration {
                size: 10,
                mines: 100
            })
        );
        assert!(GameConfig::new(10, 99).is_ok());
        assert!(GameConfig::new(2, 3).is_ok());
    }

    #[test]
    fn default_config_is_classic_board() {
        let config = GameConfig::default();

        assert_eq!(config, GameConfig::new(10, 10).unwrap());
        assert_eq!(config.total_cells(), 100);
    }

    #[test]
    fn new_game_validates_before_generating() {
        assert!(new_game(10, 100).is_err());
        assert!(new_game(0, 0).is_err());
        assert!(new_game(10, 10).is_ok());
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = new_game_with_seed(10, 10, 42).unwrap();
        let b = new_game_with_seed(10, 10, 42).unwrap();

        assert_eq!(a, b);
    }
}
