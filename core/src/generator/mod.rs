use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    /// Produces a closed board matching `config`, with adjacent counts already computed.
    fn generate(self, config: GameConfig) -> Board;
}
