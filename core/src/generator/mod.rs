use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Places the mines for a game on a blank grid.
///
/// Called once per game, by the first reveal, with that reveal's cell as
/// `origin`. Returns the number of mines placed.
pub trait MineLayoutGenerator {
    fn generate(&mut self, grid: &mut Grid, origin: CellIndex) -> CellCount;

    /// Mines a game with `config` will hold once generated.
    fn planned_mines(&self, config: GameConfig) -> CellCount {
        config.mines.min(GameConfig::max_mines(config.size))
    }
}
