use super::*;

/// Places a predetermined set of mines, ignoring the origin.
///
/// Meant for scripted boards such as tutorials and tests, the first reveal
/// is not guaranteed to be safe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedLayoutGenerator {
    size: Coord2,
    mines: Vec<CellIndex>,
}

impl FixedLayoutGenerator {
    pub fn new(size: Coord2, mines: impl IntoIterator<Item = CellIndex>) -> Result<Self> {
        let cells = mult(size.0, size.1) as usize;
        let mines: Vec<_> = mines.into_iter().collect();
        if let Some(&index) = mines.iter().find(|&&index| index >= cells) {
            return Err(GameError::InvalidIndex { index, cells });
        }
        Ok(Self { size, mines })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    /// The config a board needs to play this layout.
    pub fn game_config(&self) -> GameConfig {
        let mut unique = self.mines.clone();
        unique.sort_unstable();
        unique.dedup();
        GameConfig::new_unchecked(self.size, unique.len() as CellCount)
    }
}

impl MineLayoutGenerator for FixedLayoutGenerator {
    fn planned_mines(&self, config: GameConfig) -> CellCount {
        if config.size == self.size {
            self.game_config().mines
        } else {
            0
        }
    }

    fn generate(&mut self, grid: &mut Grid, _origin: CellIndex) -> CellCount {
        if grid.size() != self.size {
            log::warn!(
                "Fixed layout is {:?} but board is {:?}, no mines placed",
                self.size,
                grid.size()
            );
            return 0;
        }

        let mines_placed = self
            .mines
            .iter()
            .filter(|&&index| grid.place_mine(index))
            .count() as CellCount;
        log::debug!("Placed {} scripted mines", mines_placed);
        mines_placed
    }
}
