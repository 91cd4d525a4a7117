use rand::prelude::*;

use super::*;

/// Uniformly random placement that keeps the first revealed cell and its
/// neighbors free of mines.
///
/// Seeded once; every game drawn from the same generator continues the same
/// random stream, so a sequence of games is reproducible from the seed.
#[derive(Clone, Debug)]
pub struct RandomLayoutGenerator {
    rng: SmallRng,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineLayoutGenerator for RandomLayoutGenerator {
    fn generate(&mut self, grid: &mut Grid, origin: CellIndex) -> CellCount {
        let total_cells = grid.total_cells();
        let safe_zone = grid.safe_zone(origin);

        let requested = grid.requested_mines();
        let max_mines = GameConfig::max_mines(grid.size());
        if requested > max_mines {
            log::warn!(
                "Too many mines for the safe zone, requested {} but only {} fit",
                requested,
                max_mines
            );
        }

        // never loop on a board with fewer free cells than mines
        let free_cells = grid
            .iter()
            .filter(|&(index, cell)| !cell.is_mine() && !safe_zone.contains(&index))
            .count() as CellCount;
        let target = requested.min(max_mines).min(free_cells);

        let mut mines_placed = 0;
        while mines_placed < target {
            let index = self.rng.random_range(0..total_cells);
            if safe_zone.contains(&index) {
                continue;
            }
            if grid.place_mine(index) {
                mines_placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board around origin {}",
            mines_placed,
            grid.rows(),
            grid.cols(),
            origin
        );
        mines_placed
    }
}
