use ndarray::Array2;
use rand::prelude::*;

use crate::*;

/// Uniform random mine placement driven by an explicit seed.
///
/// Draws cell indices in `[0, total_cells)` and marks every still-free hit
/// until the requested number of mines is placed. Rejection sampling is fine
/// here: the config guarantees at least one safe cell, so the loop always
/// terminates, and mine counts are small relative to the grid in practice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let (width, height) = config.size;
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard);
        }
        let total = config.total_cells();
        if config.mines >= total {
            return Err(GameError::TooManyMines);
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;

        while placed < config.mines {
            let cell = rng.random_range(0..total);
            let coords = (
                (cell % width as CellCount) as Coord,
                (cell / width as CellCount) as Coord,
            );
            let slot = &mut mine_mask[coords.to_nd_index()];
            if !*slot {
                *slot = true;
                placed += 1;
            }
        }

        log::debug!("placed {placed} mines on a {width}x{height} grid");
        Ok(MineLayout::from_mine_mask(mine_mask))
    }
}
