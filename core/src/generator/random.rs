use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::*;

/// Uniform placement by rejection sampling, keeping the origin and its neighbours free.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&self, config: &GameConfig, origin: Coord2) -> MineLayout {
        let dimensions = config.dimensions;
        let mut mine_mask: Array2<bool> = Array2::default((dimensions, dimensions).to_nd_index());

        if dimensions == 0 {
            log::warn!("Cannot place mines on an empty board");
            return MineLayout::from_parts(mine_mask, 0);
        }

        // the safe zone shrinks at the edges, so this is at least the config cap
        let safe_cells = 1 + Neighbors::new(origin, dimensions).count() as CellCount;
        let free_cells = area(dimensions).saturating_sub(safe_cells);
        let target = if config.mines > free_cells {
            log::warn!(
                "Only {} cells are free around {:?}, requested {} mines",
                free_cells,
                origin,
                config.mines
            );
            free_cells
        } else {
            config.mines
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        let mut rejected: usize = 0;
        while placed < target {
            let candidate = (
                rng.random_range(0..dimensions),
                rng.random_range(0..dimensions),
            );
            let slot = &mut mine_mask[candidate.to_nd_index()];
            if *slot || is_within_one(origin, candidate) {
                rejected += 1;
                continue;
            }
            *slot = true;
            placed += 1;
        }

        log::debug!(
            "Placed {} mines around origin {:?} ({} draws rejected)",
            placed,
            origin,
            rejected
        );
        MineLayout::from_parts(mine_mask, placed)
    }
}
