#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod snapshot;
mod types;

/// Smallest board edge a game should be offered with. The engine itself accepts any positive edge.
pub const MIN_DIMENSIONS: Coord = 5;

/// Cells kept mine free around the first reveal: the origin and its eight neighbours.
pub const SAFE_ZONE: CellCount = 9;

/// Preset mine density levels, from gentle to brutal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Baby,
    Cool,
    Neutral,
    Hot,
    Devil,
}

impl Difficulty {
    pub const ALL: [Self; 5] = [Self::Baby, Self::Cool, Self::Neutral, Self::Hot, Self::Devil];

    /// Mines per unit of board edge.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Baby => 1.0,
            Self::Cool => 2.0,
            Self::Neutral => 3.0,
            Self::Hot => 4.0,
            Self::Devil => 5.0,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Baby
    }
}

impl From<Difficulty> for f64 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.factor()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dimensions: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(dimensions: Coord, mines: CellCount) -> Self {
        Self { dimensions, mines }
    }

    /// Derives the mine count linearly from the edge length, capped so the first reveal always has
    /// a free safe zone.
    pub fn new(dimensions: Coord, difficulty: impl Into<f64>) -> Result<Self> {
        if dimensions == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let allowed = Self::max_mines(dimensions);
        let difficulty: f64 = difficulty.into();
        let requested = f64::from(dimensions) * difficulty;
        let mines = if requested > 0.0 {
            if requested > f64::from(allowed) {
                log::warn!(
                    "Requested {} mines but a {}x{} board only fits {}",
                    requested,
                    dimensions,
                    dimensions,
                    allowed
                );
            }
            // truncation is the floor here, the value is non-negative
            requested.min(f64::from(allowed)) as CellCount
        } else {
            0
        };

        Ok(Self::new_unchecked(dimensions, mines))
    }

    /// Like [`GameConfig::new`] but refuses boards smaller than [`MIN_DIMENSIONS`].
    pub fn checked(dimensions: Coord, difficulty: impl Into<f64>) -> Result<Self> {
        if dimensions < MIN_DIMENSIONS {
            return Err(GameError::DimensionsTooSmall {
                minimum: MIN_DIMENSIONS,
            });
        }
        Self::new(dimensions, difficulty)
    }

    pub fn with_mines(dimensions: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(dimensions, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dimensions == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let allowed = Self::max_mines(self.dimensions);
        if self.mines > allowed {
            return Err(GameError::TooManyMines { allowed });
        }
        Ok(())
    }

    pub const fn max_mines(dimensions: Coord) -> CellCount {
        area(dimensions).saturating_sub(SAFE_ZONE)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.dimensions)
    }
}

/// Fixed mine positions on a square board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_parts(mine_mask: Array2<bool>, mine_count: CellCount) -> Self {
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols || rows == 0 || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        // at most Coord::MAX² cells, checked above
        Ok(Self::from_parts(mine_mask, mine_count as CellCount))
    }

    pub fn from_mine_coords(dimensions: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        if dimensions == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let mut mine_mask: Array2<bool> = Array2::default((dimensions, dimensions).to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, dimensions) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.dimensions(), self.mine_count)
    }

    pub fn dimensions(&self) -> Coord {
        // square and bounded by Coord::MAX on construction
        self.mine_mask.nrows() as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
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

#[derive(Copy, Clone, Debug, PartialEq)]
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
