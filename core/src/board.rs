use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Summary of the board predicates. A revealed mine wins over everything else.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Ready,
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Ready
    }
}

/// Square minesweeper grid. Mines are laid by `G` on the first reveal.
///
/// The board never locks itself: once won or lost, queries keep reporting that, and it is up to
/// the caller to stop sending moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board<G = RandomMineGenerator> {
    config: GameConfig,
    grid: Array2<Cell>,
    starting_point: Option<Coord2>,
    generator: Option<G>,
}

impl Board<RandomMineGenerator> {
    /// Board seeded from OS entropy.
    #[cfg(feature = "std")]
    pub fn new(config: GameConfig) -> Result<Self> {
        use rand::Rng;

        Self::with_seed(config, rand::rng().random())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }
}

impl Board<MineLayout> {
    /// Board that will use exactly these mines, wherever the first reveal lands.
    ///
    /// The layout must respect the same mine cap as a generated one. It is not moved away from the
    /// first reveal, which is what tests and replays want.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let config = layout.game_config();
        Self::with_generator(config, layout)
    }
}

impl<G: MineGenerator> Board<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, generator))
    }

    fn from_parts(config: GameConfig, generator: G) -> Self {
        let size = (config.dimensions, config.dimensions);
        Self {
            config,
            grid: Array2::default(size.to_nd_index()),
            starting_point: None,
            generator: Some(generator),
        }
    }

    /// Checks a board that came from outside, e.g. deserialized. Moves on a board that fails this
    /// may panic.
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;
        let edge = usize::from(self.dimensions());
        if self.grid.dim() != (edge, edge) {
            return Err(GameError::InvalidBoardShape);
        }
        match self.starting_point {
            Some(start) if !in_bounds(start, self.dimensions()) => Err(GameError::InvalidCoords),
            None if self.generator.is_none() => Err(GameError::MissingGenerator),
            _ => Ok(()),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn dimensions(&self) -> Coord {
        self.config.dimensions
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn starting_point(&self) -> Option<Coord2> {
        self.starting_point
    }

    /// Construction cannot fail half way, so a board is always created.
    pub fn is_created(&self) -> bool {
        true
    }

    pub fn is_started(&self) -> bool {
        self.starting_point.is_some()
    }

    /// Every safe cell is revealed and every mine carries a flag.
    pub fn is_won(&self) -> bool {
        self.grid.iter().all(|cell| {
            if cell.has_mine() {
                cell.is_flagged()
            } else {
                cell.is_revealed()
            }
        })
    }

    pub fn is_over(&self) -> bool {
        self.grid
            .iter()
            .any(|cell| cell.is_revealed() && cell.has_mine())
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Lost
        } else if self.is_won() {
            GameStatus::Won
        } else if self.is_started() {
            GameStatus::Active
        } else {
            GameStatus::Ready
        }
    }

    /// Mines minus flags. Goes negative when the player over-flags.
    pub fn remaining_mine_count(&self) -> isize {
        let flagged = self.grid.iter().filter(|cell| cell.is_flagged()).count();
        (self.config.mines as isize) - (flagged as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.grid.get(coords.to_nd_index()).copied()
    }

    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        self.cell_at(coords).map(Cell::view)
    }

    /// Live count of mined neighbours, `None` off the board.
    pub fn hint(&self, coords: Coord2) -> Option<u8> {
        in_bounds(coords, self.dimensions()).then(|| self.count_adjacent_mines(coords))
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.grid
            .indexed_iter()
            .map(|((x, y), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn flagged_cells(&self) -> Vec<(Coord2, Cell)> {
        self.iter_cells().filter(|(_, cell)| cell.is_flagged()).collect()
    }

    pub fn revealed_cells(&self) -> Vec<(Coord2, Cell)> {
        self.iter_cells().filter(|(_, cell)| cell.is_revealed()).collect()
    }

    pub fn triggered_mines(&self) -> Vec<Coord2> {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_revealed() && cell.has_mine())
            .map(|(coords, _)| coords)
            .collect()
    }

    pub fn flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.set_flag(coords, true)
    }

    pub fn unflag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        self.set_flag(coords, false)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let flagged = self.grid[coords.to_nd_index()].is_flagged();
        self.set_flag(coords, !flagged)
    }

    fn set_flag(&mut self, coords: Coord2, flagged: bool) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        Ok(if self.grid[coords.to_nd_index()].set_flag(flagged) {
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        })
    }

    /// Opens a cell, laying the mines first if this is the opening move.
    ///
    /// A zero hint spreads to every unrevealed safe neighbour, breadth first. Flags on the cells
    /// opened this way are dropped.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if !self.is_started() {
            self.start(coords)?;
        }

        let cell = self.grid[coords.to_nd_index()];
        if cell.has_mine() {
            let hint = self.count_adjacent_mines(coords);
            self.grid[coords.to_nd_index()].open(hint);
            return Ok(if cell.is_revealed() {
                RevealOutcome::NoChange
            } else {
                log::debug!("Mine revealed at {:?}", coords);
                RevealOutcome::HitMine
            });
        }

        if self.open_region(coords) == 0 {
            Ok(RevealOutcome::NoChange)
        } else if self.is_won() {
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Opens the whole board, recomputing every hint. Meant for showing the board after the game.
    pub fn resolve_all(&mut self) {
        let dimensions = self.dimensions();
        for x in 0..dimensions {
            for y in 0..dimensions {
                let hint = self.count_adjacent_mines((x, y));
                self.grid[(x, y).to_nd_index()].open(hint);
            }
        }
    }

    fn start(&mut self, origin: Coord2) -> Result<()> {
        let generator = self.generator.as_ref().ok_or(GameError::MissingGenerator)?;
        let layout = generator.generate(&self.config, origin);
        self.lay_mines(&layout)?;
        self.generator = None;
        self.starting_point = Some(origin);
        log::debug!(
            "Game started at {:?} with {} mines",
            origin,
            self.config.mines
        );
        Ok(())
    }

    fn lay_mines(&mut self, layout: &MineLayout) -> Result<()> {
        if layout.dimensions() != self.dimensions() {
            return Err(GameError::InvalidBoardShape);
        }
        for coords in layout.iter_mines() {
            self.grid[coords.to_nd_index()].place_mine();
        }
        if layout.mine_count() != self.config.mines {
            log::warn!(
                "Laid {} mines, expected {}",
                layout.mine_count(),
                self.config.mines
            );
            self.config.mines = layout.mine_count();
        }
        Ok(())
    }

    /// Returns how many cells went from hidden to revealed.
    fn open_region(&mut self, origin: Coord2) -> CellCount {
        let dimensions = self.dimensions();
        let mut opened: CellCount = 0;
        let mut queued = BTreeSet::from([origin]);
        let mut frontier = VecDeque::from([origin]);

        while let Some(coords) = frontier.pop_front() {
            let hint = self.count_adjacent_mines(coords);
            let cell = &mut self.grid[coords.to_nd_index()];
            if !cell.is_revealed() {
                opened += 1;
            }
            cell.open(hint);

            if hint != 0 {
                continue;
            }

            for next in Neighbors::new(coords, dimensions) {
                let neighbor = self.grid[next.to_nd_index()];
                if neighbor.is_revealed() || neighbor.has_mine() || !queued.insert(next) {
                    continue;
                }
                frontier.push_back(next);
            }
        }

        log::trace!("Reveal at {:?} opened {} cells", origin, opened);
        opened
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        // at most eight neighbours
        Neighbors::new(coords, self.dimensions())
            .filter(|&pos| self.grid[pos.to_nd_index()].has_mine())
            .count() as u8
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.dimensions()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}
