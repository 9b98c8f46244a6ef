use crate::*;
pub use random::*;

mod random;

/// Decides where mines go once the first reveal position is known.
///
/// The board only drops its generator after the layout has been laid, so `generate` may run again
/// when a layout is refused.
pub trait MineGenerator {
    fn generate(&self, config: &GameConfig, origin: Coord2) -> MineLayout;
}

/// A fixed layout ignores the origin, which lets tests and replays pick every mine.
impl MineGenerator for MineLayout {
    fn generate(&self, config: &GameConfig, origin: Coord2) -> MineLayout {
        if self.contains_mine(origin) {
            log::debug!("Preset layout has a mine under the first reveal {:?}", origin);
        }
        if self.mine_count() != config.mines {
            log::warn!(
                "Preset layout holds {} mines, config asked for {}",
                self.mine_count(),
                config.mines
            );
        }
        self.clone()
    }
}
