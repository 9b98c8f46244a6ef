use serde::{Deserialize, Serialize};

/// One grid position as stored by the board.
///
/// The board mutates cells in place; callers only ever receive copies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    hint: u8,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    /// Neighbouring mine count recorded when the cell was revealed.
    pub const fn hint(self) -> Option<u8> {
        if self.is_revealed {
            Some(self.hint)
        } else {
            None
        }
    }

    pub const fn view(self) -> CellView {
        match (self.is_revealed, self.has_mine, self.is_flagged) {
            (true, true, _) => CellView::Mine,
            (true, false, _) => CellView::Open(self.hint),
            (false, _, true) => CellView::Flagged,
            (false, _, false) => CellView::Hidden,
        }
    }

    pub(crate) fn place_mine(&mut self) {
        self.has_mine = true;
    }

    /// Returns whether the flag changed.
    pub(crate) fn set_flag(&mut self, flagged: bool) -> bool {
        if flagged && self.is_revealed {
            return false;
        }
        let changed = self.is_flagged != flagged;
        self.is_flagged = flagged;
        changed
    }

    /// Opens the cell with the given hint.
    ///
    /// A flag on the cell is dropped, so a cell is never both flagged and revealed. Reveal keeps
    /// no memory of the flag: a front end that wants flagged cells to be unclickable has to check
    /// `is_flagged` before calling reveal.
    pub(crate) fn open(&mut self, hint: u8) {
        self.is_revealed = true;
        self.is_flagged = false;
        self.hint = hint;
    }
}

/// What a player gets to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Open(u8),
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
