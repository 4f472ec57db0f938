//! Open disposition - how a chosen folder gets opened
//!
//! The modifier-to-disposition mapping is a table, not branching, so that
//! config can override single cells and tests can enumerate it.

use serde::{Deserialize, Serialize};

/// Where an opened folder is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenDisposition {
    SameTab,
    BackgroundTab,
    ForegroundTab,
    NewWindow,
}

/// Modifier and button state captured when an interaction starts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub middle_button: bool,
}

impl KeyState {
    pub const NONE: KeyState = KeyState {
        ctrl: false,
        shift: false,
        alt: false,
        middle_button: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn ctrl_shift() -> Self {
        Self {
            ctrl: true,
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl or a middle click both ask for a tab
    pub fn wants_tab(&self) -> bool {
        self.ctrl || self.middle_button
    }
}

/// Per-cell overrides, as read from config
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispositionOverrides {
    #[serde(default)]
    pub plain: Option<OpenDisposition>,
    #[serde(default)]
    pub ctrl: Option<OpenDisposition>,
    #[serde(default)]
    pub shift: Option<OpenDisposition>,
    #[serde(default)]
    pub ctrl_shift: Option<OpenDisposition>,
}

/// Lookup table from (tab gesture, shift) to a disposition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispositionTable {
    // Indexed by `cell(tab, shift)`
    cells: [OpenDisposition; 4],
}

const fn cell(tab: bool, shift: bool) -> usize {
    (tab as usize) << 1 | shift as usize
}

impl DispositionTable {
    /// Build the standard table. With `tabs_in_foreground` a ctrl-open
    /// brings the new tab to the front and ctrl+shift keeps it behind.
    pub fn new(tabs_in_foreground: bool) -> Self {
        let (tab, tab_shift) = if tabs_in_foreground {
            (OpenDisposition::ForegroundTab, OpenDisposition::BackgroundTab)
        } else {
            (OpenDisposition::BackgroundTab, OpenDisposition::ForegroundTab)
        };

        let mut cells = [OpenDisposition::SameTab; 4];
        cells[cell(false, false)] = OpenDisposition::SameTab;
        cells[cell(false, true)] = OpenDisposition::NewWindow;
        cells[cell(true, false)] = tab;
        cells[cell(true, true)] = tab_shift;
        Self { cells }
    }

    /// Apply config overrides on top of the standard table
    pub fn with_overrides(mut self, overrides: &DispositionOverrides) -> Self {
        let entries = [
            (cell(false, false), overrides.plain),
            (cell(true, false), overrides.ctrl),
            (cell(false, true), overrides.shift),
            (cell(true, true), overrides.ctrl_shift),
        ];
        for (index, value) in entries {
            if let Some(disposition) = value {
                self.cells[index] = disposition;
            }
        }
        self
    }

    /// Resolve the disposition for a modifier state
    pub fn resolve(&self, keys: KeyState) -> OpenDisposition {
        self.cells[cell(keys.wants_tab(), keys.shift)]
    }

    /// Disposition used when a command explicitly asks for a new tab
    pub fn new_tab(&self) -> OpenDisposition {
        self.cells[cell(true, false)]
    }
}

impl Default for DispositionTable {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_exhaustive() {
        let table = DispositionTable::default();

        assert_eq!(table.resolve(KeyState::NONE), OpenDisposition::SameTab);
        assert_eq!(table.resolve(KeyState::ctrl()), OpenDisposition::BackgroundTab);
        assert_eq!(table.resolve(KeyState::shift()), OpenDisposition::NewWindow);
        assert_eq!(
            table.resolve(KeyState::ctrl_shift()),
            OpenDisposition::ForegroundTab
        );
    }

    #[test]
    fn test_foreground_tabs_swap_tab_cells() {
        let table = DispositionTable::new(true);

        assert_eq!(table.resolve(KeyState::NONE), OpenDisposition::SameTab);
        assert_eq!(table.resolve(KeyState::ctrl()), OpenDisposition::ForegroundTab);
        assert_eq!(table.resolve(KeyState::shift()), OpenDisposition::NewWindow);
        assert_eq!(
            table.resolve(KeyState::ctrl_shift()),
            OpenDisposition::BackgroundTab
        );
        assert_eq!(table.new_tab(), OpenDisposition::ForegroundTab);
    }

    #[test]
    fn test_middle_button_acts_like_ctrl() {
        let table = DispositionTable::default();
        let middle = KeyState {
            middle_button: true,
            ..KeyState::NONE
        };
        assert_eq!(table.resolve(middle), table.resolve(KeyState::ctrl()));
    }

    #[test]
    fn test_alt_does_not_affect_resolution() {
        let table = DispositionTable::default();
        assert_eq!(table.resolve(KeyState::alt()), OpenDisposition::SameTab);
    }

    #[test]
    fn test_overrides_replace_single_cells() {
        let overrides = DispositionOverrides {
            shift: Some(OpenDisposition::ForegroundTab),
            ..Default::default()
        };
        let table = DispositionTable::default().with_overrides(&overrides);

        assert_eq!(table.resolve(KeyState::shift()), OpenDisposition::ForegroundTab);
        assert_eq!(table.resolve(KeyState::ctrl()), OpenDisposition::BackgroundTab);
        assert_eq!(table.resolve(KeyState::NONE), OpenDisposition::SameTab);
    }
}
