//! ShellPort - interface to the platform shell
//!
//! Native context menus, verbs and property sheets all run through the
//! platform shell. This crate issues the request and does not track
//! completion.

use std::ops::BitOr;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::Point;

/// Shell operation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// A path could not be resolved to a shell item
    #[error("Cannot resolve shell item: {0}")]
    Resolve(String),
    /// The shell refused or failed the request
    #[error("Shell call failed: {0}")]
    Failed(String),
}

/// Flags for the native shell context menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellMenuFlags(u32);

impl ShellMenuFlags {
    pub const STANDARD: ShellMenuFlags = ShellMenuFlags(0);
    /// Include the rename verb
    pub const RENAME: ShellMenuFlags = ShellMenuFlags(1 << 0);
    /// Include extended verbs normally hidden without shift
    pub const EXTENDED_VERBS: ShellMenuFlags = ShellMenuFlags(1 << 1);

    pub fn contains(&self, other: ShellMenuFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl BitOr for ShellMenuFlags {
    type Output = ShellMenuFlags;

    fn bitor(self, rhs: ShellMenuFlags) -> ShellMenuFlags {
        ShellMenuFlags(self.0 | rhs.0)
    }
}

/// What a native menu is shown for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellMenuTarget {
    /// The directory itself (empty area of the listing)
    Background,
    /// These items inside the directory
    Items(Vec<PathBuf>),
}

/// Request for a native shell context menu
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellMenuRequest {
    pub directory: PathBuf,
    pub target: ShellMenuTarget,
    pub at: Point,
    pub flags: ShellMenuFlags,
}

/// Port interface for the platform shell
pub trait ShellPort {
    /// Show the native context menu and run whatever the user picks
    fn show_context_menu(&mut self, request: &ShellMenuRequest) -> Result<(), ShellError>;

    /// Run a named verb on items of `directory`; no items targets the directory
    fn execute_verb(
        &mut self,
        directory: &Path,
        items: &[PathBuf],
        verb: &str,
    ) -> Result<(), ShellError>;

    /// Show the property sheet for items of `directory`
    fn show_properties(&mut self, directory: &Path, items: &[PathBuf]) -> Result<(), ShellError>;

    /// UNC form of a path on a mapped drive
    fn universal_name(&self, path: &Path) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_combination() {
        let flags = ShellMenuFlags::RENAME | ShellMenuFlags::EXTENDED_VERBS;
        assert!(flags.contains(ShellMenuFlags::RENAME));
        assert!(flags.contains(ShellMenuFlags::EXTENDED_VERBS));
        assert!(!ShellMenuFlags::STANDARD.contains(ShellMenuFlags::RENAME));
        assert_eq!(flags.bits(), 0b11);
    }
}
