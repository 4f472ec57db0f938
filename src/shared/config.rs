//! Pane Configuration (paneview.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::{Column, ColumnSet};
use crate::domain::value_objects::{DispositionOverrides, DispositionTable, ThemeMode, ViewMode};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "paneview.toml";

/// Listing configuration loaded from paneview.toml
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaneConfig {
    /// Light, dark or follow the OS
    #[serde(default)]
    pub theme: ThemeMode,

    /// Ctrl-opened folders come to the front
    #[serde(default)]
    pub open_tabs_in_foreground: bool,

    #[serde(default)]
    pub view_mode: ViewMode,

    /// Per-gesture disposition overrides
    #[serde(default)]
    pub dispositions: DispositionOverrides,

    /// Saved column order, visibility and widths
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl PaneConfig {
    /// Find paneview.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: %APPDATA%/paneview, exe dir, cwd
        Self::candidate_paths()
            .into_iter()
            .find(|candidate| candidate.exists())
    }

    /// Where a new config file is written when none exists yet
    pub fn default_save_path() -> PathBuf {
        Self::candidate_paths()
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    fn candidate_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("paneview").join(CONFIG_FILE_NAME)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME))),
            Some(PathBuf::from(CONFIG_FILE_NAME)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load configuration from file, returning defaults if not found
    pub fn load() -> Self {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "ignoring config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: PaneConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Column set built from the saved columns
    pub fn column_set(&self) -> ColumnSet {
        if self.columns.is_empty() {
            ColumnSet::default()
        } else {
            ColumnSet::from_saved(&self.columns)
        }
    }

    /// Remember a column set for the next session
    pub fn set_column_set(&mut self, columns: &ColumnSet) {
        self.columns = columns.as_slice().to_vec();
    }

    /// Disposition table with the configured overrides applied
    pub fn disposition_table(&self) -> DispositionTable {
        DispositionTable::new(self.open_tabs_in_foreground).with_overrides(&self.dispositions)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ColumnId;
    use crate::domain::value_objects::{KeyState, OpenDisposition};

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: PaneConfig = toml::from_str("").unwrap();
        assert_eq!(config, PaneConfig::default());
        assert_eq!(config.column_set(), ColumnSet::default());
        assert_eq!(config.view_mode, ViewMode::Details);
    }

    #[test]
    fn test_parse_full_file() {
        let config: PaneConfig = toml::from_str(
            r#"
            theme = "dark"
            open_tabs_in_foreground = true
            view_mode = "list"

            [dispositions]
            shift = "background_tab"

            [[columns]]
            id = "size"
            checked = true
            width = 80

            [[columns]]
            id = "name"
            checked = true
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.view_mode, ViewMode::List);

        let table = config.disposition_table();
        assert_eq!(table.resolve(KeyState::ctrl()), OpenDisposition::ForegroundTab);
        assert_eq!(table.resolve(KeyState::shift()), OpenDisposition::BackgroundTab);

        let columns = config.column_set();
        assert_eq!(columns.visible_ids(), vec![ColumnId::Size, ColumnId::Name]);
        assert_eq!(columns.get(ColumnId::Size).map(|c| c.width), Some(80));
    }

    #[test]
    fn test_bad_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "theme = 12").unwrap();

        assert!(matches!(
            PaneConfig::load_from_path(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut columns = ColumnSet::default();
        columns.move_visible(0, 3).unwrap();
        let mut config = PaneConfig {
            theme: ThemeMode::Light,
            ..Default::default()
        };
        config.set_column_set(&columns);
        config.save_to_path(&path).unwrap();

        let loaded = PaneConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.column_set(), columns);
    }
}
