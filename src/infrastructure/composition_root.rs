//! CompositionRoot - Wires one listing session together
//!
//! A `PaneSession` owns the loaded configuration. It hands out controllers
//! built from platform ports and writes the column layout back on close.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::adapters::controllers::ListingController;
use crate::application::ports::{
    ClipboardPort, DpiContext, HostPort, ListingPort, MenuPort, ShellPort,
};
use crate::application::services::{ListingCommandHandler, ThemeSetup};
use crate::domain::entities::ColumnSet;
use crate::domain::value_objects::ViewMode;
use crate::shared::config::{ConfigError, PaneConfig};

/// Configuration-backed session of the listing surface
pub struct PaneSession {
    config: PaneConfig,
    config_path: PathBuf,
}

impl PaneSession {
    /// Load configuration from `config_path`, or from the standard
    /// locations when `None`. Missing or unreadable files give defaults.
    pub fn open(config_path: Option<&Path>) -> Self {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => PaneConfig::find_config_path().unwrap_or_else(PaneConfig::default_save_path),
        };

        let config = match PaneConfig::load_from_path(&config_path) {
            Ok(config) => config,
            Err(ConfigError::IoError(e)) if e.kind() == ErrorKind::NotFound => PaneConfig::default(),
            Err(e) => {
                warn!(path = %config_path.display(), "using default config: {}", e);
                PaneConfig::default()
            }
        };

        info!(path = %config_path.display(), theme = ?config.theme, "pane session opened");
        Self {
            config,
            config_path,
        }
    }

    pub fn config(&self) -> &PaneConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Column set the listing should start with
    pub fn initial_columns(&self) -> ColumnSet {
        self.config.column_set()
    }

    pub fn initial_view_mode(&self) -> ViewMode {
        self.config.view_mode
    }

    /// Theme setup to apply to the main window
    pub fn theme(&self) -> ThemeSetup {
        ThemeSetup::new(self.config.theme)
    }

    /// Build a controller for one listing
    pub fn controller<L, C, S, M, H>(
        &self,
        listing: L,
        clipboard: C,
        shell: S,
        menus: M,
        host: H,
        dpi: Box<dyn DpiContext>,
    ) -> ListingController<L, C, S, M, H>
    where
        L: ListingPort,
        C: ClipboardPort,
        S: ShellPort,
        M: MenuPort,
        H: HostPort,
    {
        ListingController::new(ListingCommandHandler::new(
            listing,
            clipboard,
            shell,
            menus,
            host,
            dpi,
            self.config.disposition_table(),
        ))
    }

    /// Persist the final column layout and view mode
    pub fn close(&mut self, columns: &ColumnSet, view_mode: ViewMode) -> Result<(), ConfigError> {
        self.config.set_column_set(columns);
        self.config.view_mode = view_mode;
        self.config.save_to_path(&self.config_path)?;
        info!(path = %self.config_path.display(), "pane session saved");
        Ok(())
    }
}
