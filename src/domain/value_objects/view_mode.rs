//! View modes of the listing and their menu commands

use serde::{Deserialize, Serialize};

use super::command_id::CommandId;

/// Presentation of the listing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Icons,
    SmallIcons,
    List,
    Details,
    Tiles,
    Thumbnails,
    ExtraLargeIcons,
    LargeIcons,
}

/// Menu order of the view modes, largest first
pub const VIEW_MODES: [ViewMode; 8] = [
    ViewMode::ExtraLargeIcons,
    ViewMode::LargeIcons,
    ViewMode::Icons,
    ViewMode::SmallIcons,
    ViewMode::List,
    ViewMode::Details,
    ViewMode::Thumbnails,
    ViewMode::Tiles,
];

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Details
    }
}

impl ViewMode {
    /// Command id of the menu entry that switches to this mode
    pub fn menu_id(&self) -> CommandId {
        CommandId(match self {
            ViewMode::ExtraLargeIcons => 40101,
            ViewMode::LargeIcons => 40102,
            ViewMode::Icons => 40103,
            ViewMode::SmallIcons => 40104,
            ViewMode::List => 40105,
            ViewMode::Details => 40106,
            ViewMode::Thumbnails => 40107,
            ViewMode::Tiles => 40108,
        })
    }

    /// Reverse lookup from a menu command
    pub fn from_menu_id(id: CommandId) -> Option<ViewMode> {
        VIEW_MODES.iter().copied().find(|mode| mode.menu_id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::ExtraLargeIcons => "Extra Large Icons",
            ViewMode::LargeIcons => "Large Icons",
            ViewMode::Icons => "Medium Icons",
            ViewMode::SmallIcons => "Small Icons",
            ViewMode::List => "List",
            ViewMode::Details => "Details",
            ViewMode::Thumbnails => "Thumbnails",
            ViewMode::Tiles => "Tiles",
        }
    }
}
