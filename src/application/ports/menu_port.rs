//! MenuPort - modal popup menus

use crate::domain::entities::MenuModel;
use crate::domain::value_objects::{CommandId, Point};

/// Port interface for popup menus
pub trait MenuPort {
    /// Show `menu` at screen point `at` and block until the user picks a
    /// command (`Some`) or dismisses the menu (`None`).
    fn track_popup(&mut self, menu: &MenuModel, at: Point) -> Option<CommandId>;
}
