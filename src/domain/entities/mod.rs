//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.
//! They represent the core business concepts of the listing surface.

pub mod column;
pub mod menu;
pub mod selection;

pub use column::{Column, ColumnId, ColumnSet};
pub use menu::{MenuEntry, MenuItem, MenuModel};
pub use selection::{ListItem, Selection};
