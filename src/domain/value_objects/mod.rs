//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.
//! They are immutable and can be freely shared.

pub mod command_id;
pub mod disposition;
pub mod rect;
pub mod theme_mode;
pub mod view_mode;

pub use command_id::{CommandId, MenuIcon, CONTEXT_MENU_ICONS};
pub use disposition::{DispositionOverrides, DispositionTable, KeyState, OpenDisposition};
pub use rect::{Point, Rect};
pub use theme_mode::{Color, ThemeMode};
pub use view_mode::{ViewMode, VIEW_MODES};
