//! Application Services - Coordination services
//!
//! The command handler routes listing commands to use cases; the menu
//! builder and theme setup hold the fixed UI policy.

pub mod command_handler;
pub mod menu_builder;
pub mod theme_setup;

pub use command_handler::{ListingCommand, ListingCommandHandler};
pub use menu_builder::{attach_icons, background_menu, item_menu, views_menu, MENU_ICON_SIZE};
pub use theme_setup::{gripper_background, should_enable_dark_mode, ThemeSetup, DARK_BACKGROUND};
