//! Win32 platform implementation of the listing ports

pub mod clipboard;
pub mod dpi;
pub mod keyboard;
pub mod list_view;
pub mod menu;
pub mod shell;
pub mod subclass;
pub mod theme;

pub use clipboard::Win32Clipboard;
pub use dpi::{enable_dpi_awareness, WindowDpi};
pub use keyboard::{current_key_state, key_state_from_lv_flags};
pub use list_view::{ListView, ShellBrowser, Win32Listing};
pub use menu::{MenuBitmaps, NoMenuBitmaps, Win32PopupMenu};
pub use shell::Win32Shell;
pub use subclass::{decode_listing_message, decode_parent_notify, handled_result, relay_to_host, ListingSubclass};
pub use theme::Win32Theme;
