//! Ports - interfaces the application layer needs from the outside
//!
//! Implementations live in `platform::win32` (and in test fakes).

pub mod clipboard_port;
pub mod context_port;
pub mod host_port;
pub mod listing_port;
pub mod menu_port;
pub mod shell_port;

pub use clipboard_port::{ClipboardError, ClipboardPort, PasteMode};
pub use context_port::{scale_px, DpiContext, FixedDpi, ThemeContext, BASE_DPI};
pub use host_port::HostPort;
pub use listing_port::ListingPort;
pub use menu_port::MenuPort;
pub use shell_port::{ShellError, ShellMenuFlags, ShellMenuRequest, ShellMenuTarget, ShellPort};
