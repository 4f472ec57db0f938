//! HostPort - the main window that owns the listing
//!
//! Opening items (which may create tabs or windows) and the main command
//! dispatcher both live in the host.

use std::path::Path;

use crate::domain::value_objects::{CommandId, OpenDisposition};

/// Port interface for the hosting main window
pub trait HostPort {
    /// Open a file or folder. Files ignore the disposition.
    fn open_item(&mut self, path: &Path, disposition: OpenDisposition);

    /// Forward a command to the main command dispatcher
    fn dispatch_command(&mut self, command: CommandId);

    /// The listing received keyboard focus
    fn focus_changed(&mut self) {}

    /// A menu item was highlighted (status bar help text)
    fn menu_select(&mut self, _item: u32, _flags: u32) {}
}
