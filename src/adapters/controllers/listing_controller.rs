//! ListingController - Translates listing events to command handler calls
//!
//! The platform layer decodes subclass messages and parent notifications
//! into `ListingEvent`s; the controller decides what they mean and what the
//! window procedure should return.

use tracing::{debug, warn};

use crate::application::ports::{ClipboardPort, HostPort, ListingPort, MenuPort, ShellPort};
use crate::application::services::{ListingCommand, ListingCommandHandler};
use crate::application::use_cases::MenuAnchor;
use crate::domain::value_objects::{CommandId, KeyState};

/// Keys the listing reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingKey {
    Enter,
    Insert,
    V,
    Other(u16),
}

impl ListingKey {
    pub fn from_virtual_key(vk: u16) -> Self {
        match vk {
            0x0D => ListingKey::Enter,
            0x2D => ListingKey::Insert,
            0x56 => ListingKey::V,
            other => ListingKey::Other(other),
        }
    }
}

/// Event types (platform-independent)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingEvent {
    /// A header drag is starting
    HeaderBeginDrag,
    /// A header drag ended; positions count visible columns
    HeaderEndDrag { source: usize, target: usize },
    /// Context menu requested on a listing
    ContextMenu {
        from_active_listing: bool,
        anchor: MenuAnchor,
        keys: KeyState,
    },
    /// Key pressed in the listing
    KeyDown { key: ListingKey, keys: KeyState },
    /// Item double-clicked; `None` when no item was hit
    ItemActivated { index: Option<usize>, keys: KeyState },
    /// The listing received keyboard focus
    FocusGained,
    /// A menu item was highlighted
    MenuSelect { item: u32, flags: u32 },
}

/// What the window procedure should do after an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// Return this value without default processing
    Handled(isize),
    /// Pass the message on to the default procedure
    Default,
}

/// Controller for one listing
pub struct ListingController<L, C, S, M, H>
where
    L: ListingPort,
    C: ClipboardPort,
    S: ShellPort,
    M: MenuPort,
    H: HostPort,
{
    handler: ListingCommandHandler<L, C, S, M, H>,
}

impl<L, C, S, M, H> ListingController<L, C, S, M, H>
where
    L: ListingPort,
    C: ClipboardPort,
    S: ShellPort,
    M: MenuPort,
    H: HostPort,
{
    pub fn new(handler: ListingCommandHandler<L, C, S, M, H>) -> Self {
        Self { handler }
    }

    /// Handle an event
    pub fn handle(&mut self, event: ListingEvent) -> EventResult {
        match event {
            // Let the header start dragging
            ListingEvent::HeaderBeginDrag => EventResult::Handled(0),
            ListingEvent::HeaderEndDrag { source, target } => {
                self.run(ListingCommand::ReorderColumns { source, target });
                // The listing was rebuilt; stop the header from moving its own item
                EventResult::Handled(1)
            }
            ListingEvent::ContextMenu {
                from_active_listing,
                anchor,
                keys,
            } => {
                if !from_active_listing {
                    return EventResult::Default;
                }
                self.run(ListingCommand::ShowContextMenu { anchor, keys });
                EventResult::Handled(0)
            }
            ListingEvent::KeyDown { key, keys } => match Self::key_command(key, keys) {
                Some(command) => {
                    self.run(command);
                    EventResult::Handled(0)
                }
                None => EventResult::Default,
            },
            ListingEvent::ItemActivated { index, keys } => {
                let Some(index) = index else {
                    return EventResult::Default;
                };
                let command = if keys.alt {
                    ListingCommand::ShowItemProperties(index)
                } else {
                    ListingCommand::OpenItem { index, keys }
                };
                self.run(command);
                EventResult::Handled(0)
            }
            ListingEvent::FocusGained => {
                self.handler.host_mut().focus_changed();
                EventResult::Default
            }
            ListingEvent::MenuSelect { item, flags } => {
                self.handler.host_mut().menu_select(item, flags);
                EventResult::Default
            }
        }
    }

    /// Map a key press to a command
    fn key_command(key: ListingKey, keys: KeyState) -> Option<ListingCommand> {
        match key {
            ListingKey::Enter if keys.alt => Some(ListingCommand::ShowSelectionProperties),
            ListingKey::Enter => Some(ListingCommand::OpenSelected {
                keys: KeyState {
                    middle_button: false,
                    ..keys
                },
            }),
            ListingKey::V if keys.ctrl && !keys.shift && !keys.alt => Some(ListingCommand::Paste),
            ListingKey::Insert if keys.shift && !keys.ctrl && !keys.alt => {
                Some(ListingCommand::Paste)
            }
            _ => None,
        }
    }

    fn run(&mut self, command: ListingCommand) {
        let label = format!("{:?}", command);
        if let Err(e) = self.handler.handle(command) {
            warn!(command = %label, "listing command failed: {}", e);
        } else {
            debug!(command = %label, "listing command done");
        }
    }

    /// Forward a main-menu command that acts on the listing.
    /// Returns false when the command is not a listing command.
    pub fn on_menu_command(&mut self, id: CommandId) -> bool {
        match ListingCommand::from_menu_command(id) {
            Some(command) => {
                self.run(command);
                true
            }
            None => false,
        }
    }

    pub fn handler(&self) -> &ListingCommandHandler<L, C, S, M, H> {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut ListingCommandHandler<L, C, S, M, H> {
        &mut self.handler
    }
}
