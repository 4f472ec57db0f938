//! ContextMenuUseCase - Show and dispatch the listing context menu
//!
//! One invocation runs to completion:
//! 1. Classify the target: background with no selection, items otherwise.
//! 2. Shift at entry hands over to the native shell menu.
//! 3. Otherwise build the standard menu, enable commands, attach icons.
//! 4. Track the popup and dispatch the chosen command.
//!
//! Commands that act on the listing itself (paste, copy paths, properties,
//! refresh) are handed back to the caller instead of the main dispatcher.

use tracing::{debug, warn};

use crate::application::ports::{
    ClipboardPort, DpiContext, HostPort, ListingPort, MenuPort, PasteMode, ShellMenuFlags,
    ShellMenuRequest, ShellMenuTarget, ShellPort,
};
use crate::application::services::{menu_builder, ListingCommand};
use crate::application::use_cases::OpenItemsUseCase;
use crate::domain::entities::{MenuModel, Selection};
use crate::domain::value_objects::{CommandId, DispositionTable, KeyState, Point};

/// Where a context menu request came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAnchor {
    /// Mouse click at a screen point
    Cursor(Point),
    /// Menu key or Shift+F10; the position is derived from the listing
    Keyboard,
}

impl MenuAnchor {
    /// Keyboard invocations report the screen point (-1, -1)
    pub fn from_screen_point(point: Point) -> Self {
        if point == Point::new(-1, -1) {
            MenuAnchor::Keyboard
        } else {
            MenuAnchor::Cursor(point)
        }
    }
}

/// Result of one context menu invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextMenuOutcome {
    /// The native shell menu was shown instead
    ShellMenu,
    /// The menu was closed without a choice
    Dismissed,
    /// The selection was opened; holds the number of items opened
    Opened(usize),
    /// Selected folders were opened in new tabs
    OpenedInNewTab(usize),
    /// The command went to the main dispatcher
    Dispatched(CommandId),
    /// The command acts on the listing; run it once the menu has closed
    Listing(ListingCommand),
}

/// Use case for the listing context menu
pub struct ContextMenuUseCase<'a, L, C, S, M, H>
where
    L: ListingPort + ?Sized,
    C: ClipboardPort + ?Sized,
    S: ShellPort + ?Sized,
    M: MenuPort + ?Sized,
    H: HostPort + ?Sized,
{
    pub listing: &'a L,
    pub clipboard: &'a C,
    pub shell: &'a mut S,
    pub menus: &'a mut M,
    pub host: &'a mut H,
    pub dpi: &'a dyn DpiContext,
    pub dispositions: &'a DispositionTable,
}

impl<'a, L, C, S, M, H> ContextMenuUseCase<'a, L, C, S, M, H>
where
    L: ListingPort + ?Sized,
    C: ClipboardPort + ?Sized,
    S: ShellPort + ?Sized,
    M: MenuPort + ?Sized,
    H: HostPort + ?Sized,
{
    pub fn execute(&mut self, anchor: MenuAnchor, keys: KeyState) -> ContextMenuOutcome {
        let selection = self.listing.selection();
        if selection.is_empty() {
            self.show_background_menu(anchor, keys)
        } else {
            self.show_item_menu(selection, anchor, keys)
        }
    }

    fn show_background_menu(&mut self, anchor: MenuAnchor, keys: KeyState) -> ContextMenuOutcome {
        let at = match anchor {
            MenuAnchor::Cursor(point) => point,
            MenuAnchor::Keyboard => self.listing.client_to_screen(Point::origin()),
        };

        if keys.shift {
            return self.show_shell_menu(
                ShellMenuTarget::Background,
                at,
                ShellMenuFlags::STANDARD | ShellMenuFlags::EXTENDED_VERBS,
            );
        }

        let mut menu = menu_builder::background_menu(self.listing.view_mode());
        self.enable_paste(&mut menu);
        menu_builder::attach_icons(&mut menu, self.dpi);

        match self.menus.track_popup(&menu, at) {
            Some(command) => self.dispatch(command),
            None => ContextMenuOutcome::Dismissed,
        }
    }

    fn show_item_menu(
        &mut self,
        selection: Selection,
        anchor: MenuAnchor,
        keys: KeyState,
    ) -> ContextMenuOutcome {
        let at = match anchor {
            MenuAnchor::Cursor(point) => point,
            MenuAnchor::Keyboard => self.keyboard_item_point(&selection),
        };

        if keys.shift {
            return self.show_shell_menu(
                ShellMenuTarget::Items(selection.paths()),
                at,
                ShellMenuFlags::RENAME | ShellMenuFlags::EXTENDED_VERBS,
            );
        }

        let mut menu = menu_builder::item_menu();
        self.enable_paste(&mut menu);
        menu.enable(CommandId::COPY, self.listing.can_copy_selection());
        menu.enable(CommandId::CUT, self.listing.can_cut_selection());
        menu.enable(CommandId::OPEN_IN_NEW_TAB, selection.has_directory());
        menu_builder::attach_icons(&mut menu, self.dpi);

        let Some(command) = self.menus.track_popup(&menu, at) else {
            return ContextMenuOutcome::Dismissed;
        };

        match command {
            CommandId::OPEN => {
                let disposition = self.dispositions.resolve(keys);
                let opened = OpenItemsUseCase::new(self.listing, &mut *self.host)
                    .open_all_selected(disposition);
                ContextMenuOutcome::Opened(opened)
            }
            CommandId::OPEN_IN_NEW_TAB => {
                let disposition = self.dispositions.new_tab();
                let mut opened = 0;
                for folder in selection.directories() {
                    self.host.open_item(&folder.full_path, disposition);
                    opened += 1;
                }
                ContextMenuOutcome::OpenedInNewTab(opened)
            }
            other => self.dispatch(other),
        }
    }

    /// Centre of the focused item's icon, or of the last selected item's
    fn keyboard_item_point(&self, selection: &Selection) -> Point {
        let index = self
            .listing
            .focused_selected_index()
            .or_else(|| selection.last().map(|item| item.index));

        let client = match index {
            Some(index) => self.listing.item_icon_rect(index).center(),
            None => Point::origin(),
        };
        self.listing.client_to_screen(client)
    }

    fn enable_paste(&self, menu: &mut MenuModel) {
        let directory = self.listing.directory();
        menu.enable(
            CommandId::PASTE,
            self.clipboard.can_paste(&directory, PasteMode::Normal),
        );
        menu.enable(
            CommandId::PASTE_SHORTCUT,
            self.clipboard.can_paste(&directory, PasteMode::Shortcut),
        );
    }

    fn show_shell_menu(
        &mut self,
        target: ShellMenuTarget,
        at: Point,
        flags: ShellMenuFlags,
    ) -> ContextMenuOutcome {
        let request = ShellMenuRequest {
            directory: self.listing.directory(),
            target,
            at,
            flags,
        };
        if let Err(e) = self.shell.show_context_menu(&request) {
            warn!("shell context menu failed: {}", e);
        }
        ContextMenuOutcome::ShellMenu
    }

    fn dispatch(&mut self, command: CommandId) -> ContextMenuOutcome {
        debug!(command = command.raw(), "context menu command");
        if let Some(listing_command) = ListingCommand::from_menu_command(command) {
            return ContextMenuOutcome::Listing(listing_command);
        }
        self.host.dispatch_command(command);
        ContextMenuOutcome::Dispatched(command)
    }
}
