//! MenuBuilder - Fixed context menu templates of the listing
//!
//! Templates only describe entries. Enabling, icons and the check mark on
//! the view submenu are applied per invocation by the context menu use case.

use crate::application::ports::DpiContext;
use crate::domain::entities::MenuModel;
use crate::domain::value_objects::{CommandId, ViewMode, CONTEXT_MENU_ICONS, VIEW_MODES};

/// Logical edge length of menu icons
pub const MENU_ICON_SIZE: u32 = 16;

/// Menu shown when one or more items are selected
pub fn item_menu() -> MenuModel {
    MenuModel::new()
        .command(CommandId::OPEN, "&Open")
        .command(CommandId::OPEN_IN_NEW_TAB, "Open in New &Tab")
        .separator()
        .command(CommandId::CUT, "Cu&t")
        .command(CommandId::COPY, "&Copy")
        .command(CommandId::PASTE, "&Paste")
        .command(CommandId::PASTE_SHORTCUT, "Paste &Shortcut")
        .separator()
        .command(CommandId::COPY_ITEM_PATH, "Copy &Item Path")
        .command(CommandId::COPY_UNIVERSAL_PATH, "Copy &Universal Path")
        .separator()
        .command(CommandId::DELETE, "&Delete")
        .command(CommandId::RENAME, "Rena&me")
        .separator()
        .command(CommandId::PROPERTIES, "P&roperties")
}

/// Menu shown on the empty area of the listing
pub fn background_menu(current: ViewMode) -> MenuModel {
    MenuModel::new()
        .submenu("&View", views_menu(current))
        .command(CommandId::REFRESH, "R&efresh")
        .separator()
        .command(CommandId::PASTE, "&Paste")
        .command(CommandId::PASTE_SHORTCUT, "Paste &Shortcut")
        .separator()
        .command(CommandId::NEW_FOLDER, "New &Folder")
        .command(CommandId::OPEN_COMMAND_PROMPT, "Open Command &Prompt Here")
        .separator()
        .command(CommandId::PROPERTIES, "P&roperties")
}

/// All view modes, with `current` radio-checked
pub fn views_menu(current: ViewMode) -> MenuModel {
    let mut menu = VIEW_MODES
        .iter()
        .fold(MenuModel::new(), |menu, mode| menu.command(mode.menu_id(), mode.label()));
    menu.check(current.menu_id(), true);
    menu
}

/// Attach the fixed icons, sized for the current DPI
pub fn attach_icons(menu: &mut MenuModel, dpi: &dyn DpiContext) {
    menu.icon_size = dpi.scale(MENU_ICON_SIZE);
    for (id, icon) in CONTEXT_MENU_ICONS {
        menu.set_icon(id, icon);
    }
}
