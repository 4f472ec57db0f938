//! Command identifiers and the menu icon mapping
//!
//! Command ids are the integers handed to the main command dispatcher. They
//! live in the 40000 range like menu resource ids.

/// Integer identifier of a menu command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(pub u32);

impl CommandId {
    pub const OPEN: CommandId = CommandId(40001);
    pub const OPEN_IN_NEW_TAB: CommandId = CommandId(40002);
    pub const CUT: CommandId = CommandId(40010);
    pub const COPY: CommandId = CommandId(40011);
    pub const PASTE: CommandId = CommandId(40012);
    pub const PASTE_SHORTCUT: CommandId = CommandId(40013);
    pub const COPY_ITEM_PATH: CommandId = CommandId(40014);
    pub const COPY_UNIVERSAL_PATH: CommandId = CommandId(40015);
    pub const SELECT_SIMILAR: CommandId = CommandId(40016);
    pub const DELETE: CommandId = CommandId(40020);
    pub const RENAME: CommandId = CommandId(40021);
    pub const PROPERTIES: CommandId = CommandId(40022);
    pub const NEW_FOLDER: CommandId = CommandId(40030);
    pub const OPEN_COMMAND_PROMPT: CommandId = CommandId(40031);
    pub const REFRESH: CommandId = CommandId(40040);

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CommandId {
    fn from(value: u32) -> Self {
        CommandId(value)
    }
}

/// Small bitmap shown next to a context menu command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuIcon {
    Cut,
    Copy,
    Paste,
    PasteShortcut,
    Delete,
    Rename,
    Properties,
    Refresh,
    CommandLine,
    NewFolder,
}

/// Fixed command -> icon mapping for listing context menus
pub const CONTEXT_MENU_ICONS: [(CommandId, MenuIcon); 10] = [
    (CommandId::CUT, MenuIcon::Cut),
    (CommandId::COPY, MenuIcon::Copy),
    (CommandId::PASTE, MenuIcon::Paste),
    (CommandId::PASTE_SHORTCUT, MenuIcon::PasteShortcut),
    (CommandId::DELETE, MenuIcon::Delete),
    (CommandId::RENAME, MenuIcon::Rename),
    (CommandId::PROPERTIES, MenuIcon::Properties),
    (CommandId::REFRESH, MenuIcon::Refresh),
    (CommandId::OPEN_COMMAND_PROMPT, MenuIcon::CommandLine),
    (CommandId::NEW_FOLDER, MenuIcon::NewFolder),
];
