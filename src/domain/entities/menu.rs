//! Menu model - a platform-neutral popup menu description
//!
//! Menus are built and toggled here, then handed to a `MenuPort` which
//! turns them into native menus and blocks until a command is chosen.

use crate::domain::value_objects::{CommandId, MenuIcon};

/// A selectable menu command
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub id: CommandId,
    pub label: String,
    pub enabled: bool,
    /// Radio-style check mark
    pub checked: bool,
    pub icon: Option<MenuIcon>,
}

impl MenuItem {
    pub fn new(id: CommandId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            enabled: true,
            checked: false,
            icon: None,
        }
    }
}

/// Entry of a menu
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Command(MenuItem),
    Separator,
    Submenu { label: String, entries: Vec<MenuEntry> },
}

/// A complete popup menu
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuModel {
    pub entries: Vec<MenuEntry>,
    /// Edge length of command icons in physical pixels
    pub icon_size: u32,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn command(mut self, id: CommandId, label: impl Into<String>) -> Self {
        self.entries.push(MenuEntry::Command(MenuItem::new(id, label)));
        self
    }

    pub fn separator(mut self) -> Self {
        self.entries.push(MenuEntry::Separator);
        self
    }

    pub fn submenu(mut self, label: impl Into<String>, menu: MenuModel) -> Self {
        self.entries.push(MenuEntry::Submenu {
            label: label.into(),
            entries: menu.entries,
        });
        self
    }

    /// Every command, submenus included, depth first
    pub fn items(&self) -> Vec<&MenuItem> {
        fn walk<'a>(entries: &'a [MenuEntry], out: &mut Vec<&'a MenuItem>) {
            for entry in entries {
                match entry {
                    MenuEntry::Command(item) => out.push(item),
                    MenuEntry::Submenu { entries, .. } => walk(entries, out),
                    MenuEntry::Separator => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.entries, &mut out);
        out
    }

    pub fn find(&self, id: CommandId) -> Option<&MenuItem> {
        self.items().into_iter().find(|item| item.id == id)
    }

    /// Apply `f` to every command with the given id. Returns whether any matched.
    fn update(&mut self, id: CommandId, f: &mut dyn FnMut(&mut MenuItem)) -> bool {
        fn walk(entries: &mut [MenuEntry], id: CommandId, f: &mut dyn FnMut(&mut MenuItem)) -> bool {
            let mut found = false;
            for entry in entries {
                match entry {
                    MenuEntry::Command(item) if item.id == id => {
                        f(item);
                        found = true;
                    }
                    MenuEntry::Submenu { entries, .. } => found |= walk(entries, id, f),
                    _ => {}
                }
            }
            found
        }
        walk(&mut self.entries, id, f)
    }

    /// Enable or gray out a command
    pub fn enable(&mut self, id: CommandId, enabled: bool) -> bool {
        self.update(id, &mut |item| item.enabled = enabled)
    }

    pub fn check(&mut self, id: CommandId, checked: bool) -> bool {
        self.update(id, &mut |item| item.checked = checked)
    }

    pub fn set_icon(&mut self, id: CommandId, icon: MenuIcon) -> bool {
        self.update(id, &mut |item| item.icon = Some(icon))
    }

    pub fn is_enabled(&self, id: CommandId) -> bool {
        self.find(id).map(|item| item.enabled).unwrap_or(false)
    }
}
