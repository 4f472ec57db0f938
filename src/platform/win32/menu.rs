//! Native popup menus built from a `MenuModel`

use windows::core::{HSTRING, PCWSTR};
use windows::Win32::Foundation::{BOOL, HWND};
use windows::Win32::Graphics::Gdi::HBITMAP;
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, SetMenuItemInfoW, TrackPopupMenu, HMENU,
    MENUITEMINFOW, MENU_ITEM_FLAGS, MF_CHECKED, MF_GRAYED, MF_POPUP, MF_SEPARATOR, MF_STRING,
    MIIM_BITMAP, TPM_LEFTALIGN, TPM_RETURNCMD, TPM_RIGHTBUTTON,
};

use crate::application::ports::MenuPort;
use crate::domain::entities::{MenuEntry, MenuModel};
use crate::domain::value_objects::{CommandId, MenuIcon, Point};

/// Source of menu icon bitmaps
pub trait MenuBitmaps {
    /// Bitmap for `icon` at `size` pixels. The menu does not take ownership.
    fn bitmap(&mut self, icon: MenuIcon, size: u32) -> Option<HBITMAP>;
}

/// No icons
pub struct NoMenuBitmaps;

impl MenuBitmaps for NoMenuBitmaps {
    fn bitmap(&mut self, _icon: MenuIcon, _size: u32) -> Option<HBITMAP> {
        None
    }
}

/// `MenuPort` backed by TrackPopupMenu
pub struct Win32PopupMenu {
    owner: HWND,
    bitmaps: Box<dyn MenuBitmaps>,
}

impl Win32PopupMenu {
    pub fn new(owner: HWND) -> Self {
        Self {
            owner,
            bitmaps: Box::new(NoMenuBitmaps),
        }
    }

    pub fn with_bitmaps(mut self, bitmaps: Box<dyn MenuBitmaps>) -> Self {
        self.bitmaps = bitmaps;
        self
    }

    fn build(&mut self, model: &MenuModel) -> windows::core::Result<HMENU> {
        let menu = unsafe { CreatePopupMenu()? };
        if let Err(e) = self.append_entries(menu, &model.entries, model.icon_size) {
            // Destroys attached submenus as well
            unsafe {
                let _ = DestroyMenu(menu);
            }
            return Err(e);
        }
        Ok(menu)
    }

    fn append_entries(
        &mut self,
        menu: HMENU,
        entries: &[MenuEntry],
        icon_size: u32,
    ) -> windows::core::Result<()> {
        for entry in entries {
            match entry {
                MenuEntry::Command(item) => {
                    let mut flags: MENU_ITEM_FLAGS = MF_STRING;
                    if !item.enabled {
                        flags |= MF_GRAYED;
                    }
                    if item.checked {
                        flags |= MF_CHECKED;
                    }
                    let label = HSTRING::from(item.label.as_str());
                    unsafe { AppendMenuW(menu, flags, item.id.raw() as usize, &label)? };

                    if let Some(bitmap) = item.icon.and_then(|icon| self.bitmaps.bitmap(icon, icon_size)) {
                        let info = MENUITEMINFOW {
                            cbSize: std::mem::size_of::<MENUITEMINFOW>() as u32,
                            fMask: MIIM_BITMAP,
                            hbmpItem: bitmap,
                            ..Default::default()
                        };
                        unsafe {
                            let _ = SetMenuItemInfoW(menu, item.id.raw(), BOOL::from(false), &info);
                        }
                    }
                }
                MenuEntry::Separator => unsafe {
                    AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null())?;
                },
                MenuEntry::Submenu { label, entries } => {
                    let submenu = unsafe { CreatePopupMenu()? };
                    if let Err(e) = self.append_entries(submenu, entries, icon_size) {
                        unsafe {
                            let _ = DestroyMenu(submenu);
                        }
                        return Err(e);
                    }
                    let label = HSTRING::from(label.as_str());
                    unsafe {
                        AppendMenuW(menu, MF_POPUP | MF_STRING, submenu.0 as usize, &label)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl MenuPort for Win32PopupMenu {
    fn track_popup(&mut self, model: &MenuModel, at: Point) -> Option<CommandId> {
        let menu = match self.build(model) {
            Ok(menu) => menu,
            Err(e) => {
                log!("Failed to build popup menu: {:?}", e);
                return None;
            }
        };

        let chosen = unsafe {
            TrackPopupMenu(
                menu,
                TPM_LEFTALIGN | TPM_RIGHTBUTTON | TPM_RETURNCMD,
                at.x,
                at.y,
                0,
                self.owner,
                None,
            )
        };

        unsafe {
            let _ = DestroyMenu(menu);
        }

        // TPM_RETURNCMD: zero means dismissed
        if chosen.0 > 0 {
            Some(CommandId(chosen.0 as u32))
        } else {
            None
        }
    }
}
