//! Shell context menus, verbs and property sheets
//!
//! All of it goes through IContextMenu on the shell folder that owns the
//! target items. The same folder also hands out drop targets for paste
//! checks. Requires COM on the UI thread.

use std::ffi::c_void;
use std::path::{Path, PathBuf};

use windows::core::{HSTRING, PCSTR, PWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::NetworkManagement::WNet::{
    WNetGetUniversalNameW, UNIVERSAL_NAME_INFOW, UNIVERSAL_NAME_INFO_LEVEL,
};
use windows::Win32::System::Ole::IDropTarget;
use windows::Win32::UI::Shell::Common::ITEMIDLIST;
use windows::Win32::UI::Shell::{
    ILFindLastID, ILFree, IContextMenu, IShellFolder, SHBindToParent, SHParseDisplayName,
    CMINVOKECOMMANDINFO,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreatePopupMenu, DestroyMenu, TrackPopupMenu, HMENU, SW_SHOWNORMAL, TPM_LEFTALIGN,
    TPM_RETURNCMD, TPM_RIGHTBUTTON,
};

use crate::application::ports::{
    ShellError, ShellMenuFlags, ShellMenuRequest, ShellMenuTarget, ShellPort,
};

const CMF_NORMAL: u32 = 0x0000;
const CMF_CANRENAME: u32 = 0x0010;
const CMF_EXTENDEDVERBS: u32 = 0x0100;

const FIRST_COMMAND: u32 = 1;
const LAST_COMMAND: u32 = 0x7FFF;

/// Absolute item id list, freed on drop
struct Pidl(*mut ITEMIDLIST);

impl Pidl {
    fn parse(path: &Path) -> Result<Self, ShellError> {
        let name = HSTRING::from(path.as_os_str());
        let mut pidl: *mut ITEMIDLIST = std::ptr::null_mut();
        unsafe { SHParseDisplayName(&name, None, &mut pidl, 0, None) }
            .map_err(|e| ShellError::Resolve(format!("{}: {}", path.display(), e)))?;
        Ok(Self(pidl))
    }

    /// Shell folder containing this item
    fn parent(&self) -> Result<IShellFolder, ShellError> {
        unsafe { SHBindToParent::<IShellFolder>(self.0, None) }
            .map_err(|e| ShellError::Resolve(e.to_string()))
    }

    /// Last id of the list, relative to the parent folder
    fn child(&self) -> *const ITEMIDLIST {
        unsafe { ILFindLastID(self.0) as *const ITEMIDLIST }
    }
}

impl Drop for Pidl {
    fn drop(&mut self) {
        unsafe { ILFree(Some(self.0 as *const ITEMIDLIST)) };
    }
}

/// Drop target of a directory
pub(super) fn directory_drop_target(owner: HWND, directory: &Path) -> Result<IDropTarget, ShellError> {
    let pidl = Pidl::parse(directory)?;
    let parent = pidl.parent()?;
    let target: IDropTarget = unsafe { parent.GetUIObjectOf(owner, &[pidl.child()], None) }
        .map_err(|e| ShellError::Failed(e.to_string()))?;
    Ok(target)
}

/// Popup menu handle, destroyed on drop
struct PopupMenu(HMENU);

impl Drop for PopupMenu {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyMenu(self.0);
        }
    }
}

/// `ShellPort` backed by IContextMenu
pub struct Win32Shell {
    owner: HWND,
}

impl Win32Shell {
    pub fn new(owner: HWND) -> Self {
        Self { owner }
    }

    /// Context menu handler for the directory background
    fn background_menu(&self, directory: &Path) -> Result<IContextMenu, ShellError> {
        let pidl = Pidl::parse(directory)?;
        let parent = pidl.parent()?;
        unsafe {
            let folder: IShellFolder = parent
                .BindToObject(pidl.child(), None)
                .map_err(|e| ShellError::Resolve(e.to_string()))?;
            folder
                .CreateViewObject(self.owner)
                .map_err(|e| ShellError::Failed(e.to_string()))
        }
    }

    /// Context menu handler for items sharing one parent folder
    fn item_menu(&self, items: &[PathBuf]) -> Result<IContextMenu, ShellError> {
        let pidls = items
            .iter()
            .map(|item| Pidl::parse(item))
            .collect::<Result<Vec<_>, _>>()?;
        let first = pidls
            .first()
            .ok_or_else(|| ShellError::Resolve("no items".to_string()))?;
        let parent = first.parent()?;
        let children: Vec<*const ITEMIDLIST> = pidls.iter().map(Pidl::child).collect();
        unsafe { parent.GetUIObjectOf(self.owner, &children, None) }
            .map_err(|e| ShellError::Failed(e.to_string()))
    }

    fn menu_for(&self, directory: &Path, items: &[PathBuf]) -> Result<IContextMenu, ShellError> {
        if items.is_empty() {
            self.background_menu(directory)
        } else {
            self.item_menu(items)
        }
    }

    fn populate(&self, menu: &IContextMenu, flags: u32) -> Result<PopupMenu, ShellError> {
        let popup = PopupMenu(unsafe { CreatePopupMenu() }.map_err(|e| ShellError::Failed(e.to_string()))?);
        unsafe { menu.QueryContextMenu(popup.0, 0, FIRST_COMMAND, LAST_COMMAND, flags) }
            .map_err(|e| ShellError::Failed(e.to_string()))?;
        Ok(popup)
    }

    fn invoke(&self, menu: &IContextMenu, verb: PCSTR) -> Result<(), ShellError> {
        let info = CMINVOKECOMMANDINFO {
            cbSize: std::mem::size_of::<CMINVOKECOMMANDINFO>() as u32,
            hwnd: self.owner,
            lpVerb: verb,
            nShow: SW_SHOWNORMAL.0,
            ..Default::default()
        };
        unsafe { menu.InvokeCommand(&info) }.map_err(|e| ShellError::Failed(e.to_string()))
    }

    fn invoke_named(&self, directory: &Path, items: &[PathBuf], verb: &str) -> Result<(), ShellError> {
        let menu = self.menu_for(directory, items)?;
        // Some handlers only resolve verbs after QueryContextMenu
        let _popup = self.populate(&menu, CMF_NORMAL)?;
        let verb: Vec<u8> = verb.bytes().chain(std::iter::once(0)).collect();
        self.invoke(&menu, PCSTR(verb.as_ptr()))
    }
}

impl ShellPort for Win32Shell {
    fn show_context_menu(&mut self, request: &ShellMenuRequest) -> Result<(), ShellError> {
        let items: &[PathBuf] = match &request.target {
            ShellMenuTarget::Background => &[],
            ShellMenuTarget::Items(items) => items,
        };
        let menu = self.menu_for(&request.directory, items)?;

        let mut flags = CMF_NORMAL;
        if request.flags.contains(ShellMenuFlags::RENAME) {
            flags |= CMF_CANRENAME;
        }
        if request.flags.contains(ShellMenuFlags::EXTENDED_VERBS) {
            flags |= CMF_EXTENDEDVERBS;
        }
        let popup = self.populate(&menu, flags)?;

        let chosen = unsafe {
            TrackPopupMenu(
                popup.0,
                TPM_LEFTALIGN | TPM_RIGHTBUTTON | TPM_RETURNCMD,
                request.at.x,
                request.at.y,
                0,
                self.owner,
                None,
            )
        };
        if chosen.0 <= 0 {
            return Ok(());
        }

        // Offset from FIRST_COMMAND, passed as MAKEINTRESOURCE
        let offset = chosen.0 as u32 - FIRST_COMMAND;
        log!("Shell menu command offset {}", offset);
        self.invoke(&menu, PCSTR(offset as usize as *const u8))
    }

    fn execute_verb(
        &mut self,
        directory: &Path,
        items: &[PathBuf],
        verb: &str,
    ) -> Result<(), ShellError> {
        self.invoke_named(directory, items, verb)
    }

    fn show_properties(&mut self, directory: &Path, items: &[PathBuf]) -> Result<(), ShellError> {
        if items.is_empty() {
            // Properties of the directory itself
            return self.invoke_named(directory, &[directory.to_path_buf()], "properties");
        }
        self.invoke_named(directory, items, "properties")
    }

    fn universal_name(&self, path: &Path) -> Option<String> {
        let local = HSTRING::from(path.as_os_str());
        // UNIVERSAL_NAME_INFOW followed by its string data
        let mut buffer = vec![0u8; 1024];
        let mut size = buffer.len() as u32;
        let status = unsafe {
            WNetGetUniversalNameW(
                &local,
                UNIVERSAL_NAME_INFO_LEVEL,
                buffer.as_mut_ptr() as *mut c_void,
                &mut size,
            )
        };
        if status.0 != 0 {
            return None;
        }

        let info = unsafe { &*(buffer.as_ptr() as *const UNIVERSAL_NAME_INFOW) };
        let name: PWSTR = info.lpUniversalName;
        if name.is_null() {
            return None;
        }
        unsafe { name.to_string() }.ok()
    }
}
