//! Clipboard access through OLE and the Win32 clipboard
//!
//! Requires OleInitialize on the UI thread.

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::path::{Path, PathBuf};

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HANDLE, HWND, POINTL};
use windows::Win32::System::Com::{IDataObject, DVASPECT_CONTENT, FORMATETC, TYMED_HGLOBAL};
use windows::Win32::System::DataExchange::{
    CloseClipboard, EmptyClipboard, OpenClipboard, SetClipboardData,
};
use windows::Win32::System::Memory::{GlobalAlloc, GlobalFree, GlobalLock, GlobalUnlock, GMEM_MOVEABLE};
use windows::Win32::System::Ole::{
    OleGetClipboard, ReleaseStgMedium, DROPEFFECT, DROPEFFECT_COPY, DROPEFFECT_LINK,
    DROPEFFECT_MOVE,
};
use windows::Win32::System::SystemServices::MODIFIERKEYS_FLAGS;
use windows::Win32::UI::Shell::{DragQueryFileW, SHFileOperationW, HDROP, SHFILEOPSTRUCTW};

use super::shell::directory_drop_target;
use crate::application::ports::{ClipboardError, ClipboardPort, PasteMode};

const CF_UNICODETEXT: u32 = 13;
const CF_HDROP: u16 = 15;

const FO_COPY: u32 = 0x0002;
const FOF_ALLOWUNDO: u16 = 0x0040;

fn hdrop_format() -> FORMATETC {
    FORMATETC {
        cfFormat: CF_HDROP,
        ptd: std::ptr::null_mut(),
        dwAspect: DVASPECT_CONTENT.0 as u32,
        lindex: -1,
        tymed: TYMED_HGLOBAL.0 as u32,
    }
}

/// Drop effects a paste in `mode` needs the target to accept
fn wanted_effect(mode: PasteMode) -> DROPEFFECT {
    match mode {
        PasteMode::Normal => DROPEFFECT(DROPEFFECT_COPY.0 | DROPEFFECT_MOVE.0),
        PasteMode::Shortcut => DROPEFFECT_LINK,
    }
}

/// Double-null terminated path list for SHFileOperationW
fn path_list(paths: &[PathBuf]) -> Vec<u16> {
    let mut list: Vec<u16> = Vec::new();
    for path in paths {
        list.extend(path.as_os_str().to_string_lossy().encode_utf16());
        list.push(0);
    }
    list.push(0);
    list
}

/// `ClipboardPort` for the system clipboard
pub struct Win32Clipboard {
    owner: HWND,
}

impl Win32Clipboard {
    pub fn new(owner: HWND) -> Self {
        Self { owner }
    }

    fn data_object(&self) -> Option<IDataObject> {
        unsafe { OleGetClipboard().ok() }
    }

    /// Paths of the files on the clipboard
    fn files(&self) -> Result<Vec<PathBuf>, ClipboardError> {
        let data = self
            .data_object()
            .ok_or_else(|| ClipboardError::Unavailable("OleGetClipboard failed".to_string()))?;

        let mut medium = unsafe { data.GetData(&hdrop_format()) }.map_err(|_| ClipboardError::NoFileData)?;

        let mut paths = Vec::new();
        unsafe {
            let hdrop = HDROP(medium.u.hGlobal.0);
            let count = DragQueryFileW(hdrop, u32::MAX, None);
            for index in 0..count {
                let len = DragQueryFileW(hdrop, index, None) as usize;
                let mut buffer = vec![0u16; len + 1];
                let copied = DragQueryFileW(hdrop, index, Some(&mut buffer)) as usize;
                paths.push(PathBuf::from(OsString::from_wide(&buffer[..copied])));
            }
            ReleaseStgMedium(&mut medium);
        }

        if paths.is_empty() {
            return Err(ClipboardError::NoFileData);
        }
        Ok(paths)
    }
}

impl ClipboardPort for Win32Clipboard {
    fn has_data(&self) -> bool {
        self.data_object().is_some()
    }

    /// Offers the clipboard object to the directory's drop target and checks
    /// the effect it would accept.
    fn can_paste(&self, directory: &Path, mode: PasteMode) -> bool {
        let wanted = wanted_effect(mode);

        let Some(data) = self.data_object() else {
            return false;
        };
        let target = match directory_drop_target(self.owner, directory) {
            Ok(target) => target,
            Err(e) => {
                log!("No drop target for {:?}: {}", directory, e);
                return false;
            }
        };

        let mut effect = wanted;
        unsafe {
            let entered = target
                .DragEnter(&data, MODIFIERKEYS_FLAGS(0), &POINTL::default(), &mut effect)
                .is_ok();
            let _ = target.DragLeave();
            entered && effect.0 & wanted.0 != 0
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();

        unsafe {
            OpenClipboard(self.owner).map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

            let result = (|| -> windows::core::Result<()> {
                EmptyClipboard()?;
                let memory = GlobalAlloc(GMEM_MOVEABLE, wide.len() * std::mem::size_of::<u16>())?;
                let target = GlobalLock(memory) as *mut u16;
                if target.is_null() {
                    let _ = GlobalFree(memory);
                    return Err(windows::core::Error::from_win32());
                }
                std::ptr::copy_nonoverlapping(wide.as_ptr(), target, wide.len());
                let _ = GlobalUnlock(memory);

                // The clipboard owns the memory on success
                if let Err(e) = SetClipboardData(CF_UNICODETEXT, HANDLE(memory.0)) {
                    let _ = GlobalFree(memory);
                    return Err(e);
                }
                Ok(())
            })();

            let _ = CloseClipboard();
            result.map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        }
    }

    fn copy_files_into(&mut self, destination: &Path) -> Result<(), ClipboardError> {
        let sources = self.files()?;
        let from = path_list(&sources);
        let to = path_list(&[destination.to_path_buf()]);

        let mut operation = SHFILEOPSTRUCTW {
            hwnd: self.owner,
            wFunc: FO_COPY,
            pFrom: PCWSTR(from.as_ptr()),
            pTo: PCWSTR(to.as_ptr()),
            fFlags: FOF_ALLOWUNDO,
            ..Default::default()
        };

        let status = unsafe { SHFileOperationW(&mut operation) };
        if status != 0 {
            return Err(ClipboardError::WriteFailed(format!(
                "SHFileOperationW returned {:#x}",
                status
            )));
        }
        log!("Copied {} clipboard item(s) into {:?}", sources.len(), destination);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_paste_asks_for_link_only() {
        let normal = wanted_effect(PasteMode::Normal);
        let shortcut = wanted_effect(PasteMode::Shortcut);

        assert_eq!(normal.0 & DROPEFFECT_LINK.0, 0);
        assert_ne!(normal.0 & DROPEFFECT_COPY.0, 0);
        assert_ne!(normal.0 & DROPEFFECT_MOVE.0, 0);
        assert_eq!(shortcut, DROPEFFECT_LINK);
    }

    #[test]
    fn test_path_list_is_double_null_terminated() {
        let list = path_list(&[PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(list, vec![b'a' as u16, 0, b'b' as u16, 0, 0]);
    }
}
