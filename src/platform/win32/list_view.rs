//! List-view control queries and the Win32 `ListingPort`
//!
//! The list view knows selection, focus and geometry. Everything about the
//! items themselves comes from the shell browser that fills it.

use std::path::PathBuf;

use windows::Win32::Foundation::{HWND, LPARAM, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::ClientToScreen;
use windows::Win32::UI::Controls::{LVIS_SELECTED, LVITEMW};
use windows::Win32::UI::WindowsAndMessaging::SendMessageW;

use crate::application::ports::ListingPort;
use crate::domain::entities::{ColumnSet, ListItem};
use crate::domain::value_objects::{Point, Rect, ViewMode};

const LVM_FIRST: u32 = 0x1000;
const LVM_GETITEMCOUNT: u32 = LVM_FIRST + 4;
const LVM_GETNEXTITEM: u32 = LVM_FIRST + 12;
const LVM_GETITEMRECT: u32 = LVM_FIRST + 14;
const LVM_SETITEMSTATE: u32 = LVM_FIRST + 43;

const LVNI_FOCUSED: u32 = 0x0001;
const LVNI_SELECTED: u32 = 0x0002;
const LVIR_ICON: i32 = 1;

/// The shell browser behind one list view
pub trait ShellBrowser {
    fn directory(&self) -> PathBuf;
    fn item(&self, index: usize) -> Option<ListItem>;
    fn columns(&self) -> ColumnSet;
    fn set_columns(&mut self, columns: ColumnSet);
    /// Re-navigate to the current directory
    fn refresh(&mut self);
    fn view_mode(&self) -> ViewMode;
    fn can_copy_selection(&self) -> bool;
    fn can_cut_selection(&self) -> bool;
}

/// Thin wrapper over list-view messages
#[derive(Clone, Copy)]
pub struct ListView {
    hwnd: HWND,
}

impl ListView {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    fn send(&self, msg: u32, wparam: usize, lparam: isize) -> isize {
        unsafe { SendMessageW(self.hwnd, msg, WPARAM(wparam), LPARAM(lparam)).0 }
    }

    pub fn item_count(&self) -> usize {
        self.send(LVM_GETITEMCOUNT, 0, 0).max(0) as usize
    }

    /// Next item after `start` (or from the top) matching `flags`
    fn next_item(&self, start: Option<usize>, flags: u32) -> Option<usize> {
        let start = start.map_or(-1isize, |index| index as isize);
        let found = self.send(LVM_GETNEXTITEM, start as usize, flags as isize);
        usize::try_from(found).ok()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        let mut indices = Vec::new();
        let mut current = None;
        while let Some(index) = self.next_item(current, LVNI_SELECTED) {
            indices.push(index);
            current = Some(index);
        }
        indices
    }

    pub fn focused_selected_index(&self) -> Option<usize> {
        self.next_item(None, LVNI_FOCUSED | LVNI_SELECTED)
    }

    pub fn set_selected(&self, index: usize, selected: bool) {
        let item = LVITEMW {
            state: if selected { LVIS_SELECTED } else { Default::default() },
            stateMask: LVIS_SELECTED,
            ..Default::default()
        };
        self.send(LVM_SETITEMSTATE, index, &item as *const LVITEMW as isize);
    }

    pub fn icon_rect(&self, index: usize) -> Rect {
        let mut rect = RECT {
            left: LVIR_ICON,
            ..Default::default()
        };
        if self.send(LVM_GETITEMRECT, index, &mut rect as *mut RECT as isize) == 0 {
            return Rect::default();
        }
        Rect::new(rect.left, rect.top, rect.right, rect.bottom)
    }

    pub fn client_to_screen(&self, point: Point) -> Point {
        let mut pt = POINT {
            x: point.x,
            y: point.y,
        };
        unsafe {
            let _ = ClientToScreen(self.hwnd, &mut pt);
        }
        Point::new(pt.x, pt.y)
    }
}

/// `ListingPort` combining a list view with its shell browser
pub struct Win32Listing<B: ShellBrowser> {
    view: ListView,
    browser: B,
}

impl<B: ShellBrowser> Win32Listing<B> {
    pub fn new(view: ListView, browser: B) -> Self {
        Self { view, browser }
    }

    pub fn view(&self) -> ListView {
        self.view
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }
}

impl<B: ShellBrowser> ListingPort for Win32Listing<B> {
    fn columns(&self) -> ColumnSet {
        self.browser.columns()
    }

    fn set_columns(&mut self, columns: ColumnSet) {
        self.browser.set_columns(columns);
    }

    fn refresh(&mut self) {
        self.browser.refresh();
    }

    fn directory(&self) -> PathBuf {
        self.browser.directory()
    }

    fn item_count(&self) -> usize {
        self.view.item_count()
    }

    fn item(&self, index: usize) -> Option<ListItem> {
        self.browser.item(index)
    }

    fn selected_indices(&self) -> Vec<usize> {
        self.view.selected_indices()
    }

    fn focused_selected_index(&self) -> Option<usize> {
        self.view.focused_selected_index()
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        self.view.set_selected(index, selected);
    }

    fn item_icon_rect(&self, index: usize) -> Rect {
        self.view.icon_rect(index)
    }

    fn client_to_screen(&self, point: Point) -> Point {
        self.view.client_to_screen(point)
    }

    fn can_copy_selection(&self) -> bool {
        self.browser.can_copy_selection()
    }

    fn can_cut_selection(&self) -> bool {
        self.browser.can_cut_selection()
    }

    fn view_mode(&self) -> ViewMode {
        self.browser.view_mode()
    }
}
