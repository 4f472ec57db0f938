//! Listing message decoding and the list-view subclass
//!
//! Subclass messages (`WM_CONTEXTMENU`, `WM_NOTIFY` from the header,
//! `WM_SETFOCUS`, `WM_MENUSELECT`) and the parent's `WM_NOTIFY` codes
//! (`LVN_KEYDOWN`, `NM_DBLCLK`) become `ListingEvent`s.
//!
//! Focus and menu-select events go straight to a host relay. They arrive
//! while the listing's own popup menu is tracked, when the handler is busy.

use std::cell::RefCell;
use std::ffi::c_void;

use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Controls::{NMHDR, NMHEADERW, NMITEMACTIVATE, NMLVKEYDOWN};
use windows::Win32::UI::Shell::{DefSubclassProc, RemoveWindowSubclass, SetWindowSubclass};
use windows::Win32::UI::WindowsAndMessaging::{WM_CONTEXTMENU, WM_MENUSELECT, WM_NOTIFY, WM_SETFOCUS};

use super::keyboard::{current_key_state, key_state_from_lv_flags};
use crate::adapters::controllers::{EventResult, ListingEvent, ListingKey};
use crate::application::ports::HostPort;
use crate::application::use_cases::MenuAnchor;
use crate::domain::value_objects::Point;

const HDN_FIRST: u32 = 0u32.wrapping_sub(300);
const HDN_BEGINDRAG: u32 = HDN_FIRST.wrapping_sub(10);
const HDN_ENDDRAG: u32 = HDN_FIRST.wrapping_sub(11);
const LVN_FIRST: u32 = 0u32.wrapping_sub(100);
const LVN_KEYDOWN: u32 = LVN_FIRST.wrapping_sub(55);
const NM_DBLCLK: u32 = 0u32.wrapping_sub(3);

const SUBCLASS_ID: usize = 0x5056;

fn loword(value: usize) -> u32 {
    (value & 0xFFFF) as u32
}

fn hiword(value: usize) -> u32 {
    ((value >> 16) & 0xFFFF) as u32
}

/// Signed screen point packed into an LPARAM
fn point_from_lparam(lparam: LPARAM) -> Point {
    let x = (lparam.0 & 0xFFFF) as u16 as i16 as i32;
    let y = ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32;
    Point::new(x, y)
}

/// Decode a message received by the list view itself
///
/// # Safety
/// `lparam` must be valid for `msg` as delivered by the system.
pub unsafe fn decode_listing_message(
    is_active: &dyn Fn(HWND) -> bool,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> Option<ListingEvent> {
    match msg {
        WM_MENUSELECT => Some(ListingEvent::MenuSelect {
            item: loword(wparam.0),
            flags: hiword(wparam.0),
        }),
        WM_SETFOCUS => Some(ListingEvent::FocusGained),
        WM_CONTEXTMENU => Some(ListingEvent::ContextMenu {
            from_active_listing: is_active(HWND(wparam.0 as *mut c_void)),
            anchor: MenuAnchor::from_screen_point(point_from_lparam(lparam)),
            keys: current_key_state(),
        }),
        WM_NOTIFY => {
            let header = &*(lparam.0 as *const NMHDR);
            match header.code {
                HDN_BEGINDRAG => Some(ListingEvent::HeaderBeginDrag),
                HDN_ENDDRAG => {
                    let notify = &*(lparam.0 as *const NMHEADERW);
                    if notify.pitem.is_null() {
                        return None;
                    }
                    let source = usize::try_from(notify.iItem).ok()?;
                    let target = usize::try_from((*notify.pitem).iOrder).ok()?;
                    Some(ListingEvent::HeaderEndDrag { source, target })
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// Decode a `WM_NOTIFY` the list view sent to its parent
///
/// # Safety
/// `lparam` must point to a valid NMHDR-prefixed notification.
pub unsafe fn decode_parent_notify(list_view: HWND, lparam: LPARAM) -> Option<ListingEvent> {
    let header = &*(lparam.0 as *const NMHDR);
    if header.hwndFrom != list_view {
        return None;
    }

    match header.code {
        LVN_KEYDOWN => {
            let notify = &*(lparam.0 as *const NMLVKEYDOWN);
            let mut keys = current_key_state();
            keys.middle_button = false;
            Some(ListingEvent::KeyDown {
                key: ListingKey::from_virtual_key(notify.wVKey),
                keys,
            })
        }
        NM_DBLCLK => {
            let notify = &*(lparam.0 as *const NMITEMACTIVATE);
            Some(ListingEvent::ItemActivated {
                index: usize::try_from(notify.iItem).ok(),
                keys: key_state_from_lv_flags(notify.uKeyFlags),
            })
        }
        _ => None,
    }
}

/// Converts an `EventResult` into what a window procedure returns, if anything
pub fn handled_result(result: EventResult) -> Option<LRESULT> {
    match result {
        EventResult::Handled(value) => Some(LRESULT(value)),
        EventResult::Default => None,
    }
}

/// Deliver a focus or menu-select event to `host`.
/// Returns false for every other event.
pub fn relay_to_host(host: &mut dyn HostPort, event: &ListingEvent) -> bool {
    match *event {
        ListingEvent::FocusGained => host.focus_changed(),
        ListingEvent::MenuSelect { item, flags } => host.menu_select(item, flags),
        _ => return false,
    }
    true
}

type EventHandler = Box<dyn FnMut(ListingEvent) -> EventResult>;

struct SubclassState {
    is_active: Box<dyn Fn(HWND) -> bool>,
    relay: RefCell<Box<dyn HostPort>>,
    handler: RefCell<EventHandler>,
}

unsafe extern "system" fn listing_subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _id: usize,
    ref_data: usize,
) -> LRESULT {
    let state = &*(ref_data as *const SubclassState);

    if let Some(event) = decode_listing_message(&*state.is_active, msg, wparam, lparam) {
        if let Ok(mut relay) = state.relay.try_borrow_mut() {
            if relay_to_host(&mut **relay, &event) {
                return DefSubclassProc(hwnd, msg, wparam, lparam);
            }
        }

        // Re-entered from inside a modal menu loop
        match state.handler.try_borrow_mut() {
            Ok(mut handler) => {
                if let Some(result) = handled_result((handler)(event)) {
                    return result;
                }
            }
            Err(_) => log!("Listing event dropped while busy: msg {:#x}", msg),
        }
    }

    DefSubclassProc(hwnd, msg, wparam, lparam)
}

/// Installed list-view subclass; removed on drop
pub struct ListingSubclass {
    hwnd: HWND,
    state: *mut SubclassState,
}

impl ListingSubclass {
    /// Route the list view's messages through `handler`.
    ///
    /// `is_active` tells whether a window is the listing of the active tab.
    /// `relay` receives focus and menu-select notifications; it is usually a
    /// second handle onto the same host the handler's controller owns.
    pub fn install(
        list_view: HWND,
        is_active: Box<dyn Fn(HWND) -> bool>,
        relay: Box<dyn HostPort>,
        handler: EventHandler,
    ) -> windows::core::Result<Self> {
        let state = Box::into_raw(Box::new(SubclassState {
            is_active,
            relay: RefCell::new(relay),
            handler: RefCell::new(handler),
        }));

        let installed = unsafe {
            SetWindowSubclass(list_view, Some(listing_subclass_proc), SUBCLASS_ID, state as usize)
        };
        if !installed.as_bool() {
            unsafe { drop(Box::from_raw(state)) };
            return Err(windows::core::Error::from_win32());
        }

        log!("Listing subclass installed on {:?}", list_view);
        Ok(Self {
            hwnd: list_view,
            state,
        })
    }
}

impl Drop for ListingSubclass {
    fn drop(&mut self) {
        unsafe {
            let _ = RemoveWindowSubclass(self.hwnd, Some(listing_subclass_proc), SUBCLASS_ID);
            drop(Box::from_raw(self.state));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeHost;
    use crate::domain::value_objects::KeyState;

    #[test]
    fn test_relay_takes_focus_and_menu_select_only() {
        let mut host = FakeHost::default();

        assert!(relay_to_host(&mut host, &ListingEvent::FocusGained));
        assert!(relay_to_host(
            &mut host,
            &ListingEvent::MenuSelect { item: 40012, flags: 0x80 }
        ));
        assert!(!relay_to_host(&mut host, &ListingEvent::HeaderBeginDrag));
        assert!(!relay_to_host(
            &mut host,
            &ListingEvent::KeyDown {
                key: ListingKey::Enter,
                keys: KeyState::NONE,
            }
        ));

        assert_eq!(host.focus_changes, 1);
        assert_eq!(host.menu_selects, vec![(40012, 0x80)]);
        assert!(host.commands.is_empty());
    }

    #[test]
    fn test_point_from_lparam_is_signed() {
        assert_eq!(point_from_lparam(LPARAM(-1)), Point::new(-1, -1));
        assert_eq!(point_from_lparam(LPARAM((20 << 16) | 10)), Point::new(10, 20));
    }

    #[test]
    fn test_notification_codes() {
        assert_eq!(HDN_BEGINDRAG, 0xFFFF_FECA);
        assert_eq!(HDN_ENDDRAG, 0xFFFF_FEC9);
        assert_eq!(LVN_KEYDOWN, 0xFFFF_FF65);
        assert_eq!(NM_DBLCLK, 0xFFFF_FFFD);
    }
}
