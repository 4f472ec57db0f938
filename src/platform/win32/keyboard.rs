//! Modifier state as seen by the listing

use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyState, VIRTUAL_KEY, VK_CONTROL, VK_MBUTTON, VK_MENU, VK_SHIFT,
};

use crate::domain::value_objects::KeyState;

// NMITEMACTIVATE::uKeyFlags
const LVKF_ALT: u32 = 0x0001;
const LVKF_CONTROL: u32 = 0x0002;
const LVKF_SHIFT: u32 = 0x0004;

fn is_down(vk: VIRTUAL_KEY) -> bool {
    unsafe { GetKeyState(vk.0 as i32) < 0 }
}

/// Modifier state for the message currently being processed
pub fn current_key_state() -> KeyState {
    KeyState {
        ctrl: is_down(VK_CONTROL),
        shift: is_down(VK_SHIFT),
        alt: is_down(VK_MENU),
        middle_button: is_down(VK_MBUTTON),
    }
}

/// Modifier state reported with a list-view item activation
pub fn key_state_from_lv_flags(flags: u32) -> KeyState {
    KeyState {
        ctrl: flags & LVKF_CONTROL != 0,
        shift: flags & LVKF_SHIFT != 0,
        alt: flags & LVKF_ALT != 0,
        middle_button: false,
    }
}
