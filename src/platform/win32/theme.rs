//! Dark mode state of the main window

use windows::core::w;
use windows::Win32::Foundation::{BOOL, HWND};
use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWA_USE_IMMERSIVE_DARK_MODE};
use windows::Win32::Graphics::Gdi::{GetSysColor, COLOR_WINDOW};
use windows::Win32::System::Registry::{RegGetValueW, HKEY_CURRENT_USER, RRF_RT_REG_DWORD};
use windows::Win32::UI::Controls::SetWindowTheme;

use crate::application::ports::ThemeContext;
use crate::domain::value_objects::Color;

/// `ThemeContext` for one top-level window
pub struct Win32Theme {
    hwnd: HWND,
    enabled: bool,
}

impl Win32Theme {
    pub fn new(hwnd: HWND) -> Self {
        Self {
            hwnd,
            enabled: false,
        }
    }
}

impl ThemeContext for Win32Theme {
    fn apps_use_dark_mode(&self) -> bool {
        let mut value: u32 = 1;
        let mut size = std::mem::size_of::<u32>() as u32;
        let status = unsafe {
            RegGetValueW(
                HKEY_CURRENT_USER,
                w!("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize"),
                w!("AppsUseLightTheme"),
                RRF_RT_REG_DWORD,
                None,
                Some(&mut value as *mut u32 as *mut _),
                Some(&mut size),
            )
        };
        // Missing value means light
        status.0 == 0 && value == 0
    }

    fn enable_for_app(&mut self) {
        self.enabled = true;
    }

    fn is_dark_mode_enabled(&self) -> bool {
        self.enabled
    }

    fn allow_dark_mode_for_window(&mut self, allow: bool) {
        let theme = if allow {
            w!("DarkMode_Explorer")
        } else {
            w!("Explorer")
        };
        unsafe {
            let _ = SetWindowTheme(self.hwnd, theme, None);
        }
    }

    fn use_dark_window_colors(&mut self) {
        let dark = BOOL::from(true);
        let result = unsafe {
            DwmSetWindowAttribute(
                self.hwnd,
                DWMWA_USE_IMMERSIVE_DARK_MODE,
                &dark as *const BOOL as *const _,
                std::mem::size_of::<BOOL>() as u32,
            )
        };
        if let Err(e) = result {
            log!("DwmSetWindowAttribute(dark mode) failed: {:?}", e);
            self.enabled = false;
        }
    }

    fn system_window_color(&self) -> Color {
        Color::from_colorref(unsafe { GetSysColor(COLOR_WINDOW) })
    }
}
