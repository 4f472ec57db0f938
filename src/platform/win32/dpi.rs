//! DPI awareness utilities for Windows

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::HiDpi::*;

use crate::application::ports::{DpiContext, BASE_DPI};

/// Enable per-monitor DPI awareness (call early in main)
pub fn enable_dpi_awareness() -> Result<(), windows::core::Error> {
    unsafe {
        // Try V2 first (Windows 10 1703+)
        if SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2).is_ok() {
            return Ok(());
        }
        // Fall back to V1
        SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE)
    }
}

/// DPI of the monitor a window is on
pub struct WindowDpi {
    hwnd: HWND,
}

impl WindowDpi {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }
}

impl DpiContext for WindowDpi {
    fn dpi(&self) -> u32 {
        match unsafe { GetDpiForWindow(self.hwnd) } {
            // Invalid window
            0 => BASE_DPI,
            dpi => dpi,
        }
    }
}
