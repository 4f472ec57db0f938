//! Theme and DPI contexts
//!
//! These replace process-wide helper singletons: components that need DPI or
//! dark-mode state get one of these passed in.

use crate::domain::value_objects::Color;

/// Reference DPI at which logical pixels equal physical pixels
pub const BASE_DPI: u32 = 96;

/// Scale a logical pixel value to `dpi`
pub fn scale_px(px: u32, dpi: u32) -> u32 {
    ((px as f64) * (dpi as f64) / BASE_DPI as f64).round() as u32
}

/// Source of the DPI of the listing's monitor
pub trait DpiContext {
    fn dpi(&self) -> u32;

    fn scale(&self, px: u32) -> u32 {
        scale_px(px, self.dpi())
    }
}

/// Fixed DPI, for tests and headless use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDpi(pub u32);

impl Default for FixedDpi {
    fn default() -> Self {
        FixedDpi(BASE_DPI)
    }
}

impl DpiContext for FixedDpi {
    fn dpi(&self) -> u32 {
        self.0
    }
}

/// Access to OS dark-mode state for the main window
pub trait ThemeContext {
    /// Whether the OS is set to dark mode for apps
    fn apps_use_dark_mode(&self) -> bool;

    /// Opt the process into dark mode
    fn enable_for_app(&mut self);

    /// Whether dark mode ended up active
    fn is_dark_mode_enabled(&self) -> bool;

    /// Allow dark mode on the main window
    fn allow_dark_mode_for_window(&mut self, allow: bool);

    /// Switch the main window frame to dark colours
    fn use_dark_window_colors(&mut self);

    /// System colour of window backgrounds
    fn system_window_color(&self) -> Color;
}
