//! ThemeSetup - Dark mode decision for the main window

use tracing::info;

use crate::application::ports::ThemeContext;
use crate::domain::value_objects::{Color, ThemeMode};

/// Background of dark surfaces such as the rebar gripper
pub const DARK_BACKGROUND: Color = Color::rgb(32, 32, 32);

/// Whether dark mode should be turned on for `mode`
pub fn should_enable_dark_mode(mode: ThemeMode, ctx: &dyn ThemeContext) -> bool {
    match mode {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
        ThemeMode::System => ctx.apps_use_dark_mode(),
    }
}

/// Colour to paint the gripper area with
pub fn gripper_background(ctx: &dyn ThemeContext) -> Color {
    if ctx.is_dark_mode_enabled() {
        DARK_BACKGROUND
    } else {
        ctx.system_window_color()
    }
}

/// Applies the configured theme mode once at startup
#[derive(Clone, Copy, Debug)]
pub struct ThemeSetup {
    mode: ThemeMode,
}

impl ThemeSetup {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Returns whether dark mode is active afterwards
    pub fn apply(&self, ctx: &mut dyn ThemeContext) -> bool {
        if !should_enable_dark_mode(self.mode, ctx) {
            return false;
        }

        ctx.enable_for_app();

        // The OS can refuse (old builds, high contrast)
        if !ctx.is_dark_mode_enabled() {
            info!(mode = ?self.mode, "dark mode requested but not available");
            return false;
        }

        ctx.allow_dark_mode_for_window(true);
        ctx.use_dark_window_colors();
        info!(mode = ?self.mode, "dark mode enabled");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeTheme {
        os_dark: bool,
        supported: bool,
        enabled: bool,
        window_allowed: bool,
        dark_colors: bool,
    }

    impl ThemeContext for FakeTheme {
        fn apps_use_dark_mode(&self) -> bool {
            self.os_dark
        }

        fn enable_for_app(&mut self) {
            self.enabled = self.supported;
        }

        fn is_dark_mode_enabled(&self) -> bool {
            self.enabled
        }

        fn allow_dark_mode_for_window(&mut self, allow: bool) {
            self.window_allowed = allow;
        }

        fn use_dark_window_colors(&mut self) {
            self.dark_colors = true;
        }

        fn system_window_color(&self) -> Color {
            Color::rgb(255, 255, 255)
        }
    }

    #[test]
    fn test_decision_table() {
        let light_os = FakeTheme::default();
        let dark_os = FakeTheme {
            os_dark: true,
            ..Default::default()
        };

        assert!(should_enable_dark_mode(ThemeMode::Dark, &light_os));
        assert!(!should_enable_dark_mode(ThemeMode::Light, &dark_os));
        assert!(should_enable_dark_mode(ThemeMode::System, &dark_os));
        assert!(!should_enable_dark_mode(ThemeMode::System, &light_os));
    }

    #[test]
    fn test_apply_configures_window_when_enabled() {
        let mut ctx = FakeTheme {
            supported: true,
            ..Default::default()
        };

        assert!(ThemeSetup::new(ThemeMode::Dark).apply(&mut ctx));
        assert!(ctx.window_allowed);
        assert!(ctx.dark_colors);
        assert_eq!(gripper_background(&ctx), DARK_BACKGROUND);
    }

    #[test]
    fn test_apply_stops_when_os_refuses() {
        let mut ctx = FakeTheme::default();

        assert!(!ThemeSetup::new(ThemeMode::Dark).apply(&mut ctx));
        assert!(!ctx.window_allowed);
        assert!(!ctx.dark_colors);
        assert_eq!(gripper_background(&ctx), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_light_mode_touches_nothing() {
        let mut ctx = FakeTheme {
            os_dark: true,
            supported: true,
            ..Default::default()
        };

        assert!(!ThemeSetup::new(ThemeMode::Light).apply(&mut ctx));
        assert!(!ctx.enabled);
    }
}
