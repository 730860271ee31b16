use crate::theme::ColorMode;

/// Source of the OS color-scheme preference.
///
/// Injected into the controller so the OS query can be replaced with a
/// fixed mode in tests and scripts.
pub trait SystemScheme {
    fn color_mode(&self) -> ColorMode;
}

/// Queries the operating system's dark-mode setting.
pub struct OsScheme;

impl SystemScheme for OsScheme {
    fn color_mode(&self) -> ColorMode {
        match dark_light::detect() {
            dark_light::Mode::Dark => ColorMode::Dark,
            dark_light::Mode::Light => ColorMode::Light,
        }
    }
}

/// A forced color mode.
pub struct FixedScheme(pub ColorMode);

impl SystemScheme for FixedScheme {
    fn color_mode(&self) -> ColorMode {
        self.0
    }
}
