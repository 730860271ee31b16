use std::fmt;

/// The OS-level color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A theme preference as read from the store or chosen by the user.
///
/// Stored values are trusted verbatim: anything that is not one of the
/// three known names is carried through unchanged as `Other` and applied
/// with the light visual state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    Auto,
    Other(String),
}

impl Theme {
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            "auto" => Theme::Auto,
            other => Theme::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
            Theme::Other(raw) => raw,
        }
    }

    /// Collapses `auto` to the system color mode. Every other value passes
    /// through unchanged, including unrecognized stored strings.
    pub fn resolve(self, system: ColorMode) -> Theme {
        match self {
            Theme::Auto => system.into(),
            other => other,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The theme a toggle activation switches to: anything that is not
    /// explicitly dark toggles to dark, so an unset/auto/system-light state
    /// always lands on dark first.
    pub fn toggled(&self) -> Theme {
        if self.is_dark() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl From<ColorMode> for Theme {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Theme::Light,
            ColorMode::Dark => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_parse_verbatim() {
        assert_eq!(Theme::from_stored("light"), Theme::Light);
        assert_eq!(Theme::from_stored("dark"), Theme::Dark);
        assert_eq!(Theme::from_stored("auto"), Theme::Auto);
        assert_eq!(
            Theme::from_stored("solarized"),
            Theme::Other("solarized".to_string())
        );
        assert_eq!(Theme::from_stored("solarized").as_str(), "solarized");
    }

    #[test]
    fn auto_resolves_to_system_mode() {
        assert_eq!(Theme::Auto.resolve(ColorMode::Dark), Theme::Dark);
        assert_eq!(Theme::Auto.resolve(ColorMode::Light), Theme::Light);
        assert_eq!(Theme::Dark.resolve(ColorMode::Light), Theme::Dark);
        assert_eq!(
            Theme::Other("x".to_string()).resolve(ColorMode::Dark),
            Theme::Other("x".to_string())
        );
    }

    #[test]
    fn anything_not_dark_toggles_to_dark() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Auto.toggled(), Theme::Dark);
        assert_eq!(Theme::Other("x".to_string()).toggled(), Theme::Dark);
    }
}
