//! Theme preference model shared by the storage layer and the DOM controller.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode (the default for first-time visitors).
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used for the document attribute and the storage key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognised falls back to light.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// The mode a toggle switches to.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class shown on the toggle control for the current mode.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "icon-sun",
            Self::Dark => "icon-moon",
        }
    }

    /// Tooltip describing what the toggle control will switch to next.
    #[must_use]
    pub const fn toggle_hint(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_and_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn persisted_value_round_trips_through_parse() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_value(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_values_default_to_light() {
        assert_eq!(ThemeMode::from_value(""), ThemeMode::Light);
        assert_eq!(ThemeMode::from_value("solarized"), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn toggle_hint_names_the_next_mode() {
        assert_eq!(ThemeMode::Light.toggle_hint(), "Switch to dark mode");
        assert_eq!(ThemeMode::Dark.toggle_hint(), "Switch to light mode");
    }
}
