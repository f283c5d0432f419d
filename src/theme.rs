pub const THEME_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// A valid stored preference wins; otherwise the environment decides, with dark as
/// the site's native look.
pub fn resolve_theme(stored: Option<&str>, prefers_light: bool) -> Theme {
    stored
        .and_then(Theme::from_stored)
        .unwrap_or(if prefers_light { Theme::Light } else { Theme::Dark })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_environment_without_preference_resolves_light() {
        assert_eq!(resolve_theme(None, true), Theme::Light);
        assert_eq!(resolve_theme(None, false), Theme::Dark);
    }

    #[test]
    fn stored_preference_beats_the_environment() {
        assert_eq!(resolve_theme(Some("dark"), true), Theme::Dark);
        assert_eq!(resolve_theme(Some("light"), false), Theme::Light);
    }

    #[test]
    fn garbage_in_storage_is_ignored() {
        assert_eq!(resolve_theme(Some("sepia"), true), Theme::Light);
    }

    #[test]
    fn toggling_flips_between_the_two_themes() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
