#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl ThemeChoice {
    pub fn resolve(self, prefers_dark: bool) -> Appearance {
        match self {
            ThemeChoice::Light => Appearance::Light,
            ThemeChoice::Dark => Appearance::Dark,
            ThemeChoice::System if prefers_dark => Appearance::Dark,
            ThemeChoice::System => Appearance::Light,
        }
    }

    /// Light goes dark; dark and system both go light.
    pub fn toggled(self) -> ThemeChoice {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark | ThemeChoice::System => ThemeChoice::Light,
        }
    }
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_follows_the_media_query() {
        assert_eq!(ThemeChoice::System.resolve(true), Appearance::Dark);
        assert_eq!(ThemeChoice::System.resolve(false), Appearance::Light);
        assert_eq!(ThemeChoice::Light.resolve(true), Appearance::Light);
        assert_eq!(ThemeChoice::Dark.resolve(false), Appearance::Dark);
    }

    #[test]
    fn toggle_only_leaves_light_for_dark() {
        assert_eq!(ThemeChoice::Light.toggled(), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::Dark.toggled(), ThemeChoice::Light);
        assert_eq!(ThemeChoice::System.toggled(), ThemeChoice::Light);
        assert_eq!(ThemeChoice::default(), ThemeChoice::System);
    }
}
