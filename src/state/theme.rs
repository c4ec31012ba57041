#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme. Dark is the page's unstyled default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a persisted flag. Anything but the two literals is ignored.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Theme implied by whether the light-mode class is present.
    pub fn from_light_class(present: bool) -> Self {
        if present { Self::Light } else { Self::Dark }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}
