use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Colour scheme of the page. Dark is the default until the visitor toggles it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
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

    /// Class applied to `<body>`. Only light mode carries one.
    pub fn body_class(&self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "",
        }
    }
}

/// Input for setting the theme explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetThemeInput {
    pub theme: Theme,
}

/// The stored theme and when it was last written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: Theme,
    /// `None` until the visitor first changes the theme.
    pub updated_at: Option<DateTime<Utc>>,
}
