//! Display preference types
//!
//! Wire values match the preference names the viewer has always stored, so
//! an existing settings file keeps working.

use serde::{Deserialize, Serialize};

/// Reading font size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    /// 14px base
    Small,

    /// 16px base
    #[default]
    Medium,

    /// 18px base
    Large,
}

impl FontSize {
    /// Root font size in pixels at this setting
    pub fn base_px(&self) -> u32 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 18,
        }
    }

    /// The stored preference name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Standard light theme
    #[default]
    Default,

    /// 护眼 reading theme
    EyeCare,

    /// Dark theme
    Dark,
}

impl Theme {
    /// The `theme-*` CSS class suffix the viewer applies
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::EyeCare => "eye-care",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted display preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Reading font size
    pub font_size: FontSize,

    /// Color theme
    pub theme: Theme,
}
