//! Hagwon Settings
//!
//! Local display preferences (font size, theme) for the Hagwon e-textbook
//! viewer, persisted as one small JSON file. The wire format keeps the
//! viewer's historical preference names.
//!
//! # Example
//!
//! ```rust
//! use hagwon_settings::{DisplaySettings, FontSize, Theme};
//!
//! let settings = DisplaySettings::default();
//! assert_eq!(settings.font_size, FontSize::Medium);
//! assert_eq!(settings.font_size.base_px(), 16);
//! assert_eq!(settings.theme.as_str(), "default");
//!
//! let night = DisplaySettings { font_size: FontSize::Large, theme: Theme::Dark };
//! assert_eq!(night.theme.as_str(), "dark");
//! ```

mod store;
mod types;

pub use store::SettingsStore;
pub use types::{DisplaySettings, FontSize, Theme};
