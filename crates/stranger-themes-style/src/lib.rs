//! Theme-to-attribute mapping for Stranger Themes.
//!
//! Everything here is a pure function of [`Theme`]: a fixed table of named
//! colors ([`Palette`]), the semantic roles resolved from it for each theme
//! ([`ColorPalette`]), and the bar styles used by navigation and tab bars
//! ([`BarStyle`]). Every mapping matches on both themes explicitly.
//!
//! # Example
//!
//! ```
//! use stranger_themes_core::Theme;
//! use stranger_themes_style::{BarStyle, ColorPalette, Palette};
//!
//! let palette = ColorPalette::for_theme(Theme::Dark);
//! assert_eq!(palette.primary_text, Palette::WHITE);
//! assert_eq!(BarStyle::tab(Theme::Dark), BarStyle::Black);
//! ```
//!
//! [`Theme`]: stranger_themes_core::Theme

mod bar;
mod color;
mod palette;

pub use bar::BarStyle;
pub use color::Color;
pub use palette::{ColorPalette, Palette};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::{BarStyle, Color, ColorPalette, Palette};
    pub use stranger_themes_core::Theme;
}
