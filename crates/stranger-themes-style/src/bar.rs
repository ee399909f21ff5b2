//! Navigation and tab bar styles.

use stranger_themes_core::Theme;

/// Appearance of a navigation or tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarStyle {
    /// Light bar with dark content.
    #[default]
    Default,
    /// Opaque black bar.
    Black,
    /// Black bar that lets content show through.
    BlackTranslucent,
}

impl BarStyle {
    /// Style of a navigation bar under `theme`.
    pub fn navigation(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Default,
            Theme::Dark => Self::BlackTranslucent,
        }
    }

    /// Style of a tab bar under `theme`.
    pub fn tab(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Default,
            Theme::Dark => Self::Black,
        }
    }
}
