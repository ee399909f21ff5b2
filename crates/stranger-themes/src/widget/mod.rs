//! Widgets owned by surfaces and cells.
//!
//! These hold only the style attributes a theme controls. Rendering them to
//! pixels is left to the host toolkit.

use std::sync::Arc;

use parking_lot::Mutex;
use stranger_themes_core::Theme;
use stranger_themes_style::{BarStyle, Color, ColorPalette};

/// A text label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    /// Displayed text.
    pub text: String,
    /// Text color.
    pub text_color: Color,
    /// Fill behind the text.
    pub background_color: Color,
}

impl Label {
    /// Create a label showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set both colors at once.
    pub fn set_colors(&mut self, text_color: Color, background_color: Color) {
        self.text_color = text_color;
        self.background_color = background_color;
    }
}

/// Title colors for each button state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonTitleColors {
    /// Idle title color.
    pub normal: Color,
    /// Title color while pressed.
    pub highlighted: Color,
    /// Title color when disabled.
    pub disabled: Color,
}

/// A bordered push button.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Button label.
    pub title: String,
    /// Title colors per state.
    pub title_colors: ButtonTitleColors,
    /// Outline color.
    pub border_color: Color,
    /// Outline width in points.
    pub border_width: f32,
    /// Corner radius in points.
    pub corner_radius: f32,
}

impl Button {
    /// Outline width of every themed button.
    pub const BORDER_WIDTH: f32 = 2.0;
    /// Corner radius of every themed button.
    pub const CORNER_RADIUS: f32 = 4.0;

    /// Create a button titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_colors: ButtonTitleColors::default(),
            border_color: Color::TRANSPARENT,
            border_width: Self::BORDER_WIDTH,
            corner_radius: Self::CORNER_RADIUS,
        }
    }

    /// Style the button for `palette`. The border follows the normal title color.
    pub fn apply_palette(&mut self, palette: &ColorPalette) {
        self.title_colors = ButtonTitleColors {
            normal: palette.normal_button,
            highlighted: palette.highlighted_button,
            disabled: palette.disabled_button,
        };
        self.border_color = palette.normal_button;
        self.border_width = Self::BORDER_WIDTH;
        self.corner_radius = Self::CORNER_RADIUS;
    }
}

/// An image view with an optional template tint.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageView {
    /// Name of the displayed image, if any.
    pub image: Option<String>,
    /// Tint applied to template images.
    pub tint_color: Color,
}

impl ImageView {
    /// Create an image view showing the named image.
    pub fn named(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Default::default()
        }
    }
}

/// A navigation bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationBar {
    /// Title shown in the bar.
    pub title: String,
    /// Current appearance.
    pub bar_style: BarStyle,
}

impl NavigationBar {
    /// Create a navigation bar titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bar_style: BarStyle::Default,
        }
    }

    /// Apply the navigation bar style for `theme`.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.bar_style = BarStyle::navigation(theme);
    }
}

/// A tab bar shared by every surface in a tab container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabBar {
    /// Item titles, in tab order.
    pub items: Vec<String>,
    /// Current appearance.
    pub bar_style: BarStyle,
}

impl TabBar {
    /// Create a tab bar with the given item titles.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            bar_style: BarStyle::Default,
        }
    }

    /// Apply the tab bar style for `theme`.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.bar_style = BarStyle::tab(theme);
    }
}

/// Tab bar handle held by every surface in a container.
pub type SharedTabBar = Arc<Mutex<TabBar>>;

#[cfg(test)]
mod tests {
    use super::*;
    use stranger_themes_style::Palette;

    #[test]
    fn test_button_palette() {
        let mut button = Button::new("Dark");
        button.apply_palette(&ColorPalette::dark());

        assert_eq!(button.title_colors.normal, Palette::WHITE);
        assert_eq!(button.title_colors.highlighted, Palette::SILVER);
        assert_eq!(button.title_colors.disabled, Palette::SCROLL_GRAY);
        assert_eq!(button.border_color, Palette::WHITE);
        assert_eq!(button.border_width, 2.0);
        assert_eq!(button.corner_radius, 4.0);
    }

    #[test]
    fn test_bar_themes() {
        let mut nav = NavigationBar::new("View Demo");
        let mut tabs = TabBar::new(["View", "Table", "Collection"]);

        nav.apply_theme(Theme::Dark);
        tabs.apply_theme(Theme::Dark);
        assert_eq!(nav.bar_style, BarStyle::BlackTranslucent);
        assert_eq!(tabs.bar_style, BarStyle::Black);

        nav.apply_theme(Theme::Light);
        tabs.apply_theme(Theme::Light);
        assert_eq!(nav.bar_style, BarStyle::Default);
        assert_eq!(tabs.bar_style, BarStyle::Default);
    }
}
