//! Named colors and the theme-to-color mapping.

use stranger_themes_core::Theme;

use crate::color::Color;

/// The fixed set of named colors every theme draws from.
pub struct Palette;

impl Palette {
    pub const WHITE: Color = Color::WHITE;
    pub const BLACK: Color = Color::gray(34);
    pub const MULBERRY_RED: Color = Color::from_rgb8(197, 81, 82);
    pub const FIRE_BUSH_ORANGE: Color = Color::from_rgb8(225, 148, 51);
    pub const CANARY_YELLOW: Color = Color::from_rgb8(255, 252, 120);
    pub const SAFFRON_YELLOW: Color = Color::from_rgb8(242, 190, 46);
    pub const WASABI_GREEN: Color = Color::from_rgb8(102, 255, 102);
    pub const SUSHI_GREEN: Color = Color::from_rgb8(118, 184, 59);
    pub const CERULEAN_BLUE: Color = Color::from_rgb8(0, 158, 220);
    pub const CANNON_PURPLE: Color = Color::from_rgb8(147, 78, 132);
    pub const STEEL_GRAY: Color = Color::gray(121);
    pub const SCROLL_GRAY: Color = Color::from_rgb8(111, 113, 121);
    pub const SILVER: Color = Color::gray(204);
    pub const GROUPED_GRAY: Color = Color::from_rgb8(239, 239, 241);
}

/// Semantic colors resolved for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    /// Brand tint, identical in both themes.
    pub brand: Color,

    // Text
    pub primary_text: Color,
    pub secondary_text: Color,
    pub inverted_primary_text: Color,
    pub inverted_secondary_text: Color,

    // Backgrounds
    pub content_background: Color,
    pub collection_background: Color,
    pub inverted_content_background: Color,
    pub inverted_collection_background: Color,

    // Status
    pub success: Color,
    pub attention: Color,
    pub failure: Color,
    pub inverted_success: Color,
    pub inverted_attention: Color,
    pub inverted_failure: Color,

    // Buttons
    pub normal_button: Color,
    pub highlighted_button: Color,
    pub disabled_button: Color,
    pub inverted_normal_button: Color,
    pub inverted_highlighted_button: Color,
    pub inverted_disabled_button: Color,
}

impl ColorPalette {
    /// Resolve the palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// The light theme palette.
    pub fn light() -> Self {
        Self {
            brand: Palette::MULBERRY_RED,

            primary_text: Palette::BLACK,
            secondary_text: Palette::STEEL_GRAY,
            inverted_primary_text: Palette::WHITE,
            inverted_secondary_text: Palette::SILVER,

            content_background: Palette::WHITE,
            collection_background: Palette::GROUPED_GRAY,
            inverted_content_background: Palette::BLACK,
            inverted_collection_background: Palette::SCROLL_GRAY,

            success: Palette::SUSHI_GREEN,
            attention: Palette::SAFFRON_YELLOW,
            failure: Palette::MULBERRY_RED,
            inverted_success: Palette::CERULEAN_BLUE,
            inverted_attention: Palette::SAFFRON_YELLOW,
            inverted_failure: Palette::FIRE_BUSH_ORANGE,

            normal_button: Palette::BLACK,
            highlighted_button: Palette::STEEL_GRAY,
            disabled_button: Palette::GROUPED_GRAY,
            inverted_normal_button: Palette::WHITE,
            inverted_highlighted_button: Palette::SILVER,
            inverted_disabled_button: Palette::SCROLL_GRAY,
        }
    }

    /// The dark theme palette.
    pub fn dark() -> Self {
        Self {
            brand: Palette::MULBERRY_RED,

            primary_text: Palette::WHITE,
            secondary_text: Palette::SILVER,
            inverted_primary_text: Palette::BLACK,
            inverted_secondary_text: Palette::STEEL_GRAY,

            content_background: Palette::BLACK,
            collection_background: Palette::SCROLL_GRAY,
            inverted_content_background: Palette::WHITE,
            inverted_collection_background: Palette::GROUPED_GRAY,

            success: Palette::WASABI_GREEN,
            attention: Palette::CANARY_YELLOW,
            failure: Palette::FIRE_BUSH_ORANGE,
            inverted_success: Palette::SAFFRON_YELLOW,
            inverted_attention: Palette::CERULEAN_BLUE,
            inverted_failure: Palette::MULBERRY_RED,

            normal_button: Palette::WHITE,
            highlighted_button: Palette::SILVER,
            disabled_button: Palette::SCROLL_GRAY,
            inverted_normal_button: Palette::BLACK,
            inverted_highlighted_button: Palette::STEEL_GRAY,
            inverted_disabled_button: Palette::GROUPED_GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_theme() {
        assert_eq!(ColorPalette::for_theme(Theme::Light), ColorPalette::light());
        assert_eq!(ColorPalette::for_theme(Theme::Dark), ColorPalette::dark());
    }

    #[test]
    fn test_themes_are_distinct() {
        let light = ColorPalette::light();
        let dark = ColorPalette::dark();
        assert_ne!(light, dark);
        assert_ne!(light.primary_text, dark.primary_text);
        assert_ne!(light.content_background, dark.content_background);
        assert_ne!(light.normal_button, dark.normal_button);
        assert_eq!(light.brand, dark.brand);
    }

    #[test]
    fn test_inverted_roles_mirror_each_other() {
        let light = ColorPalette::light();
        let dark = ColorPalette::dark();
        assert_eq!(light.inverted_primary_text, dark.primary_text);
        assert_eq!(light.inverted_content_background, dark.content_background);
        assert_eq!(light.inverted_normal_button, dark.normal_button);
        assert_eq!(light.inverted_collection_background, dark.collection_background);
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in Theme::ALL {
            let palette = ColorPalette::for_theme(theme);
            assert_ne!(palette.primary_text, palette.content_background);
        }
    }
}
