//! The color-updatable capability.

use crate::theme::Theme;

/// Something that caches a [`Theme`] and knows how to re-render for one.
///
/// Implementors supply storage ([`theme`](Self::theme) and
/// [`store_theme`](Self::store_theme)) and the mapping from a theme onto their
/// own widgets ([`apply_colors`](Self::apply_colors)). The provided
/// [`set_theme`](Self::set_theme) ties them together so that a re-render
/// happens if and only if the cached value actually changes.
///
/// # Example
///
/// ```
/// use stranger_themes_core::{ColorUpdatable, Theme};
///
/// #[derive(Default)]
/// struct Swatch {
///     theme: Theme,
///     renders: usize,
/// }
///
/// impl ColorUpdatable for Swatch {
///     fn theme(&self) -> Theme {
///         self.theme
///     }
///
///     fn store_theme(&mut self, theme: Theme) {
///         self.theme = theme;
///     }
///
///     fn apply_colors(&mut self, _theme: Theme) {
///         self.renders += 1;
///     }
/// }
///
/// let mut swatch = Swatch::default();
/// assert!(swatch.set_theme(Theme::Dark));
/// assert!(!swatch.set_theme(Theme::Dark));
/// assert_eq!(swatch.renders, 1);
/// ```
pub trait ColorUpdatable {
    /// The cached theme.
    fn theme(&self) -> Theme;

    /// Overwrite the cached theme without rendering.
    fn store_theme(&mut self, theme: Theme);

    /// Apply the style attributes for `theme` to every owned widget.
    ///
    /// Must be idempotent and must not publish theme events.
    fn apply_colors(&mut self, theme: Theme);

    /// Assign `theme`, rendering only if it differs from the cached value.
    ///
    /// Returns `true` when a render happened.
    fn set_theme(&mut self, theme: Theme) -> bool {
        if self.theme() == theme {
            return false;
        }
        self.store_theme(theme);
        self.apply_colors(theme);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        theme: Theme,
        applied: Vec<Theme>,
    }

    impl ColorUpdatable for Recorder {
        fn theme(&self) -> Theme {
            self.theme
        }

        fn store_theme(&mut self, theme: Theme) {
            self.theme = theme;
        }

        fn apply_colors(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    #[test]
    fn test_set_same_theme_twice_renders_once() {
        let mut recorder = Recorder::default();
        assert!(recorder.set_theme(Theme::Dark));
        assert!(!recorder.set_theme(Theme::Dark));
        assert_eq!(recorder.applied, vec![Theme::Dark]);
    }

    #[test]
    fn test_set_cached_theme_does_not_render() {
        let mut recorder = Recorder::default();
        assert!(!recorder.set_theme(Theme::Light));
        assert!(recorder.applied.is_empty());
    }

    #[test]
    fn test_alternating_renders() {
        let mut recorder = Recorder::default();
        for theme in [Theme::Dark, Theme::Dark, Theme::Light, Theme::Dark] {
            recorder.set_theme(theme);
        }
        assert_eq!(recorder.applied, vec![Theme::Dark, Theme::Light, Theme::Dark]);
        assert_eq!(recorder.theme(), Theme::Dark);
    }
}
