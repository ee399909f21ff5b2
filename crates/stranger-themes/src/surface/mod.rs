//! Display surfaces.
//!
//! A surface composes the two theme capabilities from the core crate: its
//! state is [`ColorUpdatable`](stranger_themes_core::ColorUpdatable) and a
//! [`ThemeObserver`](stranger_themes_core::ThemeObserver), and it embeds a
//! [`ThemeObservation`](stranger_themes_core::ThemeObservation) tying the
//! subscription to its own lifetime.
//!
//! Surfaces never update themselves when the user picks a theme. They publish
//! and then react to the echo like every other subscriber.

mod content;
mod plain;

use std::fmt;
use std::str::FromStr;

use stranger_themes_core::Theme;

use crate::widget::{NavigationBar, SharedTabBar};

pub use content::{ContentSurface, GridSurface, ListSurface};
pub use plain::PlainSurface;

/// A named user action on the plain surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    /// The "Light" choice.
    SelectLight,
    /// The "Dark" choice.
    SelectDark,
}

impl UserAction {
    /// The theme this action publishes.
    pub fn theme(self) -> Theme {
        match self {
            Self::SelectLight => Theme::Light,
            Self::SelectDark => Theme::Dark,
        }
    }
}

impl From<Theme> for UserAction {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::SelectLight,
            Theme::Dark => Self::SelectDark,
        }
    }
}

/// The three surface variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// [`PlainSurface`].
    Plain,
    /// [`ListSurface`].
    List,
    /// [`GridSurface`].
    Grid,
}

impl SurfaceKind {
    pub const ALL: [Self; 3] = [Self::Plain, Self::List, Self::Grid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::List => "list",
            Self::Grid => "grid",
        }
    }

    /// Title of the surface's tab bar item.
    pub fn tab_title(self) -> &'static str {
        match self {
            Self::Plain => "View",
            Self::List => "Table",
            Self::Grid => "Collection",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SurfaceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown surface '{s}', expected plain, list or grid"))
    }
}

/// Bars framing a surface.
#[derive(Debug, Clone)]
pub struct Chrome {
    /// The surface's own navigation bar.
    pub navigation_bar: NavigationBar,
    /// The container's tab bar, shared with the other surfaces.
    pub tab_bar: SharedTabBar,
}

impl Chrome {
    pub fn new(title: &str, tab_bar: SharedTabBar) -> Self {
        Self {
            navigation_bar: NavigationBar::new(title),
            tab_bar,
        }
    }

    /// Style both bars for `theme`.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.navigation_bar.apply_theme(theme);
        self.tab_bar.lock().apply_theme(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_themes() {
        assert_eq!(UserAction::SelectLight.theme(), Theme::Light);
        assert_eq!(UserAction::SelectDark.theme(), Theme::Dark);
        for theme in Theme::ALL {
            assert_eq!(UserAction::from(theme).theme(), theme);
        }
    }

    #[test]
    fn test_surface_kind_parse() {
        assert_eq!("grid".parse::<SurfaceKind>(), Ok(SurfaceKind::Grid));
        assert_eq!(" List ".parse::<SurfaceKind>(), Ok(SurfaceKind::List));
        assert!("window".parse::<SurfaceKind>().is_err());
    }
}
