//! The "View Demo" surface: a logo and two buttons.

use std::sync::Arc;

use parking_lot::Mutex;
use stranger_themes_core::{
    ColorUpdatable, Theme, ThemeChannel, ThemeObservation, ThemeObserver, ThemePublisher,
};
use stranger_themes_style::{Color, ColorPalette};

use super::{Chrome, UserAction};
use crate::cell::IndexPath;
use crate::error::{Result, SurfaceError};
use crate::targets;
use crate::widget::{Button, ImageView, NavigationBar, SharedTabBar};

const TITLE: &str = "View Demo";
const LOGO: &str = "Logo";

struct PlainState {
    theme: Theme,
    image_view: ImageView,
    light_button: Button,
    dark_button: Button,
    chrome: Chrome,
    background_color: Color,
    renders: usize,
}

impl ColorUpdatable for PlainState {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn store_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn apply_colors(&mut self, theme: Theme) {
        let palette = ColorPalette::for_theme(theme);
        self.image_view.tint_color = palette.brand;
        self.light_button.apply_palette(&palette);
        self.dark_button.apply_palette(&palette);
        self.background_color = palette.content_background;
        self.chrome.apply_theme(theme);
        self.renders += 1;
        tracing::trace!(
            target: targets::SURFACE,
            title = TITLE,
            %theme,
            tint = %self.image_view.tint_color,
            "colors applied"
        );
    }
}

impl ThemeObserver for PlainState {}

/// A surface with a tinted logo and "Light" / "Dark" buttons.
pub struct PlainSurface {
    state: Arc<Mutex<PlainState>>,
    observation: ThemeObservation,
    publisher: ThemePublisher,
}

impl PlainSurface {
    /// Create an inactive surface cached at [`Theme::Light`].
    pub fn new(channel: &ThemeChannel, tab_bar: SharedTabBar) -> Self {
        Self::with_theme(channel, tab_bar, Theme::Light)
    }

    /// Create an inactive surface cached at `theme`.
    pub fn with_theme(channel: &ThemeChannel, tab_bar: SharedTabBar, theme: Theme) -> Self {
        let state = PlainState {
            theme,
            image_view: ImageView::named(LOGO),
            light_button: Button::new("Light"),
            dark_button: Button::new("Dark"),
            chrome: Chrome::new(TITLE, tab_bar),
            background_color: Color::TRANSPARENT,
            renders: 0,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            observation: ThemeObservation::new(channel.clone()),
            publisher: ThemePublisher::from_channel(channel),
        }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    /// Subscribe to theme changes and render with the cached theme.
    #[tracing::instrument(target = "stranger_themes::surface", skip(self), fields(title = TITLE))]
    pub fn activate(&mut self) -> Result<()> {
        self.observation.activate(self.state.clone())?;
        let mut state = self.state.lock();
        let theme = state.theme;
        state.apply_colors(theme);
        tracing::debug!(target: targets::SURFACE, %theme, "surface activated");
        Ok(())
    }

    /// Unsubscribe. Returns `false` when the surface was not active.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.observation.deactivate();
        if was_active {
            tracing::debug!(target: targets::SURFACE, title = TITLE, "surface deactivated");
        }
        was_active
    }

    pub fn is_active(&self) -> bool {
        self.observation.is_active()
    }

    pub fn theme(&self) -> Theme {
        self.state.lock().theme
    }

    pub fn render_count(&self) -> usize {
        self.state.lock().renders
    }

    pub fn background_color(&self) -> Color {
        self.state.lock().background_color
    }

    pub fn image_view(&self) -> ImageView {
        self.state.lock().image_view.clone()
    }

    /// The button for `action`.
    pub fn button(&self, action: UserAction) -> Button {
        let state = self.state.lock();
        match action {
            UserAction::SelectLight => state.light_button.clone(),
            UserAction::SelectDark => state.dark_button.clone(),
        }
    }

    pub fn navigation_bar(&self) -> NavigationBar {
        self.state.lock().chrome.navigation_bar.clone()
    }

    /// The choice at `path`: item 0 is light, item 1 is dark.
    pub fn choice_for(path: IndexPath) -> Result<UserAction> {
        match (path.section, path.item) {
            (0, 0) => Ok(UserAction::SelectLight),
            (0, 1) => Ok(UserAction::SelectDark),
            _ => Err(SurfaceError::out_of_range(path)),
        }
    }

    /// Publish the theme for `action`.
    pub fn perform(&self, action: UserAction) -> Result<()> {
        if !self.is_active() {
            return Err(SurfaceError::Inactive { title: TITLE });
        }
        tracing::debug!(target: targets::SURFACE, title = TITLE, ?action, "action performed");
        self.publisher.publish(action.theme());
        Ok(())
    }

    /// Perform the choice at `path`.
    pub fn select(&self, path: IndexPath) -> Result<()> {
        self.perform(Self::choice_for(path)?)
    }
}

impl std::fmt::Debug for PlainSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlainSurface")
            .field("theme", &self.theme())
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::TabBar;
    use stranger_themes_core::{EventLoop, FailurePolicy};
    use stranger_themes_style::{BarStyle, Palette};

    fn setup() -> (EventLoop, ThemeChannel, PlainSurface) {
        let event_loop = EventLoop::new();
        let channel = ThemeChannel::new(event_loop.handle(), FailurePolicy::Assert);
        let tab_bar = Arc::new(Mutex::new(TabBar::new(["View"])));
        let surface = PlainSurface::new(&channel, tab_bar);
        (event_loop, channel, surface)
    }

    #[test]
    fn test_light_rendering() {
        let (_, _, mut surface) = setup();
        surface.activate().unwrap();

        assert_eq!(surface.render_count(), 1);
        assert_eq!(surface.image_view().tint_color, Palette::MULBERRY_RED);
        assert_eq!(surface.background_color(), Palette::WHITE);
        let button = surface.button(UserAction::SelectDark);
        assert_eq!(button.title, "Dark");
        assert_eq!(button.border_color, Palette::BLACK);
        assert_eq!(button.title_colors.highlighted, Palette::STEEL_GRAY);
        assert_eq!(surface.navigation_bar().bar_style, BarStyle::Default);
    }

    #[test]
    fn test_perform_round_trip() {
        let (event_loop, _, mut surface) = setup();
        surface.activate().unwrap();

        surface.perform(UserAction::SelectDark).unwrap();
        assert_eq!(surface.theme(), Theme::Light);
        event_loop.run_until_idle().unwrap();

        assert_eq!(surface.theme(), Theme::Dark);
        assert_eq!(surface.render_count(), 2);
        assert_eq!(surface.background_color(), Palette::BLACK);
        assert_eq!(surface.button(UserAction::SelectLight).border_color, Palette::WHITE);
        assert_eq!(surface.image_view().tint_color, Palette::MULBERRY_RED);

        surface.perform(UserAction::SelectDark).unwrap();
        event_loop.run_until_idle().unwrap();
        assert_eq!(surface.render_count(), 2);
    }

    #[test]
    fn test_choices() {
        assert_eq!(
            PlainSurface::choice_for(IndexPath::new(0, 0)),
            Ok(UserAction::SelectLight)
        );
        assert_eq!(
            PlainSurface::choice_for(IndexPath::new(0, 1)),
            Ok(UserAction::SelectDark)
        );
        let path = IndexPath::new(0, 5);
        assert_eq!(
            PlainSurface::choice_for(path),
            Err(SurfaceError::PositionOutOfRange { path })
        );
    }

    #[test]
    fn test_inactive_surface_does_not_publish() {
        let (event_loop, channel, surface) = setup();
        assert!(surface.perform(UserAction::SelectDark).is_err());
        assert_eq!(event_loop.pending_count(), 0);
        assert_eq!(channel.subscriber_count(), 0);
    }
}
