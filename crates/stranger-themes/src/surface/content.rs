//! List and grid surfaces backed by a [`ContentProvider`].

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use stranger_themes_core::{
    ColorUpdatable, FailurePolicy, Theme, ThemeChannel, ThemeObservation, ThemeObserver,
    ThemePublisher,
};
use stranger_themes_style::{Color, ColorPalette};

use super::Chrome;
use crate::cell::{IndexPath, ReusableCell};
use crate::error::{Result, SurfaceError};
use crate::provider::{ContentProvider, GridProvider, ListProvider};
use crate::targets;
use crate::widget::{NavigationBar, SharedTabBar};

/// The "Table View Demo" surface.
pub type ListSurface = ContentSurface<ListProvider>;

/// The "Collection View Demo" surface.
pub type GridSurface = ContentSurface<GridProvider>;

/// Mutable state of a content surface, shared with its channel handler.
struct ContentState<P: ContentProvider> {
    theme: Theme,
    policy: FailurePolicy,
    provider: P,
    cells: BTreeMap<IndexPath, P::Cell>,
    chrome: Chrome,
    background_color: Color,
    renders: usize,
    reloads: usize,
}

impl<P: ContentProvider> ContentState<P> {
    /// Reconfigure every visible cell from the provider under the cached theme.
    fn reload(&mut self) {
        let theme = self.theme;
        for path in self.provider.index_paths() {
            let provider = &self.provider;
            let cell = self
                .cells
                .entry(path)
                .or_insert_with(|| provider.dequeue_cell());
            configure_cell(provider, cell, path, theme, self.policy);
        }
        self.reloads += 1;
        tracing::debug!(
            target: targets::SURFACE,
            title = P::TITLE,
            %theme,
            cells = self.cells.len(),
            "content reloaded"
        );
    }
}

/// Configure `cell` with the content at `path`.
///
/// Failures go to `policy`; when it degrades, the cell is left showing the
/// provider's placeholder.
#[track_caller]
fn configure_cell<P: ContentProvider>(
    provider: &P,
    cell: &mut P::Cell,
    path: IndexPath,
    theme: Theme,
    policy: FailurePolicy,
) {
    let description = provider.describe_or_placeholder(path, theme, policy);
    let Err(err) = cell.configure(description) else {
        return;
    };
    tracing::error!(target: targets::SURFACE, %path, %err, "failed to configure cell");
    policy.violation(&err.to_string());
    if let Err(err) = cell.configure(provider.placeholder(theme)) {
        tracing::error!(target: targets::SURFACE, %path, %err, "placeholder does not fit cell");
    }
}

impl<P: ContentProvider> ColorUpdatable for ContentState<P> {
    fn theme(&self) -> Theme {
        self.theme
    }

    fn store_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn apply_colors(&mut self, theme: Theme) {
        let palette = ColorPalette::for_theme(theme);
        self.background_color = palette.content_background;
        self.chrome.apply_theme(theme);
        self.renders += 1;
        tracing::trace!(
            target: targets::SURFACE,
            title = P::TITLE,
            %theme,
            background = %self.background_color,
            "colors applied"
        );
    }
}

impl<P: ContentProvider> ThemeObserver for ContentState<P> {
    fn did_change_theme(&mut self, theme: Theme) {
        if self.set_theme(theme) {
            self.reload();
        }
    }
}

/// A surface showing a fixed table of cells from `P`.
///
/// Inactive when created. [`activate`](Self::activate) subscribes to the
/// theme channel and renders the content under the cached theme; dropping
/// the surface or calling [`deactivate`](Self::deactivate) unsubscribes.
pub struct ContentSurface<P: ContentProvider> {
    state: Arc<Mutex<ContentState<P>>>,
    observation: ThemeObservation,
}

impl<P: ContentProvider> ContentSurface<P> {
    /// Create an inactive surface cached at [`Theme::Light`].
    pub fn new(channel: &ThemeChannel, tab_bar: SharedTabBar) -> Self {
        Self::with_theme(channel, tab_bar, Theme::Light)
    }

    /// Create an inactive surface cached at `theme`.
    pub fn with_theme(channel: &ThemeChannel, tab_bar: SharedTabBar, theme: Theme) -> Self {
        let provider = P::build(ThemePublisher::from_channel(channel));
        let state = ContentState {
            theme,
            policy: channel.policy(),
            provider,
            cells: BTreeMap::new(),
            chrome: Chrome::new(P::TITLE, tab_bar),
            background_color: Color::TRANSPARENT,
            renders: 0,
            reloads: 0,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            observation: ThemeObservation::new(channel.clone()),
        }
    }

    /// Navigation title.
    pub fn title(&self) -> &'static str {
        P::TITLE
    }

    /// Subscribe to theme changes and render the initial content.
    #[tracing::instrument(target = "stranger_themes::surface", skip(self), fields(title = P::TITLE))]
    pub fn activate(&mut self) -> Result<()> {
        self.observation.activate(self.state.clone())?;
        let mut state = self.state.lock();
        let theme = state.theme;
        state.apply_colors(theme);
        state.reload();
        tracing::debug!(target: targets::SURFACE, %theme, "surface activated");
        Ok(())
    }

    /// Unsubscribe. Returns `false` when the surface was not active.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.observation.deactivate();
        if was_active {
            tracing::debug!(target: targets::SURFACE, title = P::TITLE, "surface deactivated");
        }
        was_active
    }

    pub fn is_active(&self) -> bool {
        self.observation.is_active()
    }

    /// The cached theme.
    pub fn theme(&self) -> Theme {
        self.state.lock().theme
    }

    /// How many times the surface has applied colors.
    pub fn render_count(&self) -> usize {
        self.state.lock().renders
    }

    /// How many times the content has been rebuilt from the provider.
    pub fn reload_count(&self) -> usize {
        self.state.lock().reloads
    }

    pub fn background_color(&self) -> Color {
        self.state.lock().background_color
    }

    pub fn navigation_bar(&self) -> NavigationBar {
        self.state.lock().chrome.navigation_bar.clone()
    }

    /// Number of items in the table.
    pub fn item_count(&self) -> usize {
        self.state.lock().provider.index_paths().len()
    }

    /// The visible cell at `path`, if the surface has rendered one there.
    pub fn visible_cell(&self, path: IndexPath) -> Option<P::Cell> {
        self.state.lock().cells.get(&path).cloned()
    }

    /// A freshly configured cell for `path` under the cached theme.
    ///
    /// A position outside the table is reported to the channel's
    /// [`FailurePolicy`]: it panics under `Assert` and yields a placeholder
    /// cell under `Degrade`.
    #[track_caller]
    pub fn cell_for(&self, path: IndexPath) -> P::Cell {
        let state = self.state.lock();
        let mut cell = state.provider.dequeue_cell();
        configure_cell(&state.provider, &mut cell, path, state.theme, state.policy);
        cell
    }

    /// Like [`cell_for`](Self::cell_for), returning the error instead.
    pub fn try_cell_for(&self, path: IndexPath) -> Result<P::Cell> {
        let state = self.state.lock();
        let description = state.provider.describe(path, state.theme)?;
        let mut cell = state.provider.dequeue_cell();
        cell.configure(description)?;
        Ok(cell)
    }

    /// Run the tap handler of the visible cell at `path`.
    ///
    /// The surface's own theme is untouched until the published event is
    /// delivered back to it.
    pub fn select(&self, path: IndexPath) -> Result<()> {
        if !self.is_active() {
            return Err(SurfaceError::Inactive { title: P::TITLE });
        }
        let handler = {
            let state = self.state.lock();
            let cell = state
                .cells
                .get(&path)
                .ok_or(SurfaceError::out_of_range(path))?;
            cell.tap_handler()
        };
        match handler {
            Some(handler) => {
                tracing::debug!(target: targets::SURFACE, title = P::TITLE, %path, "cell selected");
                handler();
            }
            None => {
                tracing::debug!(target: targets::SURFACE, title = P::TITLE, %path, "cell has no tap handler");
            }
        }
        Ok(())
    }
}

impl<P: ContentProvider> std::fmt::Debug for ContentSurface<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentSurface")
            .field("title", &P::TITLE)
            .field("theme", &self.theme())
            .field("active", &self.is_active())
            .finish()
    }
}
