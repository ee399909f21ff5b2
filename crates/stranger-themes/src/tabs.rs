//! The tab container hosting all three surfaces.

use std::sync::Arc;

use parking_lot::Mutex;
use stranger_themes_core::{Theme, ThemeChannel};

use crate::cell::IndexPath;
use crate::error::Result;
use crate::script::ScriptStep;
use crate::surface::{GridSurface, ListSurface, PlainSurface, SurfaceKind};
use crate::targets;
use crate::widget::{SharedTabBar, TabBar};

/// One shared tab bar and the three surfaces behind it.
///
/// Every surface is active for the container's whole lifetime.
#[derive(Debug)]
pub struct TabContainer {
    tab_bar: SharedTabBar,
    plain: PlainSurface,
    list: ListSurface,
    grid: GridSurface,
}

impl TabContainer {
    /// Build and activate all surfaces on `channel`, cached at `theme`.
    pub fn new(channel: &ThemeChannel, theme: Theme) -> Result<Self> {
        let tab_bar: SharedTabBar = Arc::new(Mutex::new(TabBar::new(
            SurfaceKind::ALL.map(SurfaceKind::tab_title),
        )));

        let mut plain = PlainSurface::with_theme(channel, tab_bar.clone(), theme);
        let mut list = ListSurface::with_theme(channel, tab_bar.clone(), theme);
        let mut grid = GridSurface::with_theme(channel, tab_bar.clone(), theme);
        plain.activate()?;
        list.activate()?;
        grid.activate()?;

        tracing::info!(target: targets::SURFACE, %theme, "tab container ready");
        Ok(Self {
            tab_bar,
            plain,
            list,
            grid,
        })
    }

    pub fn plain(&self) -> &PlainSurface {
        &self.plain
    }

    pub fn list(&self) -> &ListSurface {
        &self.list
    }

    pub fn grid(&self) -> &GridSurface {
        &self.grid
    }

    pub fn tab_bar(&self) -> TabBar {
        self.tab_bar.lock().clone()
    }

    /// The cached theme of each surface.
    pub fn themes(&self) -> [(SurfaceKind, Theme); 3] {
        [
            (SurfaceKind::Plain, self.plain.theme()),
            (SurfaceKind::List, self.list.theme()),
            (SurfaceKind::Grid, self.grid.theme()),
        ]
    }

    /// Perform a scripted user action. Delivery happens on the event loop.
    pub fn run_step(&self, step: ScriptStep) -> Result<()> {
        tracing::debug!(target: targets::SURFACE, %step, "running step");
        match step {
            ScriptStep::Plain(action) => self.plain.perform(action),
            ScriptStep::List(row) => self.list.select(IndexPath::new(0, row)),
            ScriptStep::Grid(item) => self.grid.select(IndexPath::new(0, item)),
        }
    }
}

impl Drop for TabContainer {
    fn drop(&mut self) {
        self.plain.deactivate();
        self.list.deactivate();
        self.grid.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::UserAction;
    use stranger_themes_core::{EventLoop, FailurePolicy};
    use stranger_themes_style::BarStyle;

    #[test]
    fn test_container_lifecycle() {
        let event_loop = EventLoop::new();
        let channel = ThemeChannel::new(event_loop.handle(), FailurePolicy::Assert);

        let container = TabContainer::new(&channel, Theme::Light).unwrap();
        assert_eq!(channel.subscriber_count(), 3);
        assert_eq!(container.tab_bar().items, vec!["View", "Table", "Collection"]);

        drop(container);
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn test_steps_reach_every_surface() {
        let event_loop = EventLoop::new();
        let channel = ThemeChannel::new(event_loop.handle(), FailurePolicy::Assert);
        let container = TabContainer::new(&channel, Theme::Light).unwrap();

        container.run_step(ScriptStep::Plain(UserAction::SelectDark)).unwrap();
        event_loop.run_until_idle().unwrap();
        assert!(container.themes().iter().all(|(_, theme)| *theme == Theme::Dark));
        assert_eq!(container.tab_bar().bar_style, BarStyle::Black);

        container.run_step(ScriptStep::Grid(3)).unwrap();
        event_loop.run_until_idle().unwrap();
        assert!(container.themes().iter().all(|(_, theme)| *theme == Theme::Light));

        container.run_step(ScriptStep::List(1)).unwrap();
        event_loop.run_until_idle().unwrap();
        assert_eq!(container.list().theme(), Theme::Dark);
    }

    #[test]
    fn test_out_of_range_step() {
        let event_loop = EventLoop::new();
        let channel = ThemeChannel::new(event_loop.handle(), FailurePolicy::Assert);
        let container = TabContainer::new(&channel, Theme::Dark).unwrap();

        assert!(container.run_step(ScriptStep::Grid(10)).is_err());
        assert!(event_loop.is_idle());
    }
}
