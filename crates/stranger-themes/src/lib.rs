//! Stranger Themes - light/dark theme propagation across display surfaces.
//!
//! This is the application crate. It builds the three display surfaces on
//! top of the theme channel from [`stranger_themes_core`] and the palette from
//! [`stranger_themes_style`]:
//!
//! - [`PlainSurface`]: a tinted logo with "Light" and "Dark" buttons
//! - [`ListSurface`]: two rows, one per theme
//! - [`GridSurface`]: ten character tiles, each publishing a theme
//!
//! A [`TabContainer`] hosts all three behind one shared tab bar.
//!
//! # Example
//!
//! ```
//! use stranger_themes::prelude::*;
//!
//! let event_loop = EventLoop::new();
//! let channel = ThemeChannel::new(event_loop.handle(), FailurePolicy::Assert);
//! let container = TabContainer::new(&channel, Theme::Light).unwrap();
//!
//! container.grid().select(IndexPath::new(0, 0)).unwrap();
//! event_loop.run_until_idle().unwrap();
//!
//! assert_eq!(container.list().theme(), Theme::Dark);
//! assert_eq!(container.plain().theme(), Theme::Dark);
//! ```

pub mod cell;
pub mod config;
mod error;
pub mod prelude;
pub mod provider;
pub mod script;
pub mod surface;
mod tabs;
pub mod widget;

pub use config::{AppConfig, ConfigError};
pub use error::{Result, SurfaceError};
pub use surface::{GridSurface, ListSurface, PlainSurface, SurfaceKind, UserAction};
pub use tabs::TabContainer;

pub use stranger_themes_core;
pub use stranger_themes_style;

/// Target names for log filtering.
pub mod targets {
    /// Surface, cell and provider target.
    pub const SURFACE: &str = "stranger_themes::surface";

    pub use stranger_themes_core::logging::targets::{CHANNEL, EVENT_LOOP, OBSERVER};
}

static_assertions::assert_impl_all!(TabContainer: Send);
static_assertions::assert_impl_all!(SurfaceError: Send, Sync);
