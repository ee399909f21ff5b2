//! Prelude module for Stranger Themes.
//!
//! ```ignore
//! use stranger_themes::prelude::*;
//! ```

pub use crate::cell::{CellDescription, CellStyle, IndexPath, ReusableCell};
pub use crate::provider::ContentProvider;
pub use crate::surface::{GridSurface, ListSurface, PlainSurface, SurfaceKind, UserAction};
pub use crate::{AppConfig, SurfaceError, TabContainer};

pub use stranger_themes_core::{
    ColorUpdatable, EventLoop, FailurePolicy, Theme, ThemeChannel, ThemeObservation, ThemeObserver,
    ThemePublisher,
};
pub use stranger_themes_style::{BarStyle, Color, ColorPalette, Palette};
