//! Core systems for Stranger Themes.
//!
//! This crate provides the theme-change propagation mechanism shared by every
//! display surface:
//!
//! - **Theme**: The two-valued visual mode, [`Theme::Light`] or [`Theme::Dark`]
//! - **Event Loop**: A single-threaded loop that runs deferred work one turn at a time
//! - **Broadcast Channel**: A typed publish/subscribe bus delivering on the loop
//! - **Color-Updatable**: Cache a theme and re-render only on an actual change
//! - **Theme Observer**: Subscribe a surface's state to the theme channel
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use stranger_themes_core::{
//!     ColorUpdatable, EventLoop, FailurePolicy, Theme, ThemeChannel, ThemeObservation,
//!     ThemeObserver,
//! };
//!
//! #[derive(Default)]
//! struct Banner {
//!     theme: Theme,
//!     renders: usize,
//! }
//!
//! impl ColorUpdatable for Banner {
//!     fn theme(&self) -> Theme {
//!         self.theme
//!     }
//!     fn store_theme(&mut self, theme: Theme) {
//!         self.theme = theme;
//!     }
//!     fn apply_colors(&mut self, _theme: Theme) {
//!         self.renders += 1;
//!     }
//! }
//!
//! impl ThemeObserver for Banner {}
//!
//! let event_loop = EventLoop::new();
//! let channel = ThemeChannel::new(event_loop.handle(), FailurePolicy::Degrade);
//!
//! let banner = Arc::new(Mutex::new(Banner::default()));
//! let mut observation = ThemeObservation::new(channel.clone());
//! observation.activate(banner.clone()).unwrap();
//!
//! channel.publish_theme(Theme::Dark);
//! event_loop.run_until_idle().unwrap();
//!
//! assert_eq!(banner.lock().theme, Theme::Dark);
//! assert_eq!(banner.lock().renders, 1);
//! ```

pub mod channel;
mod color;
mod error;
mod event;
pub mod event_loop;
pub mod logging;
pub mod observer;
mod policy;
mod task;
mod theme;

pub use channel::{Channel, SubscriberId, Subscription, SubscriptionKey};
pub use color::ColorUpdatable;
pub use error::{CoreError, Result};
pub use event::{ThemeChangeEvent, ThemeChannel, ThemePublisher, THEME_CHANGED_TOPIC};
pub use event_loop::{EventLoop, LoopHandle, DEFAULT_MAX_TURNS};
pub use observer::{ThemeObservation, ThemeObserver};
pub use policy::FailurePolicy;
pub use task::TaskId;
pub use theme::Theme;
