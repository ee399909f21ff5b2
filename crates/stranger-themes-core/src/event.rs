//! The theme-changed event and the channel that carries it.

use std::fmt;
use std::sync::Arc;

use crate::channel::Channel;
use crate::logging::targets;
use crate::policy::FailurePolicy;
use crate::theme::Theme;

/// Topic name carried by every theme-change event.
pub const THEME_CHANGED_TOPIC: &str = "theme-changed";

/// An ephemeral notification that the user picked a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChangeEvent {
    /// Always [`THEME_CHANGED_TOPIC`] for events built with [`ThemeChangeEvent::new`].
    pub topic: &'static str,
    /// The chosen theme.
    pub theme: Theme,
}

impl ThemeChangeEvent {
    /// Create a theme-changed event.
    pub fn new(theme: Theme) -> Self {
        Self {
            topic: THEME_CHANGED_TOPIC,
            theme,
        }
    }

    /// Create an event on an arbitrary topic.
    pub fn with_topic(topic: &'static str, theme: Theme) -> Self {
        Self { topic, theme }
    }

    /// Extract the theme, checking the topic first.
    ///
    /// An event on any other topic is a programming error: it is logged and
    /// reported to `policy`, and `None` is returned when the policy degrades.
    #[track_caller]
    pub fn checked_theme(&self, policy: FailurePolicy) -> Option<Theme> {
        if self.topic == THEME_CHANGED_TOPIC {
            return Some(self.theme);
        }
        tracing::error!(
            target: targets::OBSERVER,
            topic = self.topic,
            "unexpected topic on theme channel"
        );
        policy.violation(&format!("unexpected topic '{}' on theme channel", self.topic));
        None
    }
}

/// The channel every display surface listens on.
pub type ThemeChannel = Channel<ThemeChangeEvent>;

impl Channel<ThemeChangeEvent> {
    /// Publish a theme-changed event for `theme`.
    pub fn publish_theme(&self, theme: Theme) -> usize {
        tracing::debug!(target: targets::CHANNEL, %theme, "publishing theme change");
        self.publish(ThemeChangeEvent::new(theme))
    }
}

/// A cloneable "publish a theme" function.
///
/// Handed to content providers at construction so their tap handlers can
/// publish without holding a reference back to the surface that owns them.
#[derive(Clone)]
pub struct ThemePublisher {
    publish: Arc<dyn Fn(Theme) + Send + Sync>,
}

impl ThemePublisher {
    /// Publish onto `channel`.
    pub fn from_channel(channel: &ThemeChannel) -> Self {
        let channel = channel.clone();
        Self::from_fn(move |theme| {
            channel.publish_theme(theme);
        })
    }

    /// Publish through an arbitrary function.
    pub fn from_fn<F>(publish: F) -> Self
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        Self {
            publish: Arc::new(publish),
        }
    }

    /// Publish `theme`.
    pub fn publish(&self, theme: Theme) {
        (self.publish)(theme);
    }
}

impl fmt::Debug for ThemePublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePublisher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventLoop, SubscriberId};
    use parking_lot::Mutex;

    #[test]
    fn test_checked_theme() {
        let event = ThemeChangeEvent::new(Theme::Dark);
        assert_eq!(event.checked_theme(FailurePolicy::Assert), Some(Theme::Dark));
    }

    #[test]
    fn test_wrong_topic_degrades() {
        let event = ThemeChangeEvent::with_topic("font-changed", Theme::Dark);
        assert_eq!(event.checked_theme(FailurePolicy::Degrade), None);
    }

    #[test]
    #[should_panic(expected = "unexpected topic 'font-changed'")]
    fn test_wrong_topic_asserts() {
        let event = ThemeChangeEvent::with_topic("font-changed", Theme::Dark);
        let _ = event.checked_theme(FailurePolicy::Assert);
    }

    #[test]
    fn test_publisher_from_channel() {
        let event_loop = EventLoop::new();
        let channel = ThemeChannel::new(event_loop.handle(), FailurePolicy::Degrade);
        let received = Arc::new(Mutex::new(Vec::new()));

        let sink = received.clone();
        channel
            .subscribe(SubscriberId::next(), move |event: &ThemeChangeEvent| {
                sink.lock().push(*event)
            })
            .unwrap();

        let publisher = ThemePublisher::from_channel(&channel);
        publisher.publish(Theme::Dark);
        event_loop.run_until_idle().unwrap();

        assert_eq!(*received.lock(), vec![ThemeChangeEvent::new(Theme::Dark)]);
    }
}
