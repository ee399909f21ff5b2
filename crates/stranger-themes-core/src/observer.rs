//! The theme-observer capability.
//!
//! A display surface keeps its mutable state behind `Arc<Mutex<S>>`, where
//! `S` implements [`ThemeObserver`]. It then embeds a [`ThemeObservation`]
//! and calls [`activate`](ThemeObservation::activate) when it comes alive.
//! The observation owns the channel registration, so dropping the surface
//! (or calling [`deactivate`](ThemeObservation::deactivate)) always removes
//! it, whichever path tears the surface down.
//!
//! The channel holds a clone of the state `Arc`, never the surface or the
//! channel itself, so there is no ownership cycle.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::channel::{SubscriberId, Subscription};
use crate::color::ColorUpdatable;
use crate::error::Result;
use crate::event::{ThemeChangeEvent, ThemeChannel};
use crate::logging::targets;
use crate::policy::FailurePolicy;
use crate::theme::Theme;

/// Reaction of a color-updatable object to a delivered theme.
///
/// [`did_change_theme`](Self::did_change_theme) is only called with a theme
/// that differs from [`ColorUpdatable::theme`]. The default applies it with
/// [`ColorUpdatable::set_theme`]; surfaces with derived content override it to
/// rebuild that content as well.
pub trait ThemeObserver: ColorUpdatable {
    /// Called with a newly delivered theme that differs from the cached one.
    fn did_change_theme(&mut self, theme: Theme) {
        self.set_theme(theme);
    }
}

/// Forward `event` to `target` if it carries a different theme.
///
/// Returns `true` when the target was told about a change.
pub fn forward_theme_change<S>(target: &mut S, event: &ThemeChangeEvent, policy: FailurePolicy) -> bool
where
    S: ThemeObserver + ?Sized,
{
    let Some(theme) = event.checked_theme(policy) else {
        return false;
    };
    if target.theme() == theme {
        tracing::trace!(target: targets::OBSERVER, %theme, "theme unchanged, ignoring");
        return false;
    }
    tracing::debug!(target: targets::OBSERVER, from = %target.theme(), to = %theme, "theme changed");
    target.did_change_theme(theme);
    true
}

/// A surface's subscription to the theme channel.
///
/// Holds at most one registration at a time; a second
/// [`activate`](Self::activate) while active fails with
/// [`CoreError::AlreadySubscribed`](crate::CoreError::AlreadySubscribed).
pub struct ThemeObservation {
    channel: ThemeChannel,
    owner: SubscriberId,
    subscription: Option<Subscription<ThemeChangeEvent>>,
}

impl ThemeObservation {
    /// Create an inactive observation on `channel` with a fresh identity.
    pub fn new(channel: ThemeChannel) -> Self {
        Self {
            channel,
            owner: SubscriberId::next(),
            subscription: None,
        }
    }

    /// The identity used on the channel.
    pub fn owner(&self) -> SubscriberId {
        self.owner
    }

    /// The observed channel.
    pub fn channel(&self) -> &ThemeChannel {
        &self.channel
    }

    /// Whether a registration is currently held.
    pub fn is_active(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Subscribe `target` to theme changes.
    pub fn activate<S>(&mut self, target: Arc<Mutex<S>>) -> Result<()>
    where
        S: ThemeObserver + Send + 'static,
    {
        let policy = self.channel.policy();
        let subscription = self.channel.subscribe_scoped(self.owner, move |event| {
            forward_theme_change(&mut *target.lock(), event, policy);
        })?;
        self.subscription = Some(subscription);
        Ok(())
    }

    /// Drop the registration. Returns `false` when none was held.
    pub fn deactivate(&mut self) -> bool {
        match self.subscription.take() {
            Some(subscription) => {
                drop(subscription);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for ThemeObservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeObservation")
            .field("owner", &self.owner)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoreError, EventLoop};

    #[derive(Default)]
    struct Panel {
        theme: Theme,
        applied: Vec<Theme>,
        reloads: usize,
    }

    impl ColorUpdatable for Panel {
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

    impl ThemeObserver for Panel {
        fn did_change_theme(&mut self, theme: Theme) {
            if self.set_theme(theme) {
                self.reloads += 1;
            }
        }
    }

    fn setup() -> (EventLoop, ThemeChannel) {
        let event_loop = EventLoop::new();
        let channel = ThemeChannel::new(event_loop.handle(), FailurePolicy::Degrade);
        (event_loop, channel)
    }

    #[test]
    fn test_change_is_forwarded() {
        let (event_loop, channel) = setup();
        let panel = Arc::new(Mutex::new(Panel::default()));
        let mut observation = ThemeObservation::new(channel.clone());
        observation.activate(panel.clone()).unwrap();

        channel.publish_theme(Theme::Dark);
        event_loop.run_until_idle().unwrap();

        let panel = panel.lock();
        assert_eq!(panel.theme, Theme::Dark);
        assert_eq!(panel.applied, vec![Theme::Dark]);
        assert_eq!(panel.reloads, 1);
    }

    #[test]
    fn test_same_theme_is_ignored() {
        let (event_loop, channel) = setup();
        let panel = Arc::new(Mutex::new(Panel {
            theme: Theme::Dark,
            ..Default::default()
        }));
        let mut observation = ThemeObservation::new(channel.clone());
        observation.activate(panel.clone()).unwrap();

        channel.publish_theme(Theme::Dark);
        event_loop.run_until_idle().unwrap();

        assert!(panel.lock().applied.is_empty());
        assert_eq!(panel.lock().reloads, 0);
    }

    #[test]
    fn test_double_activation_rejected() {
        let (_, channel) = setup();
        let panel = Arc::new(Mutex::new(Panel::default()));
        let mut observation = ThemeObservation::new(channel.clone());

        observation.activate(panel.clone()).unwrap();
        let err = observation.activate(panel).unwrap_err();
        assert_eq!(
            err,
            CoreError::AlreadySubscribed {
                owner: observation.owner()
            }
        );
        assert_eq!(channel.subscriber_count(), 1);
        assert!(observation.is_active());
    }

    #[test]
    fn test_deactivate_and_drop_unsubscribe() {
        let (event_loop, channel) = setup();
        let panel = Arc::new(Mutex::new(Panel::default()));

        let mut observation = ThemeObservation::new(channel.clone());
        observation.activate(panel.clone()).unwrap();
        assert!(observation.deactivate());
        assert!(!observation.deactivate());
        assert_eq!(channel.subscriber_count(), 0);

        observation.activate(panel.clone()).unwrap();
        drop(observation);
        assert_eq!(channel.subscriber_count(), 0);

        channel.publish_theme(Theme::Dark);
        event_loop.run_until_idle().unwrap();
        assert!(panel.lock().applied.is_empty());
    }

    #[test]
    fn test_wrong_topic_is_ignored_when_degrading() {
        let (event_loop, channel) = setup();
        let panel = Arc::new(Mutex::new(Panel::default()));
        let mut observation = ThemeObservation::new(channel.clone());
        observation.activate(panel.clone()).unwrap();

        channel.publish(ThemeChangeEvent::with_topic("font-changed", Theme::Dark));
        event_loop.run_until_idle().unwrap();

        assert_eq!(panel.lock().theme, Theme::Light);
    }
}
