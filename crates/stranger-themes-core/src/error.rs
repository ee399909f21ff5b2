//! Error types for Stranger Themes core operations.

use crate::channel::SubscriberId;

/// The main error type for core operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The subscriber already holds a subscription on the channel.
    #[error("Subscriber {owner:?} is already subscribed to this channel")]
    AlreadySubscribed {
        /// The subscriber that attempted a second subscription.
        owner: SubscriberId,
    },

    /// The event loop kept producing work past its configured turn limit.
    #[error("Event loop still had {pending} pending task(s) after {turns} turns")]
    TurnLimitExceeded {
        /// Number of turns that were run.
        turns: usize,
        /// Tasks still queued when the limit was hit.
        pending: usize,
    },

    /// A theme name could not be parsed.
    #[error("Unknown theme '{0}', expected 'light' or 'dark'")]
    UnknownTheme(String),
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
