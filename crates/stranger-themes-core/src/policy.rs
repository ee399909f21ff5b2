//! How programming errors detected at runtime are surfaced.

use serde::{Deserialize, Serialize};

/// What to do when a caller bug is detected on the event-delivery path.
///
/// Covers panicking subscribers, events on an unexpected topic, out-of-range
/// content positions and missing child widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Panic with the diagnostic.
    Assert,
    /// Log the diagnostic and continue with a harmless fallback.
    Degrade,
}

impl FailurePolicy {
    /// `Assert` in debug builds, `Degrade` in release builds.
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Assert
        } else {
            Self::Degrade
        }
    }

    /// Whether this policy panics on violations.
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Assert)
    }

    /// Report a violation. Panics under [`FailurePolicy::Assert`].
    ///
    /// Callers are expected to have logged the violation already.
    #[track_caller]
    pub fn violation(self, message: &str) {
        if self.is_strict() {
            panic!("{message}");
        }
    }
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrade_does_not_panic() {
        FailurePolicy::Degrade.violation("ignored");
    }

    #[test]
    #[should_panic(expected = "loud")]
    fn test_assert_panics() {
        FailurePolicy::Assert.violation("loud");
    }

    #[test]
    fn test_default_follows_build() {
        assert_eq!(
            FailurePolicy::default().is_strict(),
            cfg!(debug_assertions)
        );
    }
}
