//! Logging facilities for Stranger Themes.
//!
//! Stranger Themes uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("stranger_themes_core::channel=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "stranger_themes_core";
    /// Event loop target.
    pub const EVENT_LOOP: &str = "stranger_themes_core::event_loop";
    /// Broadcast channel target.
    pub const CHANNEL: &str = "stranger_themes_core::channel";
    /// Theme observer target.
    pub const OBSERVER: &str = "stranger_themes_core::observer";
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_share_crate_prefix() {
        for target in [targets::EVENT_LOOP, targets::CHANNEL, targets::OBSERVER] {
            assert!(target.starts_with(targets::CORE));
        }
    }
}
