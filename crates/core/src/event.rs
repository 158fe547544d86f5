use chrono::{DateTime, Utc};

/// Current schema version of every stockbook event.
pub const EVENT_VERSION: u32 = 1;

/// Confirmation returned by a successful store mutation.
///
/// Stores never publish these anywhere; the caller displays, logs or forwards
/// them.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted name, `<crate>.<record>.<past-tense verb>`.
    fn event_type(&self) -> &'static str;

    fn version(&self) -> u32 {
        EVENT_VERSION
    }

    fn occurred_at(&self) -> DateTime<Utc>;
}
