//! Time and timestamp helpers.

use chrono::{DateTime, SubsecRound, Utc};

/// UTC timestamp used for `created_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Round a timestamp to the nearest whole second.
#[must_use]
pub fn round_to_second(ts: Timestamp) -> Timestamp {
    ts.round_subsecs(0)
}
