//! Current time for date-relative views (overdue milestones, upcoming meetings).

use time::OffsetDateTime;

/// Now in UTC. In the browser this reads `Date.now()`; `time` has no wasm
/// clock of its own.
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        let millis = js_sys::Date::now();
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (millis as i128) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}
