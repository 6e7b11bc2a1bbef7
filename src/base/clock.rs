//! Time source used for expiration math.

use time::OffsetDateTime;

/// Returns the current instant. Swappable so expiry can be tested deterministically.
pub type Clock = fn() -> OffsetDateTime;

/// The wall clock.
pub fn system_clock() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
