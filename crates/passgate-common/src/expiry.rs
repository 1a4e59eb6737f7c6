//! Expiry arithmetic applied to a recovered credential.
//!
//! Both helpers are pure: the caller supplies the current instant.
//! Usage counters and revocation are bookkept by the caller.

/// Whether a credential expiring at `expiry_time_ms` is usable at `now_ms`.
///
/// The instant of expiry itself is already expired.
pub fn is_valid(expiry_time_ms: i64, now_ms: i64) -> bool {
    expiry_time_ms > now_ms
}

/// Whole seconds left until `expiry_time_ms`, never negative.
pub fn remaining_seconds(expiry_time_ms: i64, now_ms: i64) -> u64 {
    let remaining_ms = expiry_time_ms.saturating_sub(now_ms);
    if remaining_ms <= 0 {
        0
    } else {
        (remaining_ms / 1000) as u64
    }
}
