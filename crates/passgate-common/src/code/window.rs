//! Time-window rotating codes.
//!
//! A code is derived from a secret base code and the index of the time window
//! containing the current instant. Producer and verifier only share the base
//! code and a clock; validity is recomputed, never stored.
//!
//! The verifier accepts the current and the immediately preceding window, so a
//! code is replayable for at most two windows. There is no forward tolerance.

/// Length of a rotating code.
pub const CODE_LEN: usize = 16;

const MS_PER_MINUTE: i64 = 60_000;

/// The index of the window containing `now_ms`.
///
/// A non-positive `window_minutes` collapses every instant into window `0`.
pub fn window_index(now_ms: i64, window_minutes: i64) -> i64 {
    if window_minutes <= 0 {
        return 0;
    }

    now_ms.div_euclid(window_minutes.saturating_mul(MS_PER_MINUTE))
}

/// Derive the code of a specific window.
pub fn code_for_window(base_code: &str, window_index: i64) -> String {
    super::digest_prefix(&format!("{base_code}{window_index}"), CODE_LEN)
}

/// Generate the code for the window containing `now_ms`.
pub fn generate(base_code: &str, window_minutes: i64, now_ms: i64) -> String {
    code_for_window(base_code, window_index(now_ms, window_minutes))
}

/// Validate a rotating code against the current and the previous window.
pub fn validate(code: &str, base_code: &str, window_minutes: i64, now_ms: i64) -> bool {
    if code.len() != CODE_LEN {
        return false;
    }

    let current = window_index(now_ms, window_minutes);
    if code == code_for_window(base_code, current) {
        return true;
    }

    // a degenerate window has no predecessor
    window_minutes > 0 && code == code_for_window(base_code, current - 1)
}
