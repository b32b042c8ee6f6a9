//! Time helpers shared across host contracts and adapters.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static LAST_LAUNCH_TIMESTAMP_MS: Cell<u64> = const { Cell::new(0) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Returns a strictly increasing unix millisecond timestamp for window launches.
///
/// Two launches inside the same millisecond still receive distinct values, so window ids built
/// from `<app>-<timestamp>` never collide.
pub fn next_launch_timestamp_ms() -> u64 {
    let now = unix_time_ms_now();
    LAST_LAUNCH_TIMESTAMP_MS.with(|last| {
        let next = now.max(last.get().saturating_add(1));
        last.set(next);
        next
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_timestamps_strictly_increase() {
        let first = next_launch_timestamp_ms();
        let second = next_launch_timestamp_ms();
        let third = next_launch_timestamp_ms();
        assert!(first < second && second < third);
    }
}
