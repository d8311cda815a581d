use chrono::Utc;

/// milliseconds since the unix epoch, the timestamp format used in persisted state.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// true when more than `ttl_ms` milliseconds separate `since` from `now`.
pub fn elapsed_beyond(since: i64, now: i64, ttl_ms: i64) -> bool {
    now.saturating_sub(since) > ttl_ms
}
