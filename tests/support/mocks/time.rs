// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

/// 全テスト共通の基準時刻
static EPOCH: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-10-03T12:00:00-03:00")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *EPOCH
}

/// 基準時刻から `minutes` 分後
pub fn minutes_after(minutes: i64) -> DateTime<Utc> {
    *EPOCH + Duration::minutes(minutes)
}
