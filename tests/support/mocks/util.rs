// tests/support/mocks/util.rs
use blog_core::application::ports::{
    time::Clock,
    util::RandomSource,
};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Clone)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// 呼び出しごとに 1 分進む時計
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::minutes_after(self.ticks.fetch_add(1, Ordering::SeqCst))
    }
}

/// 常に同じ文字で埋めたサフィックスを返す
#[derive(Clone)]
pub struct FixedRandom(pub char);

impl RandomSource for FixedRandom {
    fn alphanumeric(&self, length: usize) -> String {
        std::iter::repeat_n(self.0, length).collect()
    }
}
