use crate::application::ports::time::Clock;
use chrono::{DateTime, SubsecRound, Utc};

#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    /// Microsecond precision, matching what the store keeps.
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}
