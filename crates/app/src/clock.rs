//! System clock backed by `chrono`.

use chrono::{Local, NaiveTime, Utc};

use crate::ports::Clock;

/// [`Clock`] reading the host's real time.
///
/// On `wasm32` this relies on chrono's `wasmbind` feature, which reads the
/// browser's `Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn wall_time(&self) -> NaiveTime {
        Local::now().time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_current_epoch_millis() {
        let before = Utc::now().timestamp_millis();
        let ms = SystemClock.epoch_millis();
        let after = Utc::now().timestamp_millis();
        assert!(ms >= before);
        assert!(ms <= after);
    }
}
