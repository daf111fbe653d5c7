//! Wall-clock formatting for log lines.

use chrono::NaiveTime;

/// Label shown in front of each log line (`HH:MM:SS`).
#[must_use]
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_zero_pad_clock_label() {
        let time = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
        assert_eq!(clock_label(time), "07:05:09");
    }

    #[test]
    fn should_use_24_hour_clock() {
        let time = NaiveTime::from_hms_milli_opt(23, 59, 58, 999).unwrap();
        assert_eq!(clock_label(time), "23:59:58");
    }
}
