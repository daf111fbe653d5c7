//! Status readings reported by the camera server and their on-screen forms.

use serde::{Deserialize, Serialize};

/// The `/status` payload.
///
/// Every field is optional: the server answers `{}` until the first frame
/// arrives, and an absent `min` is the "no data yet" sentinel. Unknown fields
/// such as `timestamp` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusReading {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg: Option<f64>,
}

impl StatusReading {
    /// Build a complete reading.
    #[must_use]
    pub fn new(min: f64, max: f64, avg: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            avg: Some(avg),
        }
    }

    /// The temperatures of the current frame, or `None` while the server has
    /// no data yet.
    ///
    /// A payload carrying `min` without `max` or `avg` cannot fill the
    /// readout either and is treated the same way.
    #[must_use]
    pub fn stats(&self) -> Option<FrameStats> {
        match (self.min, self.max, self.avg) {
            (Some(min), Some(max), Some(avg)) => Some(FrameStats { min, max, avg }),
            _ => None,
        }
    }
}

/// Temperatures of one frame, in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl FrameStats {
    /// Centre of the colour scale.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    /// Two-decimal labels for the `min`/`max`/`avg` readout.
    #[must_use]
    pub fn readout(&self) -> Readout {
        Readout {
            min: fixed(self.min, 2),
            max: fixed(self.max, 2),
            avg: fixed(self.avg, 2),
        }
    }

    /// One-decimal labels for the colour-bar legend.
    #[must_use]
    pub fn legend(&self) -> Legend {
        Legend {
            max: fixed(self.max, 1),
            mid: fixed(self.midpoint(), 1),
            min: fixed(self.min, 1),
        }
    }
}

/// Text of the three numeric readout labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Readout {
    pub min: String,
    pub max: String,
    pub avg: String,
}

/// Text of the three colour-bar legend labels, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Legend {
    pub max: String,
    pub mid: String,
    pub min: String,
}

/// Fraction digits that hold the exact decimal expansion of any `f64`
/// (the smallest subnormal has 1074).
const EXACT_DIGITS: usize = 1100;

/// Render `value` with `digits` fraction digits, rounding ties away from zero
/// as `Number.prototype.toFixed` does.
///
/// Rounding is decided on the exact decimal expansion, so `20.25` becomes
/// `20.3` while `1.005` (stored as `1.00499…`) becomes `1.00`.
fn fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        round_up(&mut kept);
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    // `-0.0 < 0.0` is false, so negative zero prints unsigned.
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().copied().map(char::from));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().copied().map(char::from));
    }
    out
}

/// Add one unit in the last place of an ASCII digit string.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_readout_with_two_decimals() {
        let stats = StatusReading::new(20.123, 35.456, 27.0).stats().unwrap();
        let readout = stats.readout();
        assert_eq!(readout.min, "20.12");
        assert_eq!(readout.max, "35.46");
        assert_eq!(readout.avg, "27.00");
    }

    #[test]
    fn should_format_legend_with_one_decimal_midpoint() {
        let stats = StatusReading::new(20.123, 35.456, 27.0).stats().unwrap();
        let legend = stats.legend();
        assert_eq!(legend.max, "35.5");
        assert_eq!(legend.mid, "27.8");
        assert_eq!(legend.min, "20.1");
    }

    #[test]
    fn should_round_midpoint_ties_up() {
        let stats = FrameStats {
            min: 20.0,
            max: 20.5,
            avg: 27.125,
        };
        assert_eq!(stats.legend().mid, "20.3");
        assert_eq!(stats.readout().avg, "27.13");
    }

    #[test]
    fn should_round_exact_ties_away_from_zero() {
        assert_eq!(fixed(20.25, 1), "20.3");
        assert_eq!(fixed(35.75, 1), "35.8");
        assert_eq!(fixed(27.125, 2), "27.13");
        assert_eq!(fixed(-2.25, 1), "-2.3");
        assert_eq!(fixed(0.5, 0), "1");
    }

    #[test]
    fn should_round_on_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989…
        assert_eq!(fixed(1.005, 2), "1.00");
        assert_eq!(fixed(0.15, 1), "0.1");
    }

    #[test]
    fn should_carry_into_integer_part() {
        assert_eq!(fixed(9.96, 1), "10.0");
        assert_eq!(fixed(-99.995, 2), "-100.00");
        assert_eq!(fixed(0.0, 2), "0.00");
    }

    #[test]
    fn should_print_negative_zero_unsigned() {
        assert_eq!(fixed(-0.0, 1), "0.0");
        assert_eq!(fixed(-0.04, 1), "-0.0");
    }

    #[test]
    fn should_label_midpoint_of_centidegree_bounds() {
        let cases = [
            (20.0, 20.5, "20.3"),
            (-5.0, 0.5, "-2.3"),
            (18.3, 18.4, "18.4"),
            (10.0, 30.0, "20.0"),
        ];
        for (min, max, mid) in cases {
            let stats = FrameStats { min, max, avg: min };
            assert_eq!(stats.legend().mid, mid, "min={min} max={max}");
        }
    }

    #[test]
    fn should_report_no_stats_when_min_missing() {
        let reading: StatusReading = serde_json::from_str("{}").unwrap();
        assert_eq!(reading, StatusReading::default());
        assert!(reading.stats().is_none());
    }

    #[test]
    fn should_report_no_stats_when_max_or_avg_missing() {
        let reading: StatusReading = serde_json::from_str(r#"{"min": 20.0}"#).unwrap();
        assert!(reading.stats().is_none());
    }

    #[test]
    fn should_ignore_unknown_fields() {
        let reading: StatusReading = serde_json::from_str(
            r#"{"timestamp": 1700000000.5, "min": 20.0, "max": 30.0, "avg": 25.0}"#,
        )
        .unwrap();
        assert_eq!(reading, StatusReading::new(20.0, 30.0, 25.0));
    }

    #[test]
    fn should_treat_null_min_as_no_data() {
        let reading: StatusReading = serde_json::from_str(r#"{"min": null}"#).unwrap();
        assert!(reading.stats().is_none());
    }

    #[test]
    fn should_omit_missing_fields_when_serialized() {
        let json = serde_json::to_string(&StatusReading::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
