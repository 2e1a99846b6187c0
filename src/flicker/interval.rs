use std::time::Duration;

use serde_json::Value;

use crate::error::FlickerError;

/// Tick period: a non-negative whole number of milliseconds.
///
/// Only valid periods can be represented; every conversion from an untyped
/// number checks the value and fails with [`FlickerError::InvalidInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(u64);

impl Interval {
    pub const DEFAULT: Self = Self(1000);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    pub const fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u64> for Interval {
    type Error = FlickerError;

    fn try_from(millis: u64) -> Result<Self, Self::Error> {
        Ok(Self(millis))
    }
}

impl TryFrom<i64> for Interval {
    type Error = FlickerError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        u64::try_from(millis)
            .map(Self)
            .map_err(|_| FlickerError::InvalidInterval(millis.to_string()))
    }
}

impl TryFrom<i32> for Interval {
    type Error = FlickerError;

    fn try_from(millis: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(millis))
    }
}

impl TryFrom<f64> for Interval {
    type Error = FlickerError;

    fn try_from(millis: f64) -> Result<Self, Self::Error> {
        // u64::MAX as f64 rounds up, so the bound is exclusive
        if millis.is_finite() && millis.fract() == 0.0 && millis >= 0.0 && millis < u64::MAX as f64
        {
            Ok(Self(millis as u64))
        } else {
            Err(FlickerError::InvalidInterval(millis.to_string()))
        }
    }
}

impl TryFrom<&Value> for Interval {
    type Error = FlickerError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if let Some(millis) = n.as_u64() {
                    Ok(Self(millis))
                } else if let Some(millis) = n.as_i64() {
                    Self::try_from(millis)
                } else {
                    n.as_f64()
                        .ok_or_else(|| FlickerError::InvalidInterval(n.to_string()))
                        .and_then(|millis: f64| Self::try_from(millis))
                }
            }
            other => Err(FlickerError::InvalidInterval(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_is_one_second() {
        assert_eq!(Interval::default().as_duration(), Duration::from_secs(1));
    }

    #[rstest]
    #[case(json!(0), 0)]
    #[case(json!(500), 500)]
    #[case(json!(250.0), 250)]
    fn test_accepts_non_negative_integers(#[case] value: Value, #[case] millis: u64) {
        assert_eq!(Interval::try_from(&value), Ok(Interval::from_millis(millis)));
    }

    #[rstest]
    #[case(json!(-1))]
    #[case(json!(1.5))]
    #[case(json!(-0.5))]
    #[case(json!("500"))]
    #[case(json!(true))]
    #[case(json!([500]))]
    fn test_rejects_everything_else(#[case] value: Value) {
        assert!(matches!(
            Interval::try_from(&value),
            Err(FlickerError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_floats() {
        assert!(Interval::try_from(f64::NAN).is_err());
        assert!(Interval::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_integer_message() {
        assert_eq!(
            Interval::try_from(-1),
            Err(FlickerError::InvalidInterval("-1".to_owned()))
        );
    }
}
