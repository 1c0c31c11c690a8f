/// Call-time validation errors. An operation that returns one of these has
/// no side effects.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgumentError {
    #[error("{parameter} out of range: {value} (expected {expected})")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("{parameter} must not be blank")]
    Blank { parameter: &'static str },

    #[error("{parameter} cannot be {value}: {reason}")]
    Unsupported {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ArgumentError {
    /// Reject `value` unless it is finite and inside `[0, 1]`.
    pub fn check_unit_interval(parameter: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(ArgumentError::OutOfRange {
                parameter,
                value,
                expected: "a finite value in [0, 1]",
            })
        }
    }

    /// Reject `value` unless it is finite and `>= 0`.
    pub fn check_non_negative(parameter: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(ArgumentError::OutOfRange {
                parameter,
                value,
                expected: "a finite value >= 0",
            })
        }
    }

    /// Reject empty or whitespace-only strings.
    pub fn check_not_blank<'a>(parameter: &'static str, value: &'a str) -> Result<&'a str, Self> {
        if value.trim().is_empty() {
            Err(ArgumentError::Blank { parameter })
        } else {
            Ok(value)
        }
    }
}
