//! Domain validation shared by every kernel.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("invalid domain input: {parameter} = {value} ({reason})")]
    InvalidDomainInput {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        DomainError::InvalidDomainInput {
            parameter,
            value,
            reason,
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            DomainError::InvalidDomainInput { parameter, .. } => parameter,
        }
    }
}

/// Reject NaN and infinities.
pub fn ensure_finite(parameter: &'static str, value: f64) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::invalid(parameter, value, "must be finite"))
    }
}

/// Require a finite, strictly positive value.
pub fn ensure_positive(parameter: &'static str, value: f64) -> DomainResult<f64> {
    ensure_finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::invalid(parameter, value, "must be positive"))
    }
}

/// Require `min <= value`.
pub fn ensure_at_least(parameter: &'static str, value: f64, min: f64) -> DomainResult<f64> {
    ensure_finite(parameter, value)?;
    if value >= min {
        Ok(value)
    } else {
        Err(DomainError::invalid(parameter, value, "below lower bound"))
    }
}

/// Require `min <= value < max`.
pub fn ensure_half_open(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> DomainResult<f64> {
    ensure_finite(parameter, value)?;
    if (min..max).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::invalid(parameter, value, "outside allowed range"))
    }
}

/// Require `min <= value <= max`.
pub fn ensure_within(parameter: &'static str, value: f64, min: f64, max: f64) -> DomainResult<f64> {
    ensure_finite(parameter, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::invalid(parameter, value, "outside allowed range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert!(ensure_positive("power", 1.0).is_ok());
        assert_eq!(
            ensure_positive("power", 0.0).unwrap_err().parameter(),
            "power"
        );
        assert!(ensure_positive("power", f64::NAN).is_err());
        assert!(ensure_positive("power", f64::INFINITY).is_err());
    }

    #[test]
    fn half_open_excludes_upper_bound() {
        assert!(ensure_half_open("e", 0.0, 0.0, 1.0).is_ok());
        assert!(ensure_half_open("e", 0.999, 0.0, 1.0).is_ok());
        assert!(ensure_half_open("e", 1.0, 0.0, 1.0).is_err());
        assert!(ensure_half_open("e", -0.1, 0.0, 1.0).is_err());
    }

    #[test]
    fn within_includes_both_bounds() {
        assert!(ensure_within("infill", 0.0, 0.0, 100.0).is_ok());
        assert!(ensure_within("infill", 100.0, 0.0, 100.0).is_ok());
        assert!(ensure_within("infill", 100.5, 0.0, 100.0).is_err());
        assert!(ensure_within("infill", f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn error_message_names_parameter() {
        let err = ensure_at_least("mach", 0.8, 1.0).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("mach"));
        assert!(text.contains("0.8"));
    }
}
