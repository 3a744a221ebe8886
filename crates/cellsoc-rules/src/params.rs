//! Parameter range checks shared by the rule sets.

use cellsoc_core::ParamError;

/// Accept `value` if it is a probability or fraction in `[0, 1]`.
pub(crate) fn check_unit(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ParamError::OutOfRange {
            name,
            value,
            expected: "in [0, 1]",
        })
    }
}

/// Accept `value` if it is finite and not negative.
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ParamError::OutOfRange {
            name,
            value,
            expected: "finite and >= 0",
        })
    }
}

/// Accept `value` if it is finite.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::OutOfRange {
            name,
            value,
            expected: "finite",
        })
    }
}
