//! Input checks for values supplied by an interactive front-end.
//!
//! The numeric routines assume these checks already passed; front-ends call them to
//! decide whether to re-prompt.

use hohmann_core::constants::{EARTH_RADIUS_M, MAX_ORBIT_RADIUS_M};
use thiserror::Error;

/// A user-supplied value outside its accepted range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be greater than 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be below the Earth radius of {min} m (got {value})")]
    BelowEarthRadius {
        field: &'static str,
        value: f64,
        min: f64,
    },
    #[error("{field} must not exceed {max} m (got {value})")]
    AboveMaximumRadius {
        field: &'static str,
        value: f64,
        max: f64,
    },
}

/// Accept an orbit radius (m) within `[EARTH_RADIUS_M, MAX_ORBIT_RADIUS_M]`.
pub fn orbit_radius(field: &'static str, value: f64) -> Result<f64, InputError> {
    let value = positive(field, value)?;
    if value < EARTH_RADIUS_M {
        return Err(InputError::BelowEarthRadius {
            field,
            value,
            min: EARTH_RADIUS_M,
        });
    }
    if value > MAX_ORBIT_RADIUS_M {
        return Err(InputError::AboveMaximumRadius {
            field,
            value,
            max: MAX_ORBIT_RADIUS_M,
        });
    }
    Ok(value)
}

/// Accept a dry mass (kg) greater than zero.
pub fn dry_mass(value: f64) -> Result<f64, InputError> {
    positive("dry mass", value)
}

/// Accept a budget (USD) greater than zero.
pub fn budget(value: f64) -> Result<f64, InputError> {
    positive("budget", value)
}

/// Accept a budget top-up (USD) greater than zero.
pub fn top_up(value: f64) -> Result<f64, InputError> {
    positive("top-up", value)
}

fn positive(field: &'static str, value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(value)
}
