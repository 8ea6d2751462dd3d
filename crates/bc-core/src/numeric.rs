use crate::BcError;

/// Floating point type used throughout the calculator.
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BcError::NonFinite { what, value: v })
    }
}

/// Guard for quantities that must be strictly positive (masses, scale factors).
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, BcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(BcError::NonPositive { what, value: v })
    }
}
