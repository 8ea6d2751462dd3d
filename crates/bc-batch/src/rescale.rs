//! Rescaling solved amounts to laboratory quantities.
//!
//! Every operation divides the whole vector by one factor, so ratios between
//! entries are preserved exactly.

use crate::error::{BatchError, BatchResult};
use bc_core::{ensure_finite, ensure_positive, Real};

/// Divide every value by `factor`.
pub fn rescale_all(values: &[Real], factor: Real) -> BatchResult<Vec<Real>> {
    ensure_finite(factor, "scale factor")?;
    if factor == 0.0 {
        return Err(BatchError::Validation {
            what: "Scale factor must be nonzero".to_string(),
        });
    }
    Ok(values.iter().map(|v| v / factor).collect())
}

/// Scale so that the entries at `selected` together sum to `target`.
///
/// This is the "weigh out a sample" operation: solve a nominal batch, then
/// shrink it so the chosen reagents add up to what actually goes in the
/// autoclave.
pub fn rescale_to_sample(
    values: &[Real],
    selected: &[usize],
    target: Real,
) -> BatchResult<Vec<Real>> {
    if selected.is_empty() {
        return Err(BatchError::Validation {
            what: "No reagents selected for the sample".to_string(),
        });
    }
    ensure_positive(target, "target sample mass")?;
    let mut sum = 0.0;
    for &index in selected {
        let value = values.get(index).ok_or_else(|| BatchError::Validation {
            what: format!(
                "Sample index {index} is out of range for {} masses",
                values.len()
            ),
        })?;
        sum += value;
    }
    rescale_all(values, sum / target)
}

/// Scale so that the entry at `index` lands exactly on `target`.
pub fn rescale_to_index(values: &[Real], index: usize, target: Real) -> BatchResult<Vec<Real>> {
    ensure_positive(target, "target value")?;
    let value = values.get(index).ok_or_else(|| BatchError::Validation {
        what: format!("Index {index} is out of range for {} values", values.len()),
    })?;
    rescale_all(values, value / target)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rescaling_preserves_ratios(
            a in 0.1_f64..1e3,
            b in 0.1_f64..1e3,
            factor in 0.01_f64..100.0,
        ) {
            let scaled = rescale_all(&[a, b], factor).unwrap();
            prop_assert!((scaled[0] / scaled[1] - a / b).abs() < 1e-9 * (a / b).abs());
        }

        #[test]
        fn forward_then_inverse_factor_round_trips(
            mass in 0.1_f64..1e3,
            factor in 0.01_f64..100.0,
        ) {
            let there = rescale_all(&[mass], factor).unwrap();
            let back = rescale_all(&there, 1.0 / factor).unwrap();
            prop_assert!((back[0] - mass).abs() < 1e-9 * mass);
        }
    }
}
