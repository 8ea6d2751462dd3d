//! Linear solve step.

use crate::error::{BatchError, BatchResult};
use bc_core::Real;
use nalgebra::{DMatrix, DVector};

/// Solve transpose(B) · X = A for the reagent masses X.
///
/// B carries one row per reagent, so the system is square exactly when as
/// many reagents are selected as components.
pub(crate) fn solve_masses(b: &DMatrix<Real>, a: &DVector<Real>) -> BatchResult<DVector<Real>> {
    if b.nrows() != b.ncols() {
        return Err(BatchError::Numeric {
            what: format!(
                "Batch system is not square: {} reagents x {} components",
                b.nrows(),
                b.ncols()
            ),
        });
    }
    b.transpose()
        .lu()
        .solve(a)
        .ok_or_else(|| BatchError::Numeric {
            what: "Batch matrix is singular: reagent contributions are linearly dependent"
                .to_string(),
        })
}
