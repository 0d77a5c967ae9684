use nalgebra::{DMatrix, DVector};

use crate::error::FitError;

/// Smallest acceptable pivot magnitude, relative to the largest matrix entry.
const RELATIVE_PIVOT_TOLERANCE: f64 = 1e-12;

/// Solves the dense square system `matrix * x = rhs` by LU decomposition with
/// partial pivoting.
///
/// The solve is rejected as [FitError::SingularSystem] when the smallest pivot
/// falls below [RELATIVE_PIVOT_TOLERANCE] scaled by the largest absolute
/// matrix entry, or when the solution contains non-finite values. For a given
/// (matrix, rhs) pair the returned solution is deterministic.
pub(crate) fn solve(matrix: DMatrix<f64>, rhs: DVector<f64>) -> Result<DVector<f64>, FitError> {
    let scale = matrix.amax().max(1.0);
    let decomposition = matrix.lu();

    let smallest_pivot = decomposition
        .u()
        .diagonal()
        .iter()
        .fold(f64::INFINITY, |smallest, pivot| smallest.min(pivot.abs()));

    if !(smallest_pivot > RELATIVE_PIVOT_TOLERANCE * scale) {
        return Err(FitError::SingularSystem);
    }

    let solution = decomposition.solve(&rhs).ok_or(FitError::SingularSystem)?;

    if solution.iter().any(|value| !value.is_finite()) {
        return Err(FitError::SingularSystem);
    }
    Ok(solution)
}
