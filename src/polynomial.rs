use nalgebra::{DMatrix, DVector};

use crate::{error::FitError, linear, point::PointSequence};

/// Unique polynomial of degree N-1 passing exactly through N control points.
///
/// Coefficients are stored highest degree first, so the curve is
/// `y = c[0]*x^(N-1) + c[1]*x^(N-2) + ... + c[N-1]`.
///
/// The fit solves a Vandermonde system, which is increasingly ill-conditioned
/// as the point count grows or x values cluster. That limitation is inherent
/// to the method and is not corrected here; fits that lose numerical
/// stability fail with [FitError::SingularSystem] instead of returning
/// non-finite coefficients.
///
/// # Example
/// ```
/// use curve_interp::{ControlPoint, ExactPolynomial, PointSequence};
/// use assert_approx_eq::assert_approx_eq;
///
/// let points = [
///     ControlPoint::new(0.0, 0.0),
///     ControlPoint::new(1.0, 1.0),
///     ControlPoint::new(2.0, 4.0),
/// ];
/// let sequence = PointSequence::prepare(&points);
/// let polynomial = ExactPolynomial::fit(&sequence).unwrap();
///
/// // The points lay on y = x^2.
/// assert_approx_eq!(0.25, polynomial.evaluate(0.5), 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExactPolynomial {
    coefficients: Vec<f64>,
}

impl ExactPolynomial {
    /// Fits the exact interpolating polynomial through `sequence`.
    ///
    /// # Errors
    /// - [FitError::InsufficientPoints] for an empty sequence. A single point
    ///   is valid and yields a constant.
    /// - [FitError::SingularSystem] when two points share an x value or the
    ///   Vandermonde system is too ill-conditioned to solve.
    pub fn fit(sequence: &PointSequence) -> Result<Self, FitError> {
        let dimension = sequence.len();
        if dimension == 0 {
            return Err(FitError::InsufficientPoints { required: 1, actual: 0 });
        }

        let mut matrix = DMatrix::<f64>::zeros(dimension, dimension);
        let mut rhs = DVector::<f64>::zeros(dimension);

        for (i, point) in sequence.points().iter().enumerate() {
            for j in 0..dimension {
                matrix[(i, j)] = point.x.powi((dimension - 1 - j) as i32);
            }
            rhs[i] = point.y;
        }

        let solution = linear::solve(matrix, rhs)?;

        Ok(ExactPolynomial { coefficients: solution.iter().copied().collect() })
    }

    /// Evaluates the polynomial at `x` by Horner's method.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0.0, |result, coefficient| result * x + coefficient)
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
}
