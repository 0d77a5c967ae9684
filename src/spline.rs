use nalgebra::{DMatrix, DVector};

use crate::{error::FitError, linear, point::PointSequence};

/// Natural cubic spline through a sequence of control points.
///
/// Segment `i` covers `[x_i, x_{i+1}]` and is evaluated as
/// `a_i*t^3 + b_i*t^2 + c_i*t + d_i` with `t = x - x_i`. The spline passes
/// through every point, has continuous first and second derivatives at
/// interior knots, and zero second derivative at both ends.
///
/// The model is an immutable snapshot; refit after every point edit.
///
/// # Example
/// ```
/// use curve_interp::{ControlPoint, CubicSpline, PointSequence};
/// use assert_approx_eq::assert_approx_eq;
///
/// let points = [
///     ControlPoint::new(0.0, 0.0),
///     ControlPoint::new(1.0, 1.0),
///     ControlPoint::new(2.0, 0.0),
/// ];
/// let sequence = PointSequence::prepare(&points);
/// let spline = CubicSpline::fit(&sequence).unwrap();
///
/// assert_approx_eq!(1.0, spline.evaluate(1.0), 1e-9);
/// assert_approx_eq!(0.6875, spline.evaluate(0.5), 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl CubicSpline {
    /// Fits a natural cubic spline through `sequence`.
    ///
    /// The interior second derivatives are the solution of the canonical
    /// tridiagonal system; the boundary second derivatives are fixed at zero.
    ///
    /// # Errors
    /// - [FitError::InsufficientPoints] when `sequence` has fewer than 3
    ///   points; the system is underdetermined without an interior knot.
    /// - [FitError::SingularSystem] when knot spacing is degenerate
    ///   (duplicate x values) or the system has no stable solution.
    pub fn fit(sequence: &PointSequence) -> Result<Self, FitError> {
        let count = sequence.len();
        if count < 3 {
            return Err(FitError::InsufficientPoints { required: 3, actual: count });
        }

        let x: Vec<f64> = sequence.points().iter().map(|p| p.x).collect();
        let y: Vec<f64> = sequence.points().iter().map(|p| p.y).collect();

        let number_of_segments = count - 1;
        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        if h.iter().any(|width| *width <= 0.0) {
            return Err(FitError::SingularSystem);
        }

        // One generic loop over all interior knots; edge rows simply omit the
        // missing neighbor.
        let interior_count = number_of_segments - 1;
        let mut matrix = DMatrix::<f64>::zeros(interior_count, interior_count);
        let mut rhs = DVector::<f64>::zeros(interior_count);

        for i in 1..number_of_segments {
            let row = i - 1;
            matrix[(row, row)] = 2.0 * (h[i - 1] + h[i]);
            if row > 0 {
                matrix[(row, row - 1)] = h[i - 1];
            }
            if row + 1 < interior_count {
                matrix[(row, row + 1)] = h[i];
            }
            rhs[row] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
        }

        let interior = linear::solve(matrix, rhs)?;

        // Second derivative at every knot; natural boundary condition at both ends.
        let mut u = vec![0.0; count];
        for (i, value) in interior.iter().enumerate() {
            u[i + 1] = *value;
        }

        let mut a = Vec::with_capacity(number_of_segments);
        let mut b = Vec::with_capacity(number_of_segments);
        let mut c = Vec::with_capacity(number_of_segments);
        let mut d = Vec::with_capacity(number_of_segments);

        for i in 0..number_of_segments {
            a.push((u[i + 1] - u[i]) / (6.0 * h[i]));
            b.push(u[i] / 2.0);
            c.push((y[i + 1] - y[i]) / h[i] - h[i] * (2.0 * u[i] + u[i + 1]) / 6.0);
            d.push(y[i]);
        }

        Ok(CubicSpline { x, y, a, b, c, d })
    }

    /// Evaluates the spline at `x`.
    ///
    /// Queries below the first knot or above the last knot extrapolate with
    /// the boundary segment's cubic. Evaluation is pure; calling it at
    /// arbitrary x in any order is equally valid.
    pub fn evaluate(&self, x: f64) -> f64 {
        let index = self.find_segment_index(x);
        let t = x - self.x[index];
        ((self.a[index] * t + self.b[index]) * t + self.c[index]) * t + self.d[index]
    }

    pub fn segment_count(&self) -> usize {
        self.a.len()
    }

    /// Knot x coordinates, ascending, length `segment_count() + 1`.
    pub fn knot_x(&self) -> &[f64] {
        &self.x
    }

    /// Knot y coordinates, length `segment_count() + 1`.
    pub fn knot_y(&self) -> &[f64] {
        &self.y
    }

    /// Coefficients `[a, b, c, d]` of segment `index`.
    ///
    /// # Panics
    /// Panics when `index >= segment_count()`.
    pub fn segment_coefficients(&self, index: usize) -> [f64; 4] {
        [self.a[index], self.b[index], self.c[index], self.d[index]]
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Bisection over the knot array. Out-of-range x lands on the first or
    /// last segment, which doubles as the extrapolation convention.
    fn find_segment_index(&self, x: f64) -> usize {
        let mut min = 0;
        let mut max = self.x.len() - 1;

        while max - min > 1 {
            let mid = (min + max) / 2;
            if x < self.x[mid] {
                max = mid;
            } else {
                min = mid;
            }
        }
        min
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use crate::point::ControlPoint;

    use super::*;

    fn sequence_of(pairs: &[(f64, f64)]) -> PointSequence {
        let points: Vec<ControlPoint> = pairs.iter().map(|pair| (*pair).into()).collect();
        PointSequence::prepare(&points)
    }

    #[test]
    fn three_point_hand_computed_coefficients() {
        let eps = 1e-12;

        // Interior system is 1x1: 4*u1 = -12, so u1 = -3.
        let sequence = sequence_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let spline = CubicSpline::fit(&sequence).unwrap();

        assert_eq!(2, spline.segment_count());

        let [a, b, c, d] = spline.segment_coefficients(0);
        assert_approx_eq!(-0.5, a, eps);
        assert_approx_eq!(0.0, b, eps);
        assert_approx_eq!(1.5, c, eps);
        assert_approx_eq!(0.0, d, eps);

        let [a, b, c, d] = spline.segment_coefficients(1);
        assert_approx_eq!(0.5, a, eps);
        assert_approx_eq!(-1.5, b, eps);
        assert_approx_eq!(0.0, c, eps);
        assert_approx_eq!(1.0, d, eps);

        assert_approx_eq!(0.6875, spline.evaluate(0.5), eps);
        assert_approx_eq!(0.6875, spline.evaluate(1.5), eps);
    }

    #[test]
    fn four_point_fit_passes_through_knots() {
        let eps = 1e-9;

        let sequence = sequence_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)]);
        let spline = CubicSpline::fit(&sequence).unwrap();

        assert_eq!(3, spline.segment_count());
        assert_approx_eq!(0.0, spline.evaluate(0.0), eps);
        assert_approx_eq!(1.0, spline.evaluate(1.0), eps);
        assert_approx_eq!(0.0, spline.evaluate(2.0), eps);
        assert_approx_eq!(1.0, spline.evaluate(3.0), eps);
    }

    #[test]
    fn interpolates_knots_on_non_uniform_spacing() {
        let eps = 1e-9;

        let pairs = [(0.0, 2.0), (0.4, -1.0), (1.5, 3.5), (1.7, 0.0), (4.0, 1.0)];
        let sequence = sequence_of(&pairs);
        let spline = CubicSpline::fit(&sequence).unwrap();

        for (x, y) in pairs {
            assert_approx_eq!(y, spline.evaluate(x), eps);
        }
    }

    #[test]
    fn first_and_second_derivatives_are_continuous_at_interior_knots() {
        let eps = 1e-9;

        let sequence =
            sequence_of(&[(0.0, 1.0), (0.7, -2.0), (2.0, 0.5), (3.1, 4.0), (5.0, -1.0)]);
        let spline = CubicSpline::fit(&sequence).unwrap();

        for i in 0..spline.segment_count() - 1 {
            let h = spline.x[i + 1] - spline.x[i];
            let left_first = (3.0 * spline.a[i] * h + 2.0 * spline.b[i]) * h + spline.c[i];
            let left_second = 6.0 * spline.a[i] * h + 2.0 * spline.b[i];

            assert_approx_eq!(left_first, spline.c[i + 1], eps);
            assert_approx_eq!(left_second, 2.0 * spline.b[i + 1], eps);
        }
    }

    #[test]
    fn second_derivative_vanishes_at_boundaries() {
        let eps = 1e-9;

        let sequence = sequence_of(&[(0.0, 3.0), (1.0, -1.0), (2.5, 2.0), (4.0, 0.0)]);
        let spline = CubicSpline::fit(&sequence).unwrap();

        assert_approx_eq!(0.0, 2.0 * spline.b[0], eps);

        let last = spline.segment_count() - 1;
        let h = spline.x[last + 1] - spline.x[last];
        assert_approx_eq!(0.0, 6.0 * spline.a[last] * h + 2.0 * spline.b[last], eps);
    }

    #[test]
    fn extrapolates_with_boundary_segments() {
        let eps = 1e-12;

        let sequence = sequence_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        let spline = CubicSpline::fit(&sequence).unwrap();

        // Segment 0 cubic at t = -1 and segment 1 cubic at t = 2.
        assert_approx_eq!(-1.0, spline.evaluate(-1.0), eps);
        assert_approx_eq!(-1.0, spline.evaluate(3.0), eps);
    }

    #[test]
    fn rejects_fewer_than_three_points() {
        let sequence = sequence_of(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(
            Err(FitError::InsufficientPoints { required: 3, actual: 2 }),
            CubicSpline::fit(&sequence)
        );

        let sequence = sequence_of(&[]);
        assert_eq!(
            Err(FitError::InsufficientPoints { required: 3, actual: 0 }),
            CubicSpline::fit(&sequence)
        );
    }

    #[test]
    fn rejects_duplicate_x_values() {
        let sequence = sequence_of(&[(1.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);

        assert_eq!(Err(FitError::SingularSystem), CubicSpline::fit(&sequence));
    }

    #[test]
    fn refitting_same_input_is_deterministic() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let mut pairs = Vec::new();
        let mut x = 0.0;
        for _ in 0..20 {
            x += rng.gen_range(0.1..1.0);
            pairs.push((x, rng.gen_range(-10.0..10.0)));
        }

        let sequence = sequence_of(&pairs);
        let first = CubicSpline::fit(&sequence).unwrap();
        let second = CubicSpline::fit(&sequence).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn accessors_expose_model_arrays() {
        let sequence = sequence_of(&[(0.0, 1.0), (1.0, 2.0), (3.0, 0.0)]);
        let spline = CubicSpline::fit(&sequence).unwrap();

        assert_eq!(&[0.0, 1.0, 3.0], spline.knot_x());
        assert_eq!(&[1.0, 2.0, 0.0], spline.knot_y());
        assert_eq!(0.0, spline.min_x());
        assert_eq!(3.0, spline.max_x());
    }
}
