//! Library for fitting smooth curves through a small, editable set of 2D
//! control points. It provides the numerical core only; rendering, event
//! handling and persistence are left to the caller, which feeds in raw point
//! coordinates and samples the fitted models at whatever resolution it needs.
//!
//! Two curve types are supported:
//! - [CubicSpline]: natural cubic spline, piecewise cubic with continuous
//!   first and second derivatives.
//! - [ExactPolynomial]: the unique degree-(N-1) polynomial through N points.
//!
//! # Example
//! ```
//! use curve_interp::{ControlPoint, CubicSpline, ExactPolynomial, PointSequence};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = [
//!     ControlPoint::new(0.0, 0.0),
//!     ControlPoint::new(1.0, 1.0),
//!     ControlPoint::new(2.0, 4.0),
//! ];
//! let sequence = PointSequence::prepare(&points);
//!
//! let spline = CubicSpline::fit(&sequence).unwrap();
//! assert_approx_eq!(1.0, spline.evaluate(1.0), 1e-9);
//!
//! let polynomial = ExactPolynomial::fit(&sequence).unwrap();
//! assert_approx_eq!(0.25, polynomial.evaluate(0.5), 1e-9);
//! ```

mod error;
mod linear;
mod point;
mod polynomial;
mod spline;

pub use error::FitError;
pub use point::{ControlPoint, PointSequence};
pub use polynomial::ExactPolynomial;
pub use spline::CubicSpline;
