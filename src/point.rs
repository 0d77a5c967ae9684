/// Single editable control point of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64) -> Self {
        ControlPoint { x, y }
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from(pair: (f64, f64)) -> Self {
        ControlPoint { x: pair.0, y: pair.1 }
    }
}

/// Control points normalized into ascending x order, ready for fitting.
///
/// Points with equal x keep their original relative order. Duplicate x values
/// are not resolved here; fits over such sequences fail with
/// [SingularSystem](crate::FitError::SingularSystem).
///
/// # Example
/// ```
/// use curve_interp::{ControlPoint, PointSequence};
///
/// let points = [
///     ControlPoint::new(2.0, 0.5),
///     ControlPoint::new(0.0, 1.0),
///     ControlPoint::new(1.0, -1.0),
/// ];
/// let sequence = PointSequence::prepare(&points);
///
/// assert_eq!(0.0, sequence.points()[0].x);
/// assert_eq!(2.0, sequence.points()[2].x);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    points: Vec<ControlPoint>,
}

impl PointSequence {
    /// Copies `points` and sorts the copy by ascending x. The caller's slice
    /// is never mutated. The sort is stable, so equal x values retain
    /// insertion order.
    pub fn prepare(points: &[ControlPoint]) -> Self {
        let mut sorted = points.to_vec();
        sorted.sort_by(|p, q| p.x.total_cmp(&q.x));
        PointSequence { points: sorted }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
