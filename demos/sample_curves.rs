use curve_interp::{ControlPoint, CubicSpline, ExactPolynomial, PointSequence};

/// Samples both curve types over a display domain at a fixed step and prints
/// x;spline;polynomial triples, the way a rendering layer would walk the
/// models to draw them.
fn main() {
    let points = [
        ControlPoint::new(200.0, 200.0),
        ControlPoint::new(400.0, 400.0),
        ControlPoint::new(600.0, 200.0),
        ControlPoint::new(800.0, 400.0),
    ];
    let sequence = PointSequence::prepare(&points);

    let spline = CubicSpline::fit(&sequence).expect("spline fit failed");
    let polynomial = ExactPolynomial::fit(&sequence).expect("polynomial fit failed");

    let width = 900.0;
    let step = 5.0;
    let number_of_samples = (width / step) as usize + 1;

    for i in 0..number_of_samples {
        let x = step * i as f64;
        println!("{:.2};{:.2};{:.2}", x, spline.evaluate(x), polynomial.evaluate(x));
    }
}
