use std::{error::Error, fmt::Display};

use crate::{CircleSide, CoordNum, HasPosition, LineSideInfo, Point2};

/// Why a coordinate was rejected by [validate_coordinate].
///
/// [hull](crate::hull) and [delaunay](crate::delaunay) never fail with this error: points with an
/// invalid coordinate are dropped and logged at `debug` level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidCoordinate {
    /// Non-zero and smaller in magnitude than [MIN_ALLOWED_VALUE].
    ///
    /// Input is passed through [mitigate_underflow] first, so this never drops a point.
    TooSmall,

    /// Larger in magnitude than [MAX_ALLOWED_VALUE], infinities included.
    TooLarge,

    /// Not a number.
    NaN,
}

impl Display for InvalidCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            InvalidCoordinate::TooSmall => "coordinate magnitude below the smallest allowed value",
            InvalidCoordinate::TooLarge => "coordinate magnitude above the largest allowed value",
            InvalidCoordinate::NaN => "coordinate is NaN",
        };
        write!(f, "{reason}")
    }
}

impl Error for InvalidCoordinate {}

/// 2<sup>-142</sup>, the smallest non-zero coordinate magnitude.
///
/// Shewchuk's adaptive predicates are free of underflow for exponents down to -142.
///
/// *See also [validate_coordinate], [mitigate_underflow]*
pub const MIN_ALLOWED_VALUE: f64 = 1.793662034335766e-43;

/// 2<sup>201</sup>, the largest coordinate magnitude. Every finite `f32` stays below it.
pub const MAX_ALLOWED_VALUE: f64 = 3.2138760885179806e60;

/// Relative width of the band in which the in-circle test reports [CircleSide::OnCircle].
///
/// The in-circle determinant is compared against this factor times the determinant's
/// permanent (the same expression with every product replaced by its absolute value).
/// The value is the `f32` machine epsilon: input coordinates are single precision, so four
/// points that were cocircular before rounding to `f32` land inside the band.
pub const INCIRCLE_TOLERANCE: f64 = f32::EPSILON as f64;

/// Accepts zero and every magnitude in [[MIN_ALLOWED_VALUE], [MAX_ALLOWED_VALUE]].
///
/// Infinities are [InvalidCoordinate::TooLarge].
pub fn validate_coordinate<S: CoordNum>(value: S) -> Result<(), InvalidCoordinate> {
    let magnitude = Into::<f64>::into(value).abs();
    match magnitude {
        _ if magnitude.is_nan() => Err(InvalidCoordinate::NaN),
        _ if magnitude > MAX_ALLOWED_VALUE => Err(InvalidCoordinate::TooLarge),
        _ if magnitude != 0.0 && magnitude < MIN_ALLOWED_VALUE => Err(InvalidCoordinate::TooSmall),
        _ => Ok(()),
    }
}

/// [validate_coordinate] for `x`, then for `y`.
pub fn validate_vertex<V: HasPosition>(vertex: &V) -> Result<(), InvalidCoordinate> {
    let Point2 { x, y } = vertex.position();
    validate_coordinate(x).and_then(|()| validate_coordinate(y))
}

/// Flushes coordinates below [MIN_ALLOWED_VALUE] in magnitude to `0.0`.
///
/// `-0.0` becomes `0.0`. NaN and infinities pass through.
///
/// # Example
/// ```
/// use delahull::{mitigate_underflow, validate_vertex, InvalidCoordinate, Point2};
///
/// let tiny = Point2::new(1.0e-44, 42.0);
/// assert_eq!(validate_vertex(&tiny), Err(InvalidCoordinate::TooSmall));
///
/// let flushed = mitigate_underflow(tiny);
/// assert_eq!(flushed, Point2::new(0.0, 42.0));
/// assert!(validate_vertex(&flushed).is_ok());
/// ```
pub fn mitigate_underflow(position: Point2<f64>) -> Point2<f64> {
    let flush = |value: f64| {
        if value.abs() < MIN_ALLOWED_VALUE {
            0.0
        } else {
            value
        }
    };
    Point2::new(flush(position.x), flush(position.y))
}

fn to_robust_coord(point: Point2<f64>) -> robust::Coord<f64> {
    robust::Coord {
        x: point.x,
        y: point.y,
    }
}

/// Returns on which side of the directed line `from -> to` the query point lies.
///
/// The sign is exact: it is computed with Shewchuk's adaptive orientation predicate.
pub fn side_query(from: Point2<f64>, to: Point2<f64>, query_point: Point2<f64>) -> LineSideInfo {
    let result = robust::orient2d(
        to_robust_coord(from),
        to_robust_coord(to),
        to_robust_coord(query_point),
    );
    LineSideInfo::from_determinant(result)
}

/// Returns `true` if `p1`, `p2` and `p3` are ordered counter-clockwise or lie on a line.
pub fn is_ordered_ccw(p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> bool {
    side_query(p1, p2, p3).is_on_left_side_or_on_line()
}

/// Locates `query_point` relative to the circumcircle of the counter-clockwise triangle
/// `(v0, v1, v2)`.
///
/// Determinants whose magnitude lies within [INCIRCLE_TOLERANCE] times the permanent are
/// reported as [CircleSide::OnCircle].
pub fn circle_query(
    v0: Point2<f64>,
    v1: Point2<f64>,
    v2: Point2<f64>,
    query_point: Point2<f64>,
) -> CircleSide {
    let determinant = robust::incircle(
        to_robust_coord(v0),
        to_robust_coord(v1),
        to_robust_coord(v2),
        to_robust_coord(query_point),
    );

    let tolerance = INCIRCLE_TOLERANCE * incircle_permanent(v0, v1, v2, query_point);
    if determinant.abs() <= tolerance {
        CircleSide::OnCircle
    } else if determinant > 0.0 {
        CircleSide::Inside
    } else {
        CircleSide::Outside
    }
}

fn incircle_permanent(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>, d: Point2<f64>) -> f64 {
    let ad = a.sub(d);
    let bd = b.sub(d);
    let cd = c.sub(d);

    let a_lift = ad.length2();
    let b_lift = bd.length2();
    let c_lift = cd.length2();

    ((bd.x * cd.y).abs() + (cd.x * bd.y).abs()) * a_lift
        + ((cd.x * ad.y).abs() + (ad.x * cd.y).abs()) * b_lift
        + ((ad.x * bd.y).abs() + (bd.x * ad.y).abs()) * c_lift
}

/// Twice the signed area of a triangle, positive for counter-clockwise triangles.
///
/// Not exact, use [side_query] to decide orientation.
pub fn signed_area_2(positions: [Point2<f64>; 3]) -> f64 {
    let [v0, v1, v2] = positions;
    let b = v1.sub(v0);
    let c = v2.sub(v0);
    b.x * c.y - b.y * c.x
}

/// The area of a triangle.
pub fn triangle_area(positions: [Point2<f64>; 3]) -> f64 {
    signed_area_2(positions).abs() * 0.5
}

/// Area of a simple polygon given in counter-clockwise order (shoelace formula).
pub fn polygon_area(polygon: &[Point2<f64>]) -> f64 {
    let mut twice_area = 0.0;
    for (index, current) in polygon.iter().enumerate() {
        let next = polygon[(index + 1) % polygon.len()];
        twice_area += current.x * next.y - next.x * current.y;
    }
    twice_area * 0.5
}

#[cfg(test)]
mod test {
    use super::{
        circle_query, is_ordered_ccw, mitigate_underflow, polygon_area, side_query,
        triangle_area, validate_coordinate, validate_vertex, MAX_ALLOWED_VALUE,
        MIN_ALLOWED_VALUE,
    };
    use crate::InvalidCoordinate::{self, NaN, TooLarge, TooSmall};
    use crate::{CircleSide, Point2};
    use approx::assert_relative_eq;

    fn power_of_two(exponent: i32) -> f64 {
        f64::from_bits(((1023 + exponent) as u64) << 52)
    }

    #[test]
    fn test_allowed_range() {
        assert_eq!(MIN_ALLOWED_VALUE, power_of_two(-142));
        assert_eq!(MAX_ALLOWED_VALUE, power_of_two(201));
    }

    #[test]
    fn test_validate_coordinate() {
        let cases: [(f64, Result<(), InvalidCoordinate>); 9] = [
            (0.0, Ok(())),
            (-0.0, Ok(())),
            (MIN_ALLOWED_VALUE, Ok(())),
            (-MAX_ALLOWED_VALUE, Ok(())),
            (f32::MAX.into(), Ok(())),
            (MIN_ALLOWED_VALUE * 0.5, Err(TooSmall)),
            (MAX_ALLOWED_VALUE * 2.0, Err(TooLarge)),
            (f64::NEG_INFINITY, Err(TooLarge)),
            (f64::NAN, Err(NaN)),
        ];
        for (value, expected) in cases {
            assert_eq!(validate_coordinate(value), expected, "{value:e}");
        }
        assert_eq!(validate_coordinate(f32::NAN), Err(NaN));
        assert_eq!(validate_coordinate(f32::MIN_POSITIVE), Ok(()));

        // The first invalid coordinate decides
        let point = Point2::new(f64::INFINITY, f64::NAN);
        assert_eq!(validate_vertex(&point), Err(TooLarge));
        assert_eq!(validate_vertex(&Point2::new(1.0, f64::NAN)), Err(NaN));
    }

    #[test]
    fn test_mitigate_underflow() {
        use float_next_after::NextAfter;

        let just_below = MIN_ALLOWED_VALUE.next_after(0.0);
        let smallest_f32: f64 = f32::from_bits(1).into();
        for tiny in [f64::MIN_POSITIVE, just_below, -just_below, smallest_f32] {
            let point = Point2::new(tiny, -tiny);
            assert_eq!(validate_vertex(&point), Err(TooSmall));

            let flushed = mitigate_underflow(point);
            assert!(flushed.x.to_bits() == 0 && flushed.y.to_bits() == 0);
            assert_eq!(validate_vertex(&flushed), Ok(()));
        }

        assert_eq!(mitigate_underflow(Point2::new(-0.0, 0.0)).x.to_bits(), 0);

        let kept = Point2::new(MIN_ALLOWED_VALUE, -2.0);
        assert_eq!(mitigate_underflow(kept), kept);

        let invalid = mitigate_underflow(Point2::new(f64::INFINITY, f64::NAN));
        assert_eq!(invalid.x, f64::INFINITY);
        assert!(invalid.y.is_nan());
    }

    #[test]
    fn test_side_query() {
        let from = Point2::new(-1.0, -1.0);
        let to = Point2::new(3.0, 3.0);

        assert!(side_query(from, to, Point2::new(2.0, -4.0)).is_on_right_side());
        assert!(side_query(from, to, Point2::new(-3.0, 0.5)).is_on_left_side());
        assert!(side_query(from, to, Point2::new(7.0, 7.0)).is_on_line());
        assert_eq!(
            side_query(to, from, Point2::new(2.0, -4.0)),
            side_query(from, to, Point2::new(-3.0, 0.5))
        );
    }

    #[test]
    fn test_is_ordered_ccw() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        let above = Point2::new(1.0, 1.0);

        assert!(is_ordered_ccw(a, b, above));
        assert!(!is_ordered_ccw(b, a, above));
        assert!(is_ordered_ccw(above, a, b));

        // Collinear points count as ordered in both directions
        let between = Point2::new(1.0, 0.0);
        assert!(is_ordered_ccw(a, b, between));
        assert!(is_ordered_ccw(b, a, between));
        assert!(is_ordered_ccw(a, a, above));

        // Decided exactly like side_query
        let almost = Point2::new(24.0, 24.0 + 24.0 * f64::EPSILON);
        let from = Point2::new(0.5, 0.5);
        let to = Point2::new(12.0, 12.0);
        assert!(is_ordered_ccw(from, to, almost));
        assert!(!is_ordered_ccw(to, from, almost));
    }

    #[test]
    fn test_side_query_is_exact() {
        // The naive determinant evaluates to zero for these points
        let from = Point2::new(0.5, 0.5);
        let to = Point2::new(12.0, 12.0);
        let query = Point2::new(24.0, 24.0 + 24.0 * f64::EPSILON);
        assert!(side_query(from, to, query).is_on_left_side());
        assert!(side_query(to, from, query).is_on_right_side());
    }

    #[test]
    fn test_circle_query() {
        let (a1, a2, a3) = (3f64, 2f64, 1f64);
        let offset = Point2::new(0.5, 0.7);
        let on_circle = |angle: f64| Point2::new(angle.sin() * 2.0, angle.cos() * 2.0);
        let shift = |p: Point2<f64>| Point2::new(p.x + offset.x, p.y + offset.y);
        let v1 = shift(on_circle(a1));
        let v2 = shift(on_circle(a2));
        let v3 = shift(on_circle(a3));
        assert!(side_query(v1, v2, v3).is_on_left_side());

        assert_eq!(circle_query(v1, v2, v3, offset), CircleSide::Inside);
        assert_eq!(
            circle_query(v1, v2, v3, shift(on_circle(1.5).scale(0.9))),
            CircleSide::Inside
        );
        assert_eq!(
            circle_query(v1, v2, v3, shift(on_circle(1.5).scale(1.1))),
            CircleSide::Outside
        );
        assert_eq!(
            circle_query(v1, v2, v3, shift(on_circle(5.0))),
            CircleSide::OnCircle
        );
    }

    #[test]
    fn test_circle_query_on_square() {
        let v0 = Point2::new(0.0, 0.0);
        let v1 = Point2::new(1.0, 0.0);
        let v2 = Point2::new(1.0, 1.0);
        assert_eq!(
            circle_query(v0, v1, v2, Point2::new(0.0, 1.0)),
            CircleSide::OnCircle
        );
        assert_eq!(
            circle_query(v0, v1, v2, Point2::new(0.0, 1.01)),
            CircleSide::Outside
        );
        assert_eq!(
            circle_query(v0, v1, v2, Point2::new(0.01, 0.99)),
            CircleSide::Inside
        );
    }

    #[test]
    fn test_circle_query_single_precision_pentagon() {
        let vertices: Vec<_> = (0..5)
            .map(|i| {
                let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::TAU / 5.0;
                Point2::new(angle.cos() as f64, angle.sin() as f64)
            })
            .collect();

        for query in &vertices[3..] {
            assert_eq!(
                circle_query(vertices[0], vertices[1], vertices[2], *query),
                CircleSide::OnCircle
            );
        }
    }

    #[test]
    fn test_areas() {
        let t = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ];
        assert_relative_eq!(triangle_area(t), 6.0);
        assert_relative_eq!(super::signed_area_2([t[0], t[2], t[1]]), -12.0);

        let square = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert_relative_eq!(polygon_area(&square), 1.0);
    }

    trait Scale {
        fn scale(self, factor: f64) -> Self;
    }

    impl Scale for Point2<f64> {
        fn scale(self, factor: f64) -> Self {
            Point2::new(self.x * factor, self.y * factor)
        }
    }
}
