#![allow(dead_code)]

use delahull::{HasPosition, Point2};

#[derive(Clone, Copy, arbitrary::Arbitrary)]
pub struct FuzzPoint {
    pub x: f32,
    pub y: f32,
}

impl HasPosition for FuzzPoint {
    type Scalar = f32;
    fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

impl core::fmt::Debug for FuzzPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("Point2::new({:?}, {:?})", self.x, self.y))
    }
}

/// Position of an input point as used by the predicates.
pub fn position(data: &[FuzzPoint], index: u32) -> Point2<f64> {
    let position = data[index as usize].position();
    delahull::mitigate_underflow(Point2::new(position.x.into(), position.y.into()))
}

/// How far `point` lies inside the circumcircle of `triangle`, relative to the circumradius.
/// Negative for points outside of the circle.
pub fn relative_intrusion(triangle: [Point2<f64>; 3], point: Point2<f64>) -> f64 {
    let [a, b, c] = triangle;
    let (bx, by) = (b.x - a.x, b.y - a.y);
    let (cx, cy) = (c.x - a.x, c.y - a.y);
    let b_length2 = bx * bx + by * by;
    let c_length2 = cx * cx + cy * cy;
    let denominator = 2.0 * (bx * cy - by * cx);

    let center_x = (cy * b_length2 - by * c_length2) / denominator;
    let center_y = (bx * c_length2 - cx * b_length2) / denominator;

    let radius = center_x.hypot(center_y);
    let distance = (point.x - a.x - center_x).hypot(point.y - a.y - center_y);
    (radius - distance) / radius
}

/// `true` if no angle of the triangle is tiny. Circumcircles of such triangles can be
/// computed accurately in `f64`.
pub fn is_well_shaped(triangle: [Point2<f64>; 3]) -> bool {
    let [a, b, c] = triangle;
    let twice_area = ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs();
    let longest2 = [(a, b), (b, c), (c, a)]
        .iter()
        .map(|(from, to)| (to.x - from.x).powi(2) + (to.y - from.y).powi(2))
        .fold(0.0, f64::max);
    twice_area >= 1.0e-2 * longest2 && longest2.is_finite()
}
