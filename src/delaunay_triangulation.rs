use crate::delaunay_core::triangulate;
use crate::normalize::normalize;
use crate::HasPosition;

/// Calculates a two dimensional [Delaunay triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation).
///
/// A Delaunay triangulation fulfills the *Delaunay Property*: No input point is contained in the
/// [circumcircle](https://en.wikipedia.org/wiki/Circumscribed_circle) of any triangle.
/// The triangles cover the convex hull of the input points without overlapping.
///
/// Each triangle is returned as three input indices in counter-clockwise order, starting with
/// its smallest index. The triangles are sorted. The output depends only on the input, calling
/// this function twice yields identical results.
///
/// Coincident points are represented by their smallest index. Points with a NaN or infinite
/// coordinate are ignored. If fewer than three distinct points remain, or if all of them lie on
/// a line, no triangle is returned.
///
/// # Cocircular points
/// Four or more points on a common circle admit several Delaunay triangulations. In-circle
/// tests that lie within [INCIRCLE_TOLERANCE](crate::INCIRCLE_TOLERANCE) of zero are treated
/// as cocircular. Whenever two diagonals of a convex quad are equally valid, the one incident
/// to the smallest index is used.
///
/// # Example
/// ```
/// use delahull::{delaunay, Point2};
///
/// let points = [
///     Point2::new(0.0f32, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ];
/// assert_eq!(delaunay(&points), vec![[0, 1, 2], [0, 2, 3]]);
/// ```
pub fn delaunay<V: HasPosition>(points: &[V]) -> Vec<[u32; 3]> {
    let points = normalize(points);
    if points.len() < 3 {
        return Vec::new();
    }

    let mesh = triangulate(&points);

    let mut triangles: Vec<_> = mesh
        .triangles()
        .map(|triangle| smallest_index_first(triangle.map(|point| point.index)))
        .collect();
    triangles.sort_unstable();
    triangles
}

/// Rotates a triangle so that its smallest index comes first. Keeps the orientation.
fn smallest_index_first(triangle: [u32; 3]) -> [u32; 3] {
    let [a, b, c] = triangle;
    if a < b && a < c {
        [a, b, c]
    } else if b < c {
        [b, c, a]
    } else {
        [c, a, b]
    }
}
