use crate::normalize::{normalize, IndexedPoint};
use crate::{side_query, HasPosition};

/// Calculates the convex hull of a set of points.
///
/// Returns the indices of all extreme points in counter-clockwise order. Points that lie on a
/// hull edge without being a corner are not reported. The result starts at the point with the
/// smallest y coordinate, ties are broken by the smallest x coordinate.
///
/// Coincident points are reported by their smallest index. Points with a NaN or infinite
/// coordinate are ignored.
///
/// Degenerate inputs:
///  - No valid points: returns an empty `Vec`
///  - A single distinct point: returns its index
///  - Two distinct points: returns both indices, starting at the lower (then left) point
///    regardless of their input order
///  - All points on a line: returns the indices of both ends of the line
///
/// # Example
/// ```
/// use delahull::{hull, Point2};
///
/// let points = [
///     Point2::new(1.0f32, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
/// ];
/// assert_eq!(hull(&points), vec![3, 4, 0, 1]);
/// ```
pub fn hull<V: HasPosition>(points: &[V]) -> Vec<u32> {
    let points = normalize(points);
    if points.len() < 2 {
        return points.iter().map(|point| point.index).collect();
    }

    let mut chain = monotone_chain(&points);

    let start = chain
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.position.bottom_left_cmp(&b.position))
        .map(|(position, _)| position)
        .unwrap_or(0);
    chain.rotate_left(start);

    log::debug!(
        "Convex hull of {} distinct points has {} vertices",
        points.len(),
        chain.len()
    );

    chain.iter().map(|point| point.index).collect()
}

/// Andrew's monotone chain algorithm.
///
/// `points` must be sorted lexicographically and must contain at least two distinct positions.
/// The resulting chain is counter-clockwise and starts at the lexicographically smallest point.
fn monotone_chain(points: &[IndexedPoint]) -> Vec<IndexedPoint> {
    let mut chain: Vec<IndexedPoint> = Vec::with_capacity(2 * points.len());

    for point in points.iter() {
        pop_non_left_turns(&mut chain, 1, point);
        chain.push(*point);
    }
    chain.pop();

    let lower_len = chain.len() + 1;
    for point in points.iter().rev() {
        pop_non_left_turns(&mut chain, lower_len, point);
        chain.push(*point);
    }
    chain.pop();

    chain
}

fn pop_non_left_turns(chain: &mut Vec<IndexedPoint>, min_len: usize, next: &IndexedPoint) {
    while chain.len() > min_len {
        let from = chain[chain.len() - 2].position;
        let to = chain[chain.len() - 1].position;
        if side_query(from, to, next.position).is_on_left_side() {
            break;
        }
        chain.pop();
    }
}
