use crate::{mitigate_underflow, validate_vertex, HasPosition, Point2};

/// A normalized input point together with its index in the input slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct IndexedPoint {
    pub position: Point2<f64>,
    pub index: u32,
}

impl HasPosition for IndexedPoint {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

/// Prepares input points for [hull](crate::hull) and [delaunay](crate::delaunay).
///
/// The returned points are sorted lexicographically by `(x, y)` and have pairwise distinct
/// positions. Out of a group of coincident points, only the point with the smallest index is
/// kept. Points with a NaN or too large coordinate are skipped. Coordinates too close to zero
/// are flushed to zero.
pub(crate) fn normalize<V: HasPosition>(points: &[V]) -> Vec<IndexedPoint> {
    let max_points = (u32::MAX as usize).saturating_add(1);
    let points = if points.len() > max_points {
        log::warn!(
            "Only the first {} of {} points can be indexed, ignoring the rest",
            max_points,
            points.len()
        );
        &points[..max_points]
    } else {
        points
    };

    let mut skipped = 0;
    let mut result = Vec::with_capacity(points.len());
    for (index, vertex) in points.iter().enumerate() {
        let position = mitigate_underflow(vertex.position().to_f64());
        if let Err(reason) = validate_vertex(&position) {
            log::debug!("Skipping point {} at {:?}: {}", index, position, reason);
            skipped += 1;
            continue;
        }

        result.push(IndexedPoint {
            position,
            index: index as u32,
        });
    }

    if skipped > 0 {
        log::debug!("Skipped {} of {} points", skipped, points.len());
    }

    result.sort_unstable_by(|a, b| {
        a.position
            .lexicographic_cmp(&b.position)
            .then(a.index.cmp(&b.index))
    });

    // Keeps the first point of each run, which has the smallest index
    result.dedup_by(|next, kept| next.position == kept.position);

    result
}
