use super::legalize::{legalize_all, legalize_from};
use super::mesh::{EdgeId, Mesh, VertexId};
use crate::normalize::IndexedPoint;
use crate::Point2;

/// Triangulates normalized points.
///
/// `points` must be sorted lexicographically and must not contain duplicate positions (see
/// [normalize](crate::normalize::normalize)).
pub(crate) fn triangulate(points: &[IndexedPoint]) -> Mesh {
    let mut mesh = sweep(points);
    let pass = legalize_all(&mut mesh);
    log::debug!(
        "Triangulated {} points into {} triangles with {} hull edges. Final pass: {} flips, converged: {}",
        points.len(),
        mesh.num_triangles(),
        mesh.outer_boundary().count(),
        pass.flips,
        pass.converged
    );
    mesh
}

/// Adds the points one by one, flipping edges after every insertion.
///
/// Each point is lexicographically larger than all previous points and thus lies outside of
/// their convex hull. It only needs to be connected to the hull edges it can see.
pub(super) fn sweep(points: &[IndexedPoint]) -> Mesh {
    let mut mesh = Mesh::with_capacity(points.len());
    let mut points = points.iter().copied();

    match points.next() {
        Some(first) => mesh.add_first_vertex(first),
        None => return mesh,
    };

    for point in points {
        if mesh.num_triangles() == 0 {
            add_to_line(&mut mesh, point);
        } else {
            let base = visible_hull_edge(&mesh, point.position);
            add_beyond_hull(&mut mesh, base, point);
        }
    }
    mesh
}

/// Adds a point while all previous points are collinear.
fn add_to_line(mesh: &mut Mesh, point: IndexedPoint) -> VertexId {
    if mesh.num_vertices() == 1 {
        return mesh.extend_line(point);
    }

    let side = mesh.side_of(EdgeId::FIRST, point.position);
    if side.is_on_left_side() {
        add_beyond_hull(mesh, EdgeId::FIRST, point)
    } else if side.is_on_right_side() {
        add_beyond_hull(mesh, EdgeId::FIRST.twin(), point)
    } else {
        mesh.extend_line(point)
    }
}

/// Finds an outer edge that has `position` strictly on its left side.
///
/// The last vertex is the lexicographically largest one and thus a corner of the convex hull.
/// A point that is even larger sees at least one of the two hull edges at that corner.
fn visible_hull_edge(mesh: &Mesh, position: Point2<f64>) -> EdgeId {
    let anchor = mesh
        .anchor()
        .expect("A mesh with triangles always has an anchor. This is a bug.");

    if mesh.side_of(anchor, position).is_on_left_side() {
        anchor
    } else {
        mesh.prev(anchor)
    }
}

/// Connects a point outside of the convex hull to every hull edge it can see.
///
/// `base` must be an outer edge that has the point strictly on its left side. Starting from
/// `base`, the walk follows the outer boundary in both directions for as long as the point
/// stays visible.
fn add_beyond_hull(mesh: &mut Mesh, base: EdgeId, point: IndexedPoint) -> VertexId {
    let position = point.position;
    debug_assert!(mesh.side_of(base, position).is_on_left_side());

    let vertex = mesh.attach_apex(base, point);
    let mut into_vertex = mesh.prev(base).twin();
    let mut out_of_vertex = mesh.next(base).twin();
    let mut flips = legalize_from(mesh, base);

    loop {
        let before = mesh.prev(into_vertex);
        if !mesh.side_of(before, position).is_on_left_side() {
            break;
        }
        into_vertex = mesh.close_notch(before);
        flips += legalize_from(mesh, before);
    }

    loop {
        let after = mesh.next(out_of_vertex);
        if !mesh.side_of(after, position).is_on_left_side() {
            break;
        }
        out_of_vertex = mesh.close_notch(out_of_vertex);
        flips += legalize_from(mesh, after);
    }

    log::trace!(
        "Added point {} beyond the convex hull with {} flips, {} triangles",
        point.index,
        flips,
        mesh.num_triangles()
    );
    vertex
}
