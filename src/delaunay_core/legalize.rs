use smallvec::SmallVec;

use super::math;
use super::mesh::{EdgeId, Mesh};
use crate::CircleSide;

/// Flips allowed per edge during [legalize_all].
///
/// Flipping terminates well below this bound. It is only reached if tolerant in-circle
/// decisions of overlapping quads contradict each other.
pub(crate) const MAX_FLIPS_PER_EDGE: usize = 16;

/// Result of [legalize_all].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FinalPass {
    pub flips: usize,
    /// `false` if the pass gave up after [MAX_FLIPS_PER_EDGE] flips per edge.
    pub converged: bool,
}

/// Flips `edge` and the edges it exposes until all of them are legal.
///
/// The apex on the left of `edge` must be the vertex that was just added, every flip then
/// connects that vertex to one more vertex. Returns the number of flips.
pub(crate) fn legalize_from(mesh: &mut Mesh, edge: EdgeId) -> usize {
    let mut pending: SmallVec<[EdgeId; 8]> = SmallVec::new();
    pending.push(edge);

    let mut flips = 0;
    while let Some(edge) = pending.pop() {
        if !should_flip(mesh, edge) {
            continue;
        }
        // Both triangles on the far side of the quad now face the new vertex
        let twin = edge.twin();
        let exposed = [mesh.next(twin), mesh.prev(twin)];
        mesh.flip(edge);
        flips += 1;
        pending.extend(exposed);
    }
    flips
}

/// Checks every edge once more and flips those that are not legal.
///
/// Edges next to a flipped edge are checked again. Gives up with a warning after
/// [MAX_FLIPS_PER_EDGE] flips per edge.
pub(crate) fn legalize_all(mesh: &mut Mesh) -> FinalPass {
    let max_flips = MAX_FLIPS_PER_EDGE * mesh.num_edges();
    let mut pending: Vec<_> = mesh.edges().collect();

    let mut flips = 0;
    while let Some(edge) = pending.pop() {
        if !should_flip(mesh, edge) {
            continue;
        }

        if flips >= max_flips {
            log::warn!(
                "Stopped edge legalization after {} flips, the triangulation may not be Delaunay",
                flips
            );
            return FinalPass {
                flips,
                converged: false,
            };
        }

        let twin = edge.twin();
        let quad = [
            mesh.next(edge),
            mesh.prev(edge),
            mesh.next(twin),
            mesh.prev(twin),
        ];
        mesh.flip(edge);
        flips += 1;
        pending.extend(quad.map(EdgeId::even));
    }

    FinalPass {
        flips,
        converged: true,
    }
}

/// Returns `true` if `edge` should be replaced by the other diagonal of its quad.
///
/// The legal diagonal depends only on the four corners of the quad: with `m` the corner with
/// the smallest index and `a`, `b`, `c` the other corners in counter-clockwise order, `m - b`
/// is legal unless `m` lies outside of the circumcircle of `a`, `b`, `c`. Cocircular quads thus
/// keep the diagonal through their smallest index. Outer edges and diagonals of quads that are
/// not strictly convex are never flipped.
pub(crate) fn should_flip(mesh: &Mesh, edge: EdgeId) -> bool {
    let (left_apex, right_apex) = match (mesh.apex(edge), mesh.apex(edge.twin())) {
        (Some(left), Some(right)) => (left, right),
        _ => return false,
    };

    let [from, to, left, right] = [
        mesh.origin(edge),
        mesh.destination(edge),
        left_apex,
        right_apex,
    ]
    .map(|vertex| *mesh.point(vertex));

    // The other diagonal must separate both ends of the edge
    let from_side = math::side_query(right.position, left.position, from.position);
    let to_side = math::side_query(right.position, left.position, to.position);
    let is_convex = (from_side.is_on_left_side() && to_side.is_on_right_side())
        || (from_side.is_on_right_side() && to_side.is_on_left_side());
    if !is_convex {
        return false;
    }

    // Counter-clockwise, the current diagonal connects the even positions
    let quad = [from, right, to, left];
    let smallest = (0..4)
        .min_by_key(|position| quad[*position].index)
        .unwrap_or(0);

    let [m, a, b, c] = [0, 1, 2, 3].map(|offset| quad[(smallest + offset) % 4].position);
    let keeps_smallest_diagonal = math::circle_query(a, b, c, m) != CircleSide::Outside;
    let smallest_diagonal_is_current = smallest % 2 == 0;

    keeps_smallest_diagonal != smallest_diagonal_is_current
}
