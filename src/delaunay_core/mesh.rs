use super::math;
use crate::normalize::IndexedPoint;
use crate::{LineSideInfo, Point2};

/// Refers to one half of an edge.
///
/// Both halves of an edge are stored next to each other, so the twin of a half-edge only
/// differs in the lowest bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct EdgeId(usize);

impl EdgeId {
    /// The first half-edge ever created. Runs from the second vertex to the first one.
    pub(crate) const FIRST: EdgeId = EdgeId(0);

    #[inline]
    pub(crate) fn twin(self) -> EdgeId {
        EdgeId(self.0 ^ 1)
    }

    /// The even half of this edge. Identifies the undirected edge.
    #[inline]
    pub(crate) fn even(self) -> EdgeId {
        EdgeId(self.0 & !1)
    }
}

/// Refers to a vertex. Vertices are numbered in the order they were added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct VertexId(usize);

#[derive(Clone, Copy, Debug)]
struct HalfEdge {
    origin: VertexId,
    next: EdgeId,
    prev: EdgeId,
    outer: bool,
}

/// A half-edge mesh grown by a sweep over lexicographically sorted points.
///
/// Every half-edge either belongs to a counter-clockwise triangle on its left side or is
/// *outer*: outer half-edges have the unbounded region on their left and run clockwise around
/// the convex hull. While all vertices are collinear, both halves of every edge are outer.
///
/// Points are only ever added beyond the convex hull, next to the most recently added vertex.
/// The mesh therefore tracks a single outer half-edge leaving that vertex and never needs to
/// find hull edges elsewhere.
#[derive(Clone, Debug, Default)]
pub(crate) struct Mesh {
    vertices: Vec<IndexedPoint>,
    half_edges: Vec<HalfEdge>,
    num_triangles: usize,
    /// Outer half-edge whose origin is the last added vertex.
    anchor: Option<EdgeId>,
}

impl Mesh {
    /// Reserves room for the triangulation of `num_points` points.
    pub(crate) fn with_capacity(num_points: usize) -> Self {
        Mesh {
            vertices: Vec::with_capacity(num_points),
            half_edges: Vec::with_capacity(num_points.saturating_mul(6)),
            num_triangles: 0,
            anchor: None,
        }
    }

    pub(crate) fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn num_edges(&self) -> usize {
        self.half_edges.len() / 2
    }

    pub(crate) fn num_triangles(&self) -> usize {
        self.num_triangles
    }

    pub(crate) fn last_vertex(&self) -> Option<VertexId> {
        self.vertices.len().checked_sub(1).map(VertexId)
    }

    /// The outer half-edge leaving [Self::last_vertex]. `None` while the mesh has no edges.
    pub(crate) fn anchor(&self) -> Option<EdgeId> {
        self.anchor
    }

    pub(crate) fn point(&self, vertex: VertexId) -> &IndexedPoint {
        &self.vertices[vertex.0]
    }

    pub(crate) fn origin(&self, edge: EdgeId) -> VertexId {
        self.half_edge(edge).origin
    }

    pub(crate) fn destination(&self, edge: EdgeId) -> VertexId {
        self.origin(edge.twin())
    }

    pub(crate) fn next(&self, edge: EdgeId) -> EdgeId {
        self.half_edge(edge).next
    }

    pub(crate) fn prev(&self, edge: EdgeId) -> EdgeId {
        self.half_edge(edge).prev
    }

    pub(crate) fn is_outer(&self, edge: EdgeId) -> bool {
        self.half_edge(edge).outer
    }

    /// The vertex opposite of `edge` in the triangle on its left. `None` for outer half-edges.
    pub(crate) fn apex(&self, edge: EdgeId) -> Option<VertexId> {
        if self.is_outer(edge) {
            None
        } else {
            Some(self.origin(self.prev(edge)))
        }
    }

    pub(crate) fn side_of(&self, edge: EdgeId, position: Point2<f64>) -> LineSideInfo {
        let from = self.point(self.origin(edge)).position;
        let to = self.point(self.destination(edge)).position;
        math::side_query(from, to, position)
    }

    /// The even half of every edge.
    pub(crate) fn edges(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.half_edges.len()).step_by(2).map(EdgeId)
    }

    /// Iterates over all triangles. Each triangle lists its points counter-clockwise.
    pub(crate) fn triangles(&self) -> impl Iterator<Item = [IndexedPoint; 3]> + '_ {
        // A triangle is reported by its half-edge with the smallest id
        (0..self.half_edges.len())
            .map(EdgeId)
            .filter(move |edge| {
                !self.is_outer(*edge) && *edge < self.next(*edge) && *edge < self.prev(*edge)
            })
            .map(move |edge| {
                [edge, self.next(edge), self.prev(edge)].map(|edge| *self.point(self.origin(edge)))
            })
    }

    /// Walks once around the outer boundary, starting at the anchor.
    pub(crate) fn outer_boundary(&self) -> impl Iterator<Item = EdgeId> + '_ {
        let mut current = self.anchor;
        std::iter::from_fn(move || {
            let edge = current?;
            let next = self.next(edge);
            current = if Some(next) == self.anchor {
                None
            } else {
                Some(next)
            };
            Some(edge)
        })
    }

    /// Adds the very first vertex. It stays isolated until [Self::extend_line] is called.
    pub(crate) fn add_first_vertex(&mut self, point: IndexedPoint) -> VertexId {
        assert!(self.vertices.is_empty(), "The mesh already has vertices");
        self.push_vertex(point)
    }

    /// Connects a new vertex to the last vertex with a single edge.
    ///
    /// Only valid while there are no triangles and the new vertex continues the line formed by
    /// all previous vertices beyond the last vertex.
    pub(crate) fn extend_line(&mut self, point: IndexedPoint) -> VertexId {
        debug_assert_eq!(self.num_triangles, 0);
        let last = self
            .last_vertex()
            .expect("Cannot extend the line of an empty mesh");
        let new_vertex = self.push_vertex(point);

        let backward = self.push_edge(new_vertex, last, true, true);
        let forward = backward.twin();

        match self.anchor {
            None => {
                self.link(backward, forward);
                self.link(forward, backward);
            }
            Some(anchor) => {
                // The last vertex is an end of the line, the only half-edge reaching it is
                // the twin of the anchor
                let into_last = anchor.twin();
                debug_assert_eq!(self.prev(anchor), into_last);
                self.link(into_last, forward);
                self.link(forward, backward);
                self.link(backward, anchor);
            }
        }

        self.anchor = Some(backward);
        new_vertex
    }

    /// Adds a new vertex beyond the outer half-edge `base` and connects it to both ends of
    /// `base`, creating one triangle.
    ///
    /// The new vertex must lie strictly left of `base`.
    pub(crate) fn attach_apex(&mut self, base: EdgeId, point: IndexedPoint) -> VertexId {
        debug_assert!(self.is_outer(base));
        let from = self.origin(base);
        let to = self.destination(base);
        let before = self.prev(base);
        let after = self.next(base);

        let apex = self.push_vertex(point);
        let to_apex = self.push_edge(to, apex, false, true);
        let apex_from = self.push_edge(apex, from, false, true);
        let apex_to = to_apex.twin();
        let from_apex = apex_from.twin();

        self.half_edge_mut(base).outer = false;
        self.link(base, to_apex);
        self.link(to_apex, apex_from);
        self.link(apex_from, base);

        self.link(before, from_apex);
        self.link(from_apex, apex_to);
        self.link(apex_to, after);

        self.num_triangles += 1;
        self.anchor = Some(apex_to);
        apex
    }

    /// Fills the notch between the outer half-edge `first` and its successor with a triangle.
    ///
    /// The origin of `first`, its destination and the destination of its successor must be
    /// ordered counter-clockwise. Returns the outer half-edge that replaces both.
    pub(crate) fn close_notch(&mut self, first: EdgeId) -> EdgeId {
        let second = self.next(first);
        debug_assert!(self.is_outer(first) && self.is_outer(second));
        let before = self.prev(first);
        let after = self.next(second);

        let closing = self.push_edge(self.destination(second), self.origin(first), false, true);
        let shortcut = closing.twin();

        self.half_edge_mut(first).outer = false;
        self.half_edge_mut(second).outer = false;
        self.link(second, closing);
        self.link(closing, first);

        self.link(before, shortcut);
        self.link(shortcut, after);

        self.num_triangles += 1;
        if self.anchor == Some(first) {
            self.anchor = Some(shortcut);
        }
        shortcut
    }

    /// Replaces an edge between two triangles by the other diagonal of their quad.
    ///
    /// The quad must be strictly convex. Both halves of the edge keep their ids, the half-edge
    /// `edge` then starts at the apex it had before the flip.
    pub(crate) fn flip(&mut self, edge: EdgeId) {
        let twin = edge.twin();
        debug_assert!(!self.is_outer(edge) && !self.is_outer(twin));

        let (edge_next, edge_prev) = (self.next(edge), self.prev(edge));
        let (twin_next, twin_prev) = (self.next(twin), self.prev(twin));

        self.half_edge_mut(edge).origin = self.origin(edge_prev);
        self.half_edge_mut(twin).origin = self.origin(twin_prev);

        self.link(edge, twin_prev);
        self.link(twin_prev, edge_next);
        self.link(edge_next, edge);

        self.link(twin, edge_prev);
        self.link(edge_prev, twin_next);
        self.link(twin_next, twin);
    }

    fn push_vertex(&mut self, point: IndexedPoint) -> VertexId {
        self.vertices.push(point);
        VertexId(self.vertices.len() - 1)
    }

    /// Pushes both halves of a new edge and returns the half starting at `from`. The halves are
    /// linked to themselves until the caller links them into the mesh.
    fn push_edge(&mut self, from: VertexId, to: VertexId, outer: bool, twin_outer: bool) -> EdgeId {
        let edge = EdgeId(self.half_edges.len());
        for (origin, outer, id) in [(from, outer, edge), (to, twin_outer, edge.twin())] {
            self.half_edges.push(HalfEdge {
                origin,
                next: id,
                prev: id,
                outer,
            });
        }
        edge
    }

    fn link(&mut self, edge: EdgeId, next: EdgeId) {
        self.half_edge_mut(edge).next = next;
        self.half_edge_mut(next).prev = edge;
    }

    fn half_edge(&self, edge: EdgeId) -> &HalfEdge {
        &self.half_edges[edge.0]
    }

    fn half_edge_mut(&mut self, edge: EdgeId) -> &mut HalfEdge {
        &mut self.half_edges[edge.0]
    }

    #[cfg(test)]
    pub(crate) fn sanity_check(&self) {
        if self.half_edges.is_empty() {
            assert!(self.vertices.len() <= 1);
            assert!(self.anchor.is_none());
            assert_eq!(self.num_triangles, 0);
            return;
        }

        let anchor = self.anchor.expect("A mesh with edges has an anchor");
        assert!(self.is_outer(anchor));
        assert_eq!(Some(self.origin(anchor)), self.last_vertex());

        let mut has_edge = vec![false; self.vertices.len()];
        let mut inner_half_edges = 0;
        for edge in (0..self.half_edges.len()).map(EdgeId) {
            has_edge[self.origin(edge).0] = true;
            assert_eq!(self.next(self.prev(edge)), edge);
            assert_eq!(self.prev(self.next(edge)), edge);
            assert_eq!(self.origin(self.next(edge)), self.destination(edge));
            assert_ne!(self.origin(edge), self.destination(edge));
            assert_eq!(self.is_outer(self.next(edge)), self.is_outer(edge));

            if !self.is_outer(edge) {
                inner_half_edges += 1;
                assert_eq!(self.next(self.next(self.next(edge))), edge);
                let apex = self.apex(edge).map(|vertex| self.point(vertex).position);
                assert!(self.side_of(edge, apex.unwrap()).is_on_left_side());
            }
        }

        assert!(has_edge.into_iter().all(|has_edge| has_edge));
        assert_eq!(inner_half_edges, 3 * self.num_triangles);
        assert_eq!(self.triangles().count(), self.num_triangles);
    }
}
