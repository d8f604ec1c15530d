//! # Delahull
//! Index based convex hulls and Delaunay triangulations of two dimensional point sets.
//!
//! Both operations take a slice of points and refer to the input by its indices, any per point
//! data can stay with the caller:
//!  - [hull] returns the corners of the convex hull in counter-clockwise order
//!  - [delaunay] returns the triangles of a Delaunay triangulation
//!
//! ```
//! use delahull::{delaunay, hull, Point2};
//!
//! let points = [
//!     Point2::new(0.0f32, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(2.0, 1.0),
//! ];
//!
//! assert_eq!(hull(&points), vec![0, 1, 2]);
//! assert_eq!(delaunay(&points), vec![[0, 1, 3], [0, 3, 2], [1, 2, 3]]);
//! ```
//!
//! # Robustness
//! Coordinates are converted to `f64`. Orientation tests are exact, in-circle tests are exact
//! in sign but treat results within [INCIRCLE_TOLERANCE] as cocircular. Coincident points are
//! merged into the point with the smallest index. Points with NaN or infinite coordinates are
//! skipped, see [validate_vertex].
//!
//! # Features
//!  - `serde`: Implements `Serialize` and `Deserialize` for [Point2]
//!
//! Diagnostics are emitted through the [log](https://docs.rs/log) facade.

#![warn(clippy::all)]
#![warn(elided_lifetimes_in_paths)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod convex_hull;
mod delaunay_core;
mod delaunay_triangulation;
mod normalize;
mod point;

#[cfg(test)]
mod test_utilities;

pub use crate::convex_hull::hull;
pub use crate::delaunay_triangulation::delaunay;
pub use crate::point::{CoordNum, HasPosition, Point2};

pub use crate::delaunay_core::math::{
    circle_query, is_ordered_ccw, mitigate_underflow, polygon_area, side_query, signed_area_2,
    triangle_area, validate_coordinate, validate_vertex, InvalidCoordinate, INCIRCLE_TOLERANCE,
    MAX_ALLOWED_VALUE, MIN_ALLOWED_VALUE,
};
pub use crate::delaunay_core::{CircleSide, LineSideInfo};
