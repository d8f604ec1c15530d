use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::{Num, Signed};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number types usable as input coordinates, usually `f32` or `f64`.
///
/// Coordinates are widened to `f64` before any predicate looks at them.
pub trait CoordNum: Num + Signed + PartialOrd + Copy + Debug + Into<f64> + From<f32> {}

impl<T> CoordNum for T where T: Num + Signed + PartialOrd + Copy + Debug + Into<f64> + From<f32> {}

/// A position in the plane.
///
/// Equality compares both coordinates, so `-0.0` equals `0.0` and NaN equals nothing.
#[derive(Debug, PartialEq, Eq, PartialOrd, Clone, Copy, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde")
)]
pub struct Point2<S> {
    /// Horizontal coordinate
    pub x: S,
    /// Vertical coordinate
    pub y: S,
}

impl<S> Point2<S> {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Point2 { x, y }
    }
}

impl<S: CoordNum> Point2<S> {
    pub(crate) fn to_f64(self) -> Point2<f64> {
        Point2::new(self.x.into(), self.y.into())
    }
}

impl Point2<f64> {
    pub(crate) fn sub(self, other: Self) -> Self {
        Point2::new(self.x - other.x, self.y - other.y)
    }

    pub(crate) fn length2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Orders by x first, then by y. The sweep order of both operations.
    ///
    /// Must only be used for finite coordinates.
    pub(crate) fn lexicographic_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// Orders by y first, then by x. The smallest point is the start of every hull.
    pub(crate) fn bottom_left_cmp(&self, other: &Self) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

impl<S> From<[S; 2]> for Point2<S> {
    #[inline]
    fn from([x, y]: [S; 2]) -> Self {
        Point2::new(x, y)
    }
}

impl<S> From<(S, S)> for Point2<S> {
    #[inline]
    fn from((x, y): (S, S)) -> Self {
        Point2::new(x, y)
    }
}

impl<S> From<Point2<S>> for [S; 2] {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        [point.x, point.y]
    }
}

impl<S> From<Point2<S>> for (S, S) {
    #[inline]
    fn from(point: Point2<S>) -> Self {
        (point.x, point.y)
    }
}

/// Anything that can be located in the plane.
///
/// [hull](crate::hull) and [delaunay](crate::delaunay) accept slices of any such type and
/// answer with slice indices, per point payloads never need to be copied.
///
/// ```
/// use delahull::{hull, HasPosition, Point2};
///
/// struct City {
///     name: &'static str,
///     location: Point2<f64>,
/// }
///
/// impl HasPosition for City {
///     type Scalar = f64;
///
///     fn position(&self) -> Point2<f64> {
///         self.location
///     }
/// }
///
/// let cities = [
///     City { name: "north", location: Point2::new(0.0, 10.0) },
///     City { name: "center", location: Point2::new(0.0, 5.0) },
///     City { name: "south west", location: Point2::new(-5.0, 0.0) },
///     City { name: "south east", location: Point2::new(5.0, 0.0) },
/// ];
/// let names: Vec<_> = hull(&cities).iter().map(|i| cities[*i as usize].name).collect();
/// assert_eq!(names, ["south west", "south east", "north"]);
/// ```
pub trait HasPosition {
    /// Coordinate type of the position.
    type Scalar: CoordNum;

    /// The location of this object. Must not change while an operation runs.
    fn position(&self) -> Point2<Self::Scalar>;
}

impl<S: CoordNum> HasPosition for Point2<S> {
    type Scalar = S;

    fn position(&self) -> Point2<S> {
        *self
    }
}

impl<S: CoordNum> HasPosition for [S; 2] {
    type Scalar = S;

    fn position(&self) -> Point2<S> {
        Point2::from(*self)
    }
}

impl<S: CoordNum> HasPosition for (S, S) {
    type Scalar = S;

    fn position(&self) -> Point2<S> {
        Point2::from(*self)
    }
}
