/// Result of [side_query](crate::side_query): where a point lies relative to a directed line.
///
/// "Left" is counter-clockwise for a y axis pointing up.
#[derive(Debug, Clone, Copy)]
pub struct LineSideInfo {
    determinant: f64,
}

impl LineSideInfo {
    #[inline]
    pub(crate) fn from_determinant(determinant: f64) -> LineSideInfo {
        LineSideInfo { determinant }
    }

    /// `1` on the left side, `-1` on the right side, `0` on the line.
    fn sign(&self) -> i8 {
        if self.is_on_left_side() {
            1
        } else if self.is_on_right_side() {
            -1
        } else {
            0
        }
    }

    /// The point lies strictly to the left, `from`, `to` and the point turn counter-clockwise.
    pub fn is_on_left_side(&self) -> bool {
        self.determinant > 0.0
    }

    /// The point lies strictly to the right.
    pub fn is_on_right_side(&self) -> bool {
        self.determinant < 0.0
    }

    /// Left side or exactly on the line.
    pub fn is_on_left_side_or_on_line(&self) -> bool {
        !self.is_on_right_side()
    }

    /// Right side or exactly on the line.
    pub fn is_on_right_side_or_on_line(&self) -> bool {
        !self.is_on_left_side()
    }

    /// The three points are exactly collinear.
    #[inline]
    pub fn is_on_line(&self) -> bool {
        self.determinant == 0.0
    }

    /// Same query with the line's direction swapped.
    pub fn reversed(self) -> LineSideInfo {
        LineSideInfo::from_determinant(-self.determinant)
    }
}

impl PartialEq for LineSideInfo {
    fn eq(&self, other: &LineSideInfo) -> bool {
        self.sign() == other.sign()
    }
}

/// Result of [circle_query](crate::circle_query): where a point lies relative to the
/// circumcircle of a counter-clockwise triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleSide {
    /// Strictly inside
    Inside,
    /// Within [INCIRCLE_TOLERANCE](crate::INCIRCLE_TOLERANCE) of the circle
    OnCircle,
    /// Strictly outside
    Outside,
}

impl CircleSide {
    /// Shorthand for `self == CircleSide::Inside`.
    pub fn is_inside(self) -> bool {
        matches!(self, CircleSide::Inside)
    }

    /// Shorthand for `self == CircleSide::Outside`.
    pub fn is_outside(self) -> bool {
        matches!(self, CircleSide::Outside)
    }
}
