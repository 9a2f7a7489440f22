//! Bounding boxes for vertex tables.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned box spanned by a set of positions.
///
/// The empty box is inverted (`min = +inf`, `max = -inf`), so folding the
/// first point into it yields that point and an object without vertices
/// never reports a box at the origin.
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let corners = [Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.0, 5.0)];
/// let aabb = Aabb::from_points(&corners);
/// assert_eq!(aabb.min, Point3::new(-1.0, 0.0, 3.0));
/// assert_eq!(aabb.max, Point3::new(1.0, 2.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Smallest coordinate seen on each axis.
    pub min: Point3<f64>,
    /// Largest coordinate seen on each axis.
    pub max: Point3<f64>,
}

impl Aabb {
    /// The inverted box that contains nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::from([f64::INFINITY; 3]),
            max: Point3::from([f64::NEG_INFINITY; 3]),
        }
    }

    /// Tightest box around `points`; [`Aabb::empty`] when there are none.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Grows the box just enough to cover `point`.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// `true` until a point has been included.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.iter().zip(self.max.iter()).any(|(lo, hi)| lo > hi)
    }

    /// Extent along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Midpoint between the two corners.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Longest of the three extents.
    #[inline]
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.size().max()
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
