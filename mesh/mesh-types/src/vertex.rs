//! Vertex table entries.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry of an object's vertex table.
///
/// A VideoScape-3D vertex is a bare position: no normal, color or texture
/// coordinate travels with it.
///
/// ```
/// use mesh_types::{Point3, Vertex};
///
/// let corner = Vertex::from_coords(-150.0, 2.0, 0.25);
/// assert_eq!(corner, Vertex::new(Point3::new(-150.0, 2.0, 0.25)));
/// assert_eq!(corner.to_array(), [-150.0, 2.0, 0.25]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Object-space position.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Wraps an existing point.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Builds a vertex from its three coordinates, in file order.
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Point3::new(x, y, z).into()
    }

    /// `[x, y, z]`, the order the coordinates appear in a vertex record.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [f64; 3] {
        self.position.coords.into()
    }
}

impl From<Point3<f64>> for Vertex {
    #[inline]
    fn from(position: Point3<f64>) -> Self {
        Self { position }
    }
}

impl From<[f64; 3]> for Vertex {
    #[inline]
    fn from(coords: [f64; 3]) -> Self {
        Point3::from(coords).into()
    }
}

impl From<(f64, f64, f64)> for Vertex {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_coords(x, y, z)
    }
}
