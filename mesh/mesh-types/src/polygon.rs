//! Polygon type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon referencing vertices of its mesh by index.
///
/// Indices are kept in file order, which is also the winding order. The
/// color code is carried through untouched; materials are not derived
/// from it. A negative color code marks a polygon that was followed by a
/// block of detail polygons in the source file.
///
/// Polygons with fewer than three indices are representable. Files in
/// the wild contain points and lines stored as polygons, and rejecting
/// them is left to the consumer.
///
/// # Example
///
/// ```
/// use mesh_types::Polygon;
///
/// let quad = Polygon::new(vec![0, 1, 2, 3], 7);
/// assert_eq!(quad.len(), 4);
/// assert!(!quad.has_details());
///
/// let tris: Vec<[u32; 3]> = quad.fan_triangles().collect();
/// assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Vertex indices, in winding order.
    pub indices: Vec<u32>,

    /// Raw color code as stored in the file.
    pub color: i32,
}

impl Polygon {
    /// Create a polygon from its indices and color code.
    #[inline]
    #[must_use]
    pub const fn new(indices: Vec<u32>, color: i32) -> Self {
        Self { indices, color }
    }

    /// Number of vertex indices.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the polygon has no indices at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check if the polygon encloses no area (fewer than three indices).
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.indices.len() < 3
    }

    /// Check if the color code announces detail polygons.
    #[inline]
    #[must_use]
    pub const fn has_details(&self) -> bool {
        self.color < 0
    }

    /// Split the polygon into a triangle fan around its first vertex.
    ///
    /// Degenerate polygons yield nothing. The fan is only exact for
    /// convex polygons, which is what the format produces.
    pub fn fan_triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        let first = self.indices.first().copied().unwrap_or_default();
        self.indices
            .windows(2)
            .skip(1)
            .map(move |pair| [first, pair[0], pair[1]])
    }
}
