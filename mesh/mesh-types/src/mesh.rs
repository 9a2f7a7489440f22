//! Indexed polygon mesh.

use crate::{Aabb, MeshBounds, MeshTopology, Polygon, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed polygon mesh.
///
/// Vertices and faces are stored in the order they were read. That order
/// is significant: polygon indices refer to vertex positions in
/// `vertices`, and downstream consumers treat face order as drawing order.
///
/// # Example
///
/// ```
/// use mesh_types::{MeshTopology, PolyMesh, Polygon, Vertex};
///
/// let vertices = vec![
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// ];
/// let faces = vec![Polygon::new(vec![0, 1, 2], 3)];
///
/// let mesh = PolyMesh::from_parts(vertices, faces);
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.first_invalid_index(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex table; polygon indices point into it.
    pub vertices: Vec<Vertex>,

    /// Polygons as indices into the vertex array.
    pub faces: Vec<Polygon>,
}

impl PolyMesh {
    /// An object with no vertices and no polygons.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }

    /// Empty mesh with room reserved for `vertices` and `faces` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self::from_parts(Vec::with_capacity(vertices), Vec::with_capacity(faces))
    }

    /// Assembles a mesh without validating indices; see
    /// [`first_invalid_index`](Self::first_invalid_index).
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<Polygon>) -> Self {
        Self { vertices, faces }
    }

    /// Find the first polygon index that does not name a vertex.
    ///
    /// Returns `(face, index)` for the earliest offending polygon, or
    /// `None` when every index satisfies `index < vertex_count`.
    #[must_use]
    pub fn first_invalid_index(&self) -> Option<(usize, u32)> {
        let limit = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(face, polygon)| {
            polygon
                .indices
                .iter()
                .find(|&&index| index as usize >= limit)
                .map(|&index| (face, index))
        })
    }

    /// Number of polygons whose color code announces detail polygons.
    #[must_use]
    pub fn detail_marker_count(&self) -> usize {
        self.faces.iter().filter(|f| f.has_details()).count()
    }

    /// Total number of polygon corners across all faces.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(Polygon::len).sum()
    }

    /// Fan-triangulate every polygon with at least three indices.
    ///
    /// Degenerate polygons (points and lines) are dropped. Triangles come
    /// out in face order.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{PolyMesh, Polygon, Vertex};
    ///
    /// let mut mesh = PolyMesh::new();
    /// for i in 0..4 {
    ///     mesh.vertices.push(Vertex::from_coords(f64::from(i), 0.0, 0.0));
    /// }
    /// mesh.faces.push(Polygon::new(vec![0, 1, 2, 3], 0));
    /// mesh.faces.push(Polygon::new(vec![2, 3], 0));
    ///
    /// assert_eq!(mesh.triangulate(), vec![[0, 1, 2], [0, 2, 3]]);
    /// ```
    #[must_use]
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        self.faces.iter().flat_map(|f| f.fan_triangles()).collect()
    }
}

impl MeshTopology for PolyMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<&Polygon> {
        self.faces.get(index)
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = &Polygon> {
        self.faces.iter()
    }
}

impl MeshBounds for PolyMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}
