//! Read-only views over decoded polygon meshes.

use crate::{Aabb, Polygon, Vertex};
use nalgebra::Point3;

/// Counts and indexed access for a polygon mesh.
///
/// Indices are the zero-based positions used by the file's polygon records,
/// so `vertex(i)` resolves exactly what a polygon index `i` refers to.
pub trait MeshTopology {
    /// Number of entries in the vertex table.
    fn vertex_count(&self) -> usize;

    /// Number of polygons, detail markers included.
    fn face_count(&self) -> usize;

    /// `true` when there is nothing to display: no vertices or no polygons.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Vertex at `index`, or `None` past the end of the table.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Polygon at `index` in file order, or `None` past the end.
    fn face(&self, index: usize) -> Option<&Polygon>;

    /// Vertex table in file order.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Polygons in file order.
    fn faces(&self) -> impl Iterator<Item = &Polygon>;
}

/// Spatial extent of a mesh.
pub trait MeshBounds {
    /// Box enclosing every vertex; [`Aabb::empty`] for a vertex-less mesh.
    fn bounds(&self) -> Aabb;

    /// Like [`bounds`](Self::bounds) but `None` instead of an empty box.
    fn bounds_opt(&self) -> Option<Aabb> {
        Some(self.bounds()).filter(|aabb| !aabb.is_empty())
    }

    /// Midpoint of [`bounds`](Self::bounds).
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
