//! Polygon mesh types for VideoScape-3D objects.
//!
//! This crate provides the in-memory form a decoded object takes:
//!
//! - [`Vertex`]: a bare position
//! - [`Polygon`]: vertex indices plus the raw color code
//! - [`PolyMesh`]: vertices and polygons in file order
//! - [`Aabb`]: extent of a vertex table
//!
//! # No I/O
//!
//! Nothing here reads or writes files. Decoders build a [`PolyMesh`] and hand it
//! to whatever consumes it (a viewer, an exporter, a scene graph).
//!
//! # Polygons, Not Triangles
//!
//! VideoScape-3D polygons carry any number of vertices, so faces are stored
//! as `Vec<u32>` rather than fixed triples. [`PolyMesh::triangulate`] fans
//! them out for triangle-only consumers.
//!
//! # Example
//!
//! ```
//! use mesh_types::{MeshTopology, PolyMesh, Polygon, Vertex};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push(Polygon::new(vec![0, 1, 2, 3], 1));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(mesh.triangulate().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod polygon;
mod traits;
mod vertex;

pub use bounds::Aabb;
pub use mesh::PolyMesh;
pub use polygon::Polygon;
pub use traits::{MeshBounds, MeshTopology};
pub use vertex::Vertex;

pub use nalgebra::{Point3, Vector3};
