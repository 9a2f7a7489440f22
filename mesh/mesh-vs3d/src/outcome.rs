//! Decode outcomes.

use std::fmt;

use mesh_types::PolyMesh;

use crate::header::Encoding;

/// A successfully decoded object.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// Which encoding the object was stored in.
    pub encoding: Encoding,
    /// Vertices and polygons in file order.
    pub mesh: PolyMesh,
}

/// Diagnostic for a polygon that names a vertex the object does not have.
///
/// The legacy importer treats this as "finished, nothing loaded" rather
/// than as an error, so it is reported through
/// [`DecodeOutcome::SoftAbort`] instead of [`DecodeError`](crate::DecodeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexOutOfRange {
    /// Zero-based ordinal of the offending polygon.
    pub face: usize,
    /// The index as written in the file.
    pub index: i64,
    /// Number of vertices the object declared.
    pub vertex_count: usize,
}

impl IndexOutOfRange {
    /// Create a diagnostic for polygon `face` referencing `index`.
    #[must_use]
    pub const fn new(face: usize, index: i64, vertex_count: usize) -> Self {
        Self {
            face,
            index,
            vertex_count,
        }
    }
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon indices out of range; object not loaded. \
             (polygon {} references vertex {}, object has {} vertices)",
            self.face, self.index, self.vertex_count
        )
    }
}

/// What a decode call produced when the stream itself was well formed.
///
/// Hard failures (bad header, bad number, truncated data) are returned as
/// `Err` alongside this type; see [`decode`](crate::decode).
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// The object decoded and every polygon index is valid.
    Success(Decoded),
    /// Decoding stopped at an out-of-range polygon index. Nothing is
    /// produced, and vertices or polygons read up to that point are
    /// discarded.
    SoftAbort(IndexOutOfRange),
}

impl DecodeOutcome {
    pub(crate) const fn success(encoding: Encoding, mesh: PolyMesh) -> Self {
        Self::Success(Decoded { encoding, mesh })
    }

    /// The decoded mesh, if there is one.
    #[must_use]
    pub const fn mesh(&self) -> Option<&PolyMesh> {
        match self {
            Self::Success(decoded) => Some(&decoded.mesh),
            Self::SoftAbort(_) => None,
        }
    }

    /// Take the decoded mesh, if there is one.
    #[must_use]
    pub fn into_mesh(self) -> Option<PolyMesh> {
        match self {
            Self::Success(decoded) => Some(decoded.mesh),
            Self::SoftAbort(_) => None,
        }
    }

    /// The encoding of a successfully decoded object.
    #[must_use]
    pub const fn encoding(&self) -> Option<Encoding> {
        match self {
            Self::Success(decoded) => Some(decoded.encoding),
            Self::SoftAbort(_) => None,
        }
    }

    /// Whether decoding stopped on an out-of-range index.
    #[must_use]
    pub const fn is_soft_abort(&self) -> bool {
        matches!(self, Self::SoftAbort(_))
    }
}
