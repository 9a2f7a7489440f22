//! VideoScape-3D object decoding.
//!
//! VideoScape-3D objects come in two encodings, told apart by a four-byte
//! header:
//!
//! - **Text** (`3DG1`, any case) - vertex count, `x y z` lines, then one
//!   polygon per line
//! - **Binary** (`3DB1`) - big-endian integers, coordinates stored as
//!   Motorola Fast Floating Point words (see [`ffp_to_f64`])
//!
//! Both decode into a [`PolyMesh`] of vertices and polygons in file order.
//!
//! # Outcomes
//!
//! [`decode`] distinguishes three results:
//!
//! - `Ok(DecodeOutcome::Success(_))` - the object and its mesh
//! - `Ok(DecodeOutcome::SoftAbort(_))` - a polygon referenced a vertex
//!   that does not exist; nothing is loaded, but this is not an error
//! - `Err(DecodeError)` - the stream is not a readable object
//!
//! # Detail Polygons
//!
//! A negative color code announces a block of detail polygons. Only the
//! count that follows is skipped; the detail polygons themselves are read
//! as ordinary polygons. Whether the block can be skipped properly without
//! a full grammar for nested detail records is an open question.
//!
//! # Example
//!
//! ```
//! use mesh_vs3d::{decode_bytes, DecodeOutcome};
//! use mesh_types::MeshTopology;
//!
//! let object = b"3DG1\n3\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2 1\n";
//! let outcome = decode_bytes(object).unwrap();
//!
//! let mesh = outcome.mesh().unwrap();
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.faces[0].indices, vec![0, 1, 2]);
//! ```
//!
//! # Concurrency
//!
//! Decoding is synchronous and keeps no shared state; separate streams can
//! be decoded on separate threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod binary;
mod error;
mod ffp;
mod header;
mod outcome;
mod stream;
mod text;

pub use error::{DecodeError, DecodeResult};
pub use ffp::{EXPONENT_BIAS, Ffp, MANTISSA_BITS, ffp_to_f64};
pub use header::{BINARY_TAG, Encoding, HEADER_LEN, TEXT_TAG};
pub use mesh_types::{PolyMesh, Polygon, Vertex};
pub use outcome::{DecodeOutcome, Decoded, IndexOutOfRange};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mesh_types::MeshTopology;
use tracing::{debug, info, warn};

/// Decode a VideoScape-3D object from a stream.
///
/// The stream is read forward only, starting with the four header bytes.
/// Text objects are read to the end of the stream; binary objects until a
/// polygon record would start at the end of the stream. The stream is not
/// closed.
///
/// # Errors
///
/// Returns an error if:
/// - The header is not `3dg1` (any case) or `3DB1`
/// - A text-mode number does not parse, or a line has the wrong shape
/// - A binary-mode record is cut short
/// - The stream fails to read
///
/// An out-of-range polygon index is not an error; it yields
/// [`DecodeOutcome::SoftAbort`].
pub fn decode<R: BufRead>(mut reader: R) -> DecodeResult<DecodeOutcome> {
    let encoding = header::read_header(&mut reader)?;

    let outcome = match encoding {
        Encoding::Text => text::decode_text(reader)?,
        Encoding::Binary => binary::decode_binary(reader)?,
    };

    match &outcome {
        DecodeOutcome::Success(decoded) => {
            debug_assert_eq!(decoded.mesh.first_invalid_index(), None);
            info!(
                encoding = %decoded.encoding,
                vertices = decoded.mesh.vertex_count(),
                faces = decoded.mesh.face_count(),
                "decoded VideoScape-3D object"
            );
        }
        DecodeOutcome::SoftAbort(diagnostic) => {
            warn!(%encoding, "{diagnostic}");
        }
    }

    Ok(outcome)
}

/// Decode a VideoScape-3D object held in memory.
///
/// # Errors
///
/// See [`decode`].
pub fn decode_bytes(bytes: &[u8]) -> DecodeResult<DecodeOutcome> {
    decode(bytes)
}

/// Load a VideoScape-3D object from a file.
///
/// # Errors
///
/// Returns [`DecodeError::FileNotFound`] if the file does not exist, and
/// otherwise the errors of [`decode`].
///
/// # Example
///
/// ```no_run
/// use mesh_vs3d::load_vs3d;
///
/// let outcome = load_vs3d("spaceship.obj").unwrap();
/// if let Some(mesh) = outcome.mesh() {
///     println!("Loaded {} polygons", mesh.faces.len());
/// }
/// ```
pub fn load_vs3d<P: AsRef<Path>>(path: P) -> DecodeResult<DecodeOutcome> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DecodeError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DecodeError::Io(e)
        }
    })?;

    debug!(path = %path.display(), "loading VideoScape-3D object");
    decode(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_on_header() {
        let text = decode_bytes(b"3dg1\n0\n");
        assert!(matches!(text.map(|o| o.encoding()), Ok(Some(Encoding::Text))));

        let binary = decode_bytes(b"3DB1\x00\x00");
        assert!(matches!(binary.map(|o| o.encoding()), Ok(Some(Encoding::Binary))));
    }

    #[test]
    fn unrecognized_header() {
        assert!(matches!(
            decode_bytes(b"XXXX\n0\n"),
            Err(DecodeError::UnrecognizedHeader { .. })
        ));
    }

    #[test]
    fn empty_stream() {
        assert!(matches!(
            decode_bytes(b""),
            Err(DecodeError::UnrecognizedHeader { found }) if found.is_empty()
        ));
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_vs3d("nonexistent_file_12345.vs3d");
        match result {
            Err(DecodeError::FileNotFound { path }) => {
                assert!(path.to_string_lossy().contains("nonexistent"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
