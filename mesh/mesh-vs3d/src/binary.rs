//! Binary encoding (`3DB1`).
//!
//! # Format
//!
//! All integers are big-endian.
//!
//! ```text
//! UINT16          – Vertex count
//! foreach vertex
//!     UINT32[3]   – X, Y, Z as FFP words
//! end
//! until end of stream
//!     UINT16      – Polygon vertex count N
//!     UINT16[N]   – Vertex indices
//!     INT16       – Color code
//!     UINT16      – Detail polygon count (only if color code < 0)
//! end
//! ```
//!
//! The detail polygon count is consumed and ignored; the detail polygons
//! after it are read as ordinary polygons.

use std::io::Read;

use mesh_types::{PolyMesh, Polygon, Vertex};
use tracing::{debug, warn};

use crate::error::DecodeResult;
use crate::ffp::ffp_to_f64;
use crate::header::{Encoding, HEADER_LEN};
use crate::outcome::{DecodeOutcome, IndexOutOfRange};
use crate::stream::ByteReader;

/// Size of one vertex record (three FFP words).
const VERTEX_SIZE: usize = 12;

/// Decode the body of a binary-encoded object.
///
/// `reader` must be positioned directly after the four header bytes.
pub(crate) fn decode_binary<R: Read>(reader: R) -> DecodeResult<DecodeOutcome> {
    let mut reader = ByteReader::new(reader, HEADER_LEN as u64);

    let nverts = reader.read_u16()?;
    debug!(vertices = nverts, "reading binary vertices");

    let mut mesh = PolyMesh::with_capacity(usize::from(nverts), 0);
    let mut record = [0u8; VERTEX_SIZE];
    for _ in 0..nverts {
        reader.read_exact(&mut record)?;
        mesh.vertices.push(read_vertex(&record));
    }

    let mut buf = Vec::new();
    while let Some(count) = reader.read_u16_or_end()? {
        let count = usize::from(count);

        // Indices plus the trailing color code.
        buf.resize((count + 1) * 2, 0);
        reader.read_exact(&mut buf)?;

        let mut words = buf.chunks_exact(2).map(|w| [w[0], w[1]]);
        let mut indices = Vec::with_capacity(count);
        for word in words.by_ref().take(count) {
            let index = u16::from_be_bytes(word);
            if index >= nverts {
                return Ok(DecodeOutcome::SoftAbort(IndexOutOfRange::new(
                    mesh.faces.len(),
                    i64::from(index),
                    usize::from(nverts),
                )));
            }
            indices.push(u32::from(index));
        }
        let color = words.next().map_or(0, i16::from_be_bytes);

        mesh.faces.push(Polygon::new(indices, i32::from(color)));

        if color < 0 {
            let offset = reader.offset();
            // The detail polygons themselves are left in the stream.
            if reader.read_u16_or_end()?.is_some() {
                warn!(
                    offset,
                    "skipped detail polygon count; detail polygons are read as ordinary polygons"
                );
            }
        }
    }

    Ok(DecodeOutcome::success(Encoding::Binary, mesh))
}

/// Read a vertex from 12 bytes (3 FFP words).
fn read_vertex(buf: &[u8; VERTEX_SIZE]) -> Vertex {
    let coord = |i: usize| {
        let word = u32::from_be_bytes([buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]);
        ffp_to_f64(word)
    };
    Vertex::from_coords(coord(0), coord(4), coord(8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use mesh_types::MeshTopology;

    const ONE: u32 = 0x8000_0041;
    const MINUS_TWO: u32 = 0x8000_00C2;

    fn vertex_bytes(out: &mut Vec<u8>, [x, y, z]: [u32; 3]) {
        out.extend_from_slice(&x.to_be_bytes());
        out.extend_from_slice(&y.to_be_bytes());
        out.extend_from_slice(&z.to_be_bytes());
    }

    fn polygon_bytes(out: &mut Vec<u8>, indices: &[u16], color: i16) {
        #[allow(clippy::cast_possible_truncation)]
        let count = indices.len() as u16;
        out.extend_from_slice(&count.to_be_bytes());
        for index in indices {
            out.extend_from_slice(&index.to_be_bytes());
        }
        out.extend_from_slice(&color.to_be_bytes());
    }

    fn triangle_body() -> Vec<u8> {
        let mut body = 3u16.to_be_bytes().to_vec();
        vertex_bytes(&mut body, [0, 0, 0]);
        vertex_bytes(&mut body, [ONE, 0, 0]);
        vertex_bytes(&mut body, [0, MINUS_TWO, 0]);
        body
    }

    fn mesh_of(body: &[u8]) -> PolyMesh {
        match decode_binary(body) {
            Ok(DecodeOutcome::Success(decoded)) => decoded.mesh,
            other => panic!("expected a mesh, got {other:?}"),
        }
    }

    #[test]
    fn vertices_go_through_ffp() {
        let mesh = mesh_of(&triangle_body());
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertices[1].to_array(), [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[2].to_array(), [0.0, -2.0, 0.0]);
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn polygons_until_end_of_stream() {
        let mut body = triangle_body();
        polygon_bytes(&mut body, &[0, 1, 2], 5);
        polygon_bytes(&mut body, &[2, 1], 0x7FFF);
        let mesh = mesh_of(&body);
        assert_eq!(
            mesh.faces,
            vec![
                Polygon::new(vec![0, 1, 2], 5),
                Polygon::new(vec![2, 1], 0x7FFF)
            ]
        );
    }

    #[test]
    fn zero_vertex_polygon() {
        let mut body = triangle_body();
        polygon_bytes(&mut body, &[], 1);
        assert_eq!(mesh_of(&body).faces, vec![Polygon::new(vec![], 1)]);
    }

    #[test]
    fn last_valid_index_accepted() {
        let mut body = triangle_body();
        polygon_bytes(&mut body, &[2], 0);
        assert_eq!(mesh_of(&body).face_count(), 1);
    }

    #[test]
    fn index_equal_to_vertex_count_soft_aborts() {
        let mut body = triangle_body();
        polygon_bytes(&mut body, &[0, 1, 2], 0);
        polygon_bytes(&mut body, &[0, 3], 0);
        assert!(matches!(
            decode_binary(body.as_slice()),
            Ok(DecodeOutcome::SoftAbort(IndexOutOfRange {
                face: 1,
                index: 3,
                vertex_count: 3
            }))
        ));
    }

    #[test]
    fn detail_count_is_eaten() {
        let mut body = triangle_body();
        polygon_bytes(&mut body, &[0, 1, 2], -1);
        body.extend_from_slice(&1u16.to_be_bytes());
        polygon_bytes(&mut body, &[1, 2], 7);
        let mesh = mesh_of(&body);
        assert_eq!(
            mesh.faces,
            vec![Polygon::new(vec![0, 1, 2], -1), Polygon::new(vec![1, 2], 7)]
        );
    }

    #[test]
    fn detail_count_missing_at_end() {
        let mut body = triangle_body();
        polygon_bytes(&mut body, &[0, 1, 2], -3);
        assert_eq!(mesh_of(&body).faces.len(), 1);
    }

    #[test]
    fn missing_vertex_count() {
        assert!(matches!(
            decode_binary(&[0x00][..]),
            Err(DecodeError::TruncatedStream {
                offset: 4,
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn short_vertex_record() {
        let mut body = 2u16.to_be_bytes().to_vec();
        vertex_bytes(&mut body, [ONE, ONE, ONE]);
        body.extend_from_slice(&[0x80, 0x00, 0x00]);
        assert!(matches!(
            decode_binary(body.as_slice()),
            Err(DecodeError::TruncatedStream {
                offset: 18,
                expected: 12,
                got: 3
            })
        ));
    }

    #[test]
    fn short_polygon_record() {
        let mut body = triangle_body();
        body.extend_from_slice(&3u16.to_be_bytes());
        body.extend_from_slice(&[0, 0, 0, 1]);
        assert!(matches!(
            decode_binary(body.as_slice()),
            Err(DecodeError::TruncatedStream {
                expected: 8,
                got: 4,
                ..
            })
        ));
    }

    #[test]
    fn stray_trailing_byte() {
        let mut body = triangle_body();
        body.push(0);
        assert!(matches!(
            decode_binary(body.as_slice()),
            Err(DecodeError::TruncatedStream {
                expected: 2,
                got: 1,
                ..
            })
        ));
    }
}
