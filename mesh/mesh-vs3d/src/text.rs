//! Text encoding (`3dg1`).
//!
//! # Format
//!
//! ```text
//! 3DG1
//! <vertex count>
//! <x> <y> <z>                          (vertex count lines)
//! <n> <i0> <i1> ... <i(n-1)> <color>   (until end of stream)
//! ```
//!
//! A polygon with a negative color code is followed by a line holding its
//! detail polygon count. That line is consumed and ignored; the detail
//! polygons after it are read as ordinary polygons.
//!
//! Blank lines in the polygon section are skipped rather than rejected.

use std::io::BufRead;

use mesh_types::{PolyMesh, Polygon, Vertex};
use tracing::{debug, warn};

use crate::error::{DecodeError, DecodeResult};
use crate::header::Encoding;
use crate::outcome::{DecodeOutcome, IndexOutOfRange};

/// Upper bound on vertex capacity reserved from an untrusted count.
const MAX_RESERVE: usize = 1 << 16;

/// A line of input with its one-based number.
struct Line<'a> {
    number: usize,
    text: &'a str,
}

/// Line reader that keeps count of where it is in the file.
struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    number: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a reader positioned just after the header tag, on line 1.
    const fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            number: 0,
        }
    }

    /// Read the next line, or `None` at end of stream.
    fn next_line(&mut self) -> DecodeResult<Option<Line<'_>>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.number += 1;
        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| DecodeError::malformed_record(self.number, "line is not valid UTF-8"))?;
        Ok(Some(Line {
            number: self.number,
            text,
        }))
    }

    /// Consume the next line without looking at it.
    ///
    /// Returns `false` if the stream had already ended.
    fn skip_line(&mut self) -> DecodeResult<bool> {
        self.buf.clear();
        let read = self.inner.read_until(b'\n', &mut self.buf)?;
        if read > 0 {
            self.number += 1;
        }
        Ok(read > 0)
    }

    /// Number of the most recently read line.
    const fn line_number(&self) -> usize {
        self.number
    }
}

/// Decode the body of a text-encoded object.
///
/// `reader` must be positioned directly after the four header bytes.
pub(crate) fn decode_text<R: BufRead>(reader: R) -> DecodeResult<DecodeOutcome> {
    let mut lines = LineReader::new(reader);

    // Whatever follows the tag on the header line.
    lines.skip_line()?;

    let nverts = read_vertex_count(&mut lines)?;
    debug!(vertices = nverts, "reading text vertices");

    let mut mesh = PolyMesh::with_capacity(nverts.min(MAX_RESERVE), 0);
    for read in 0..nverts {
        let expected_line = lines.line_number() + 1;
        let Some(line) = lines.next_line()? else {
            return Err(DecodeError::malformed_record(
                expected_line,
                format!("stream ended after {read} of {nverts} vertices"),
            ));
        };
        let vertex = parse_vertex(&line)?;
        mesh.vertices.push(vertex);
    }

    while let Some(line) = lines.next_line()? {
        if line.text.trim().is_empty() {
            continue;
        }

        let polygon = match parse_polygon(&line, nverts, mesh.faces.len())? {
            Ok(polygon) => polygon,
            Err(diagnostic) => return Ok(DecodeOutcome::SoftAbort(diagnostic)),
        };

        let has_details = polygon.has_details();
        mesh.faces.push(polygon);

        if has_details {
            let number = line.number;
            // The detail polygons themselves are left in the stream.
            if lines.skip_line()? {
                warn!(
                    line = number + 1,
                    "skipped detail polygon count; detail polygons are read as ordinary polygons"
                );
            }
        }
    }

    Ok(DecodeOutcome::success(Encoding::Text, mesh))
}

fn read_vertex_count<R: BufRead>(lines: &mut LineReader<R>) -> DecodeResult<usize> {
    let expected_line = lines.line_number() + 1;
    let Some(line) = lines.next_line()? else {
        return Err(DecodeError::malformed_number(expected_line, ""));
    };
    let token = line.text.trim();
    token
        .parse::<usize>()
        .map_err(|_| DecodeError::malformed_number(line.number, token))
}

fn parse_vertex(line: &Line<'_>) -> DecodeResult<Vertex> {
    let tokens: Vec<&str> = line.text.split_whitespace().collect();
    let [x, y, z] = tokens.as_slice() else {
        return Err(DecodeError::malformed_record(
            line.number,
            format!("expected 3 coordinates, found {}", tokens.len()),
        ));
    };

    let coord = |token: &str| {
        token
            .parse::<f64>()
            .map_err(|_| DecodeError::malformed_number(line.number, token))
    };
    Ok(Vertex::from_coords(coord(*x)?, coord(*y)?, coord(*z)?))
}

/// Parse one polygon line.
///
/// The outer `Result` carries hard failures, the inner one the soft abort
/// for an index outside `0..nverts`.
fn parse_polygon(
    line: &Line<'_>,
    nverts: usize,
    face: usize,
) -> DecodeResult<Result<Polygon, IndexOutOfRange>> {
    // Every token must be an integer, including any after the color code.
    let values = line
        .text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| DecodeError::malformed_number(line.number, token))
        })
        .collect::<DecodeResult<Vec<i64>>>()?;

    let Some((&count, rest)) = values.split_first() else {
        return Err(DecodeError::malformed_record(line.number, "missing polygon vertex count"));
    };
    let count = usize::try_from(count).map_err(|_| {
        DecodeError::malformed_record(line.number, format!("negative vertex count {count}"))
    })?;
    let Some((&raw_color, index_values)) = rest.get(..=count).and_then(<[i64]>::split_last) else {
        return Err(DecodeError::malformed_record(
            line.number,
            format!(
                "polygon of {count} vertices needs {} values after the count, found {}",
                count.saturating_add(1),
                rest.len()
            ),
        ));
    };
    let color = i32::try_from(raw_color).map_err(|_| {
        DecodeError::malformed_record(line.number, format!("color code {raw_color} out of range"))
    })?;

    let mut indices = Vec::with_capacity(count);
    for &index in index_values {
        match u32::try_from(index) {
            Ok(valid) if (valid as usize) < nverts => indices.push(valid),
            _ => return Ok(Err(IndexOutOfRange::new(face, index, nverts))),
        }
    }

    Ok(Ok(Polygon::new(indices, color)))
}
