//! Header detection.
//!
//! Every VideoScape-3D object starts with a four-byte tag naming its
//! encoding. The text tag is matched without regard to case, the binary
//! tag exactly.

use std::fmt;
use std::io::Read;

use tracing::debug;

use crate::error::{DecodeError, DecodeResult};
use crate::stream::read_fully;

/// Length of the header tag in bytes.
pub const HEADER_LEN: usize = 4;

/// Header of the text encoding (matched case-insensitively).
pub const TEXT_TAG: &[u8; HEADER_LEN] = b"3dg1";

/// Header of the binary encoding (matched exactly).
pub const BINARY_TAG: &[u8; HEADER_LEN] = b"3DB1";

/// The two VideoScape-3D encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Line-oriented ASCII, decimal numbers.
    Text,
    /// Big-endian integers with FFP coordinates.
    Binary,
}

impl Encoding {
    /// Identify the encoding from a header.
    ///
    /// Returns `None` unless `header` is exactly four bytes holding one of
    /// the two tags.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_vs3d::Encoding;
    ///
    /// assert_eq!(Encoding::detect(b"3DG1"), Some(Encoding::Text));
    /// assert_eq!(Encoding::detect(b"3DB1"), Some(Encoding::Binary));
    /// assert_eq!(Encoding::detect(b"3db1"), None);
    /// ```
    #[must_use]
    pub fn detect(header: &[u8]) -> Option<Self> {
        if header.eq_ignore_ascii_case(TEXT_TAG) {
            Some(Self::Text)
        } else if header == BINARY_TAG {
            Some(Self::Binary)
        } else {
            None
        }
    }

    /// Canonical header tag for this encoding.
    #[must_use]
    pub const fn tag(self) -> &'static [u8; HEADER_LEN] {
        match self {
            Self::Text => TEXT_TAG,
            Self::Binary => BINARY_TAG,
        }
    }

    /// Short lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read exactly the header bytes and identify the encoding.
///
/// Nothing past the header is consumed.
pub(crate) fn read_header<R: Read + ?Sized>(reader: &mut R) -> DecodeResult<Encoding> {
    let mut header = [0u8; HEADER_LEN];
    let got = read_fully(reader, &mut header)?;
    let found = &header[..got];

    let encoding = Encoding::detect(found).ok_or_else(|| DecodeError::UnrecognizedHeader {
        found: found.to_vec(),
    })?;
    debug!(%encoding, "detected VideoScape-3D header");
    Ok(encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_tag_any_case() {
        for tag in [b"3dg1", b"3DG1", b"3dG1", b"3Dg1"] {
            assert_eq!(Encoding::detect(tag), Some(Encoding::Text));
        }
    }

    #[test]
    fn binary_tag_exact_case() {
        assert_eq!(Encoding::detect(b"3DB1"), Some(Encoding::Binary));
        for tag in [b"3db1", b"3Db1", b"3dB1"] {
            assert_eq!(Encoding::detect(tag), None);
        }
    }

    #[test]
    fn other_headers_rejected() {
        assert_eq!(Encoding::detect(b"XXXX"), None);
        assert_eq!(Encoding::detect(b"3dg2"), None);
        assert_eq!(Encoding::detect(b"3dg"), None);
        assert_eq!(Encoding::detect(b"3dg1 "), None);
        assert_eq!(Encoding::detect(b""), None);
    }

    #[test]
    fn tags_round_trip_through_detect() {
        for encoding in [Encoding::Text, Encoding::Binary] {
            assert_eq!(Encoding::detect(encoding.tag()), Some(encoding));
        }
    }

    #[test]
    fn read_header_leaves_rest_unread() {
        let mut input: &[u8] = b"3DB1\x00\x01";
        assert!(matches!(read_header(&mut input), Ok(Encoding::Binary)));
        assert_eq!(input, b"\x00\x01");
    }

    #[test]
    fn short_input_is_unrecognized() {
        let mut input: &[u8] = b"3d";
        match read_header(&mut input) {
            Err(DecodeError::UnrecognizedHeader { found }) => assert_eq!(found, b"3d"),
            other => panic!("expected UnrecognizedHeader, got {other:?}"),
        }
    }
}
