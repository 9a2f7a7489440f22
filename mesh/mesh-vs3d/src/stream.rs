//! Byte-counted reads over a forward-only stream.

use std::io::{ErrorKind, Read};

use crate::error::{DecodeError, DecodeResult};

/// Read until `buf` is full or the stream ends, returning the bytes read.
///
/// Unlike [`Read::read_exact`], a short read is reported as a count so
/// callers can tell a clean end of stream (zero bytes) from truncation.
pub(crate) fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> DecodeResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(DecodeError::Io(e)),
        }
    }
    Ok(filled)
}

/// A reader that tracks its byte offset for error reporting.
pub(crate) struct ByteReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> ByteReader<R> {
    /// Wrap `inner`, which has already had `offset` bytes consumed.
    pub(crate) const fn new(inner: R, offset: u64) -> Self {
        Self { inner, offset }
    }

    /// Fill `buf` completely or fail with `TruncatedStream`.
    pub(crate) fn read_exact(&mut self, buf: &mut [u8]) -> DecodeResult<()> {
        let got = read_fully(&mut self.inner, buf)?;
        if got < buf.len() {
            return Err(DecodeError::TruncatedStream {
                offset: self.offset,
                expected: buf.len(),
                got,
            });
        }
        self.offset += got as u64;
        Ok(())
    }

    /// Read a big-endian `u16`, or `None` if the stream is already at its end.
    ///
    /// A single trailing byte is truncation, not a clean end.
    pub(crate) fn read_u16_or_end(&mut self) -> DecodeResult<Option<u16>> {
        let mut buf = [0u8; 2];
        match read_fully(&mut self.inner, &mut buf)? {
            0 => Ok(None),
            2 => {
                self.offset += 2;
                Ok(Some(u16::from_be_bytes(buf)))
            }
            got => Err(DecodeError::TruncatedStream {
                offset: self.offset,
                expected: 2,
                got,
            }),
        }
    }

    /// Read a big-endian `u16` that must be present.
    pub(crate) fn read_u16(&mut self) -> DecodeResult<u16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Current offset from the start of the stream.
    pub(crate) const fn offset(&self) -> u64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Hands out one byte per call and interrupts every other call.
    struct Trickle<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            let Some((&first, rest)) = self.data.split_first() else {
                return Ok(0);
            };
            if buf.is_empty() {
                return Ok(0);
            }
            buf[0] = first;
            self.data = rest;
            Ok(1)
        }
    }

    #[test]
    fn read_fully_survives_short_reads_and_interrupts() {
        let mut reader = Trickle {
            data: &[1, 2, 3, 4, 5],
            interrupt: false,
        };
        let mut buf = [0u8; 4];
        assert_eq!(read_fully(&mut reader, &mut buf).ok(), Some(4));
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn u16_clean_end() {
        let mut reader = ByteReader::new(Cursor::new(Vec::new()), 0);
        assert!(matches!(reader.read_u16_or_end(), Ok(None)));
    }

    #[test]
    fn u16_single_byte_is_truncation() {
        let mut reader = ByteReader::new(Cursor::new(vec![0x12]), 10);
        assert!(matches!(
            reader.read_u16_or_end(),
            Err(DecodeError::TruncatedStream {
                offset: 10,
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn u16_is_big_endian_and_advances_offset() {
        let mut reader = ByteReader::new(Cursor::new(vec![0x12, 0x34, 0xAB, 0xCD]), 4);
        assert!(matches!(reader.read_u16(), Ok(0x1234)));
        assert_eq!(reader.offset(), 6);
        assert!(matches!(reader.read_u16_or_end(), Ok(Some(0xABCD))));
        assert_eq!(reader.offset(), 8);
    }
}
