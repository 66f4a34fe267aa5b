use std::io::{self, Read};

use crate::error::PersistError;

/// Byte reader that counts what it consumes.
///
/// Both layouts declare their total length up front through the header
/// dimensions, so when a stream ends early the error can state exactly how
/// many bytes were promised and how many arrived.
pub(crate) struct TrackedReader<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> TrackedReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Read one byte. `expected` is the total stream length implied by the
    /// header, reported if the stream ends before the byte arrives.
    pub(crate) fn require_u8(&mut self, expected: u64) -> Result<u8, PersistError> {
        let mut byte = [0u8; 1];
        match self.inner.read_exact(&mut byte) {
            Ok(()) => {
                self.consumed += 1;
                Ok(byte[0])
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(PersistError::Truncated {
                expected,
                actual: self.consumed,
            }),
            Err(e) => Err(PersistError::Io(e)),
        }
    }

    /// Read a little-endian u32.
    pub(crate) fn require_u32_le(&mut self, expected: u64) -> Result<u32, PersistError> {
        let mut bytes = [0u8; 4];
        for slot in &mut bytes {
            *slot = self.require_u8(expected)?;
        }
        Ok(u32::from_le_bytes(bytes))
    }
}
