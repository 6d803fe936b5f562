use std::io::{self, ErrorKind, Read};

/// Number of leading bytes inspected for a signature match.
///
/// One past the largest offset any built-in rule constrains.
pub const PREFIX_LEN: usize = 16;

/// The leading bytes of a file, zero-filled past what was actually read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePrefix {
    bytes: [u8; PREFIX_LEN],
    len: usize,
}

impl FilePrefix {
    pub fn from_bytes(data: &[u8]) -> Self {
        let len = data.len().min(PREFIX_LEN);
        let mut bytes = [0u8; PREFIX_LEN];
        bytes[..len].copy_from_slice(&data[..len]);
        Self { bytes, len }
    }

    /// Reads up to [`PREFIX_LEN`] bytes, continuing through short reads
    /// until the buffer is full or the reader reports end of file.
    pub fn read_from<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = [0u8; PREFIX_LEN];
        let mut len = 0;

        while len < PREFIX_LEN {
            match reader.read(&mut bytes[len..]) {
                Ok(0) => break,
                Ok(n) => len += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(Self { bytes, len })
    }

    /// Byte at `offset`, or the `0x00` pad value past the bytes read.
    pub fn byte_at(&self, offset: usize) -> u8 {
        if offset < self.len {
            self.bytes[offset]
        } else {
            0
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}
