use super::error::{SerError, SerKind, SerResult};

/// Read position over a borrowed wire payload.
///
/// The reader is `Copy`: multi-step decoders advance a copy and write it back
/// only once every step succeeded, so a failed read leaves the original
/// untouched.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    input: &'a [u8],
    consumed: usize,
}

impl<'a> ByteReader<'a> {
    /// Starts reading at the first byte of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, consumed: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.consumed
    }

    /// Unread bytes.
    pub fn remaining(&self) -> usize {
        self.unread().len()
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.consumed == self.input.len()
    }

    fn unread(&self) -> &'a [u8] {
        &self.input[self.consumed..]
    }

    /// Borrows the next `len` bytes and advances past them.
    pub fn read_exact(
        &mut self,
        len: usize,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<&'a [u8]> {
        let unread = self.unread();
        let taken = unread
            .get(..len)
            .ok_or_else(|| SerError::unexpected_end(kind, field, len, unread.len()))?;
        self.consumed += len;
        Ok(taken)
    }

    /// Copies the next `N` bytes into an array.
    pub fn read_array<const N: usize>(
        &mut self,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<[u8; N]> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_exact(N, kind, field)?);
        Ok(array)
    }
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
    fn from(input: &'a [u8]) -> Self {
        Self::new(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_read_leaves_offset_untouched() {
        let data = [1u8, 2, 3];
        let mut reader = ByteReader::new(&data);
        assert_eq!(reader.read_exact(2, SerKind::Bytes, "head").unwrap(), &[1, 2]);
        let err = reader
            .read_exact(2, SerKind::Bytes, "tail")
            .expect_err("only one byte left");
        assert_eq!(err, SerError::unexpected_end(SerKind::Bytes, "tail", 2, 1));
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.read_array::<1>(SerKind::Bytes, "tail").unwrap(), [3]);
        assert!(reader.is_empty());
    }

    #[test]
    fn huge_length_does_not_overflow() {
        let data = [0u8; 4];
        let mut reader = ByteReader::new(&data);
        reader.read_exact(1, SerKind::Bytes, "skip").unwrap();
        assert!(reader.read_exact(usize::MAX, SerKind::Bytes, "huge").is_err());
        assert_eq!(reader.remaining(), 3);
    }
}
