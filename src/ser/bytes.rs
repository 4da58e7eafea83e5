use super::cursor::ByteReader;
use super::error::{RangeResult, SerError, SerKind, SerResult};
use super::uleb128;

/// Appends raw bytes to the output buffer without a length prefix.
pub fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes);
}

/// Writes a ULEB128 length prefix followed by the provided bytes.
pub fn write_prefixed_bytes(out: &mut Vec<u8>, bytes: &[u8]) -> RangeResult<()> {
    uleb128::write_length(out, bytes.len())?;
    write_bytes(out, bytes);
    Ok(())
}

/// Writes a string as its length-prefixed UTF-8 bytes.
pub fn write_str(out: &mut Vec<u8>, value: &str) -> RangeResult<()> {
    write_prefixed_bytes(out, value.as_bytes())
}

/// Reads a ULEB128 length prefix and borrows the payload bytes.
pub fn read_prefixed_slice<'a>(
    cursor: &mut ByteReader<'a>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<&'a [u8]> {
    let mut ahead = *cursor;
    let len = uleb128::read_length(&mut ahead, kind, field)?;
    let payload = ahead.read_exact(len, kind, field)?;
    *cursor = ahead;
    Ok(payload)
}

/// Reads a ULEB128 length prefix and returns the owned payload bytes.
pub fn read_prefixed_bytes(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<Vec<u8>> {
    read_prefixed_slice(cursor, kind, field).map(<[u8]>::to_vec)
}

/// Reads a length-prefixed UTF-8 string.
pub fn read_str(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<String> {
    let mut ahead = *cursor;
    let payload = read_prefixed_slice(&mut ahead, kind, field)?;
    let value = core::str::from_utf8(payload)
        .map_err(|_| SerError::InvalidUtf8 { kind, field })?
        .to_owned();
    *cursor = ahead;
    Ok(value)
}

/// Reads a fixed-length byte slice, erroring if the buffer is shorter than expected.
pub fn read_exact_bytes<'a>(
    cursor: &mut ByteReader<'a>,
    kind: SerKind,
    field: &'static str,
    len: usize,
) -> SerResult<&'a [u8]> {
    cursor.read_exact(len, kind, field)
}

/// Ensures that the reader consumed all bytes, otherwise returns a trailing-bytes error.
pub fn ensure_consumed(cursor: &ByteReader<'_>, kind: SerKind) -> SerResult<()> {
    let remaining = cursor.remaining();
    if remaining == 0 {
        Ok(())
    } else {
        Err(SerError::trailing_bytes(kind, cursor.position(), remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_is_rejected_without_advancing() {
        let data = [0x02, 0xc3, 0x28];
        let mut cursor = ByteReader::new(&data);
        let err = read_str(&mut cursor, SerKind::Str, "name").unwrap_err();
        assert_eq!(
            err,
            SerError::InvalidUtf8 {
                kind: SerKind::Str,
                field: "name"
            }
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn empty_payload_is_a_single_zero_byte() {
        let mut out = Vec::new();
        write_prefixed_bytes(&mut out, &[]).unwrap();
        assert_eq!(out, [0x00]);
        let mut cursor = ByteReader::new(&out);
        assert!(read_prefixed_slice(&mut cursor, SerKind::Bytes, "empty")
            .unwrap()
            .is_empty());
        ensure_consumed(&cursor, SerKind::Bytes).unwrap();
    }
}
