pub trait ReadBytesExt: std::io::Read {
    #[inline]
    fn read_u8(&mut self) -> std::io::Result<u8> {
        let mut buf = [0; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    #[inline]
    fn read_le_u16(&mut self) -> std::io::Result<u16> {
        let mut buf = [0; 2];
        self.read_exact(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    #[inline]
    fn read_le_u32(&mut self) -> std::io::Result<u32> {
        let mut buf = [0; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Reads a fixed-size name field: ASCII, right-padded with NUL bytes.
    /// The padding is consumed but not part of the returned string.
    fn read_ascii(&mut self, len: usize) -> std::io::Result<String> {
        let mut buf = vec![0u8; len];
        self.read_exact(&mut buf)?;

        if !buf.is_ascii() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "non-ascii byte in string field",
            ));
        }

        let end = buf.iter().position(|&b| b == 0).unwrap_or(len);
        Ok(buf[..end].iter().map(|&b| b as char).collect())
    }

    fn skip(&mut self, n: usize) -> std::io::Result<()> {
        let mut buf = [0u8; 64];
        let mut remaining = n;
        while remaining > 0 {
            let take = remaining.min(buf.len());
            self.read_exact(&mut buf[..take])?;
            remaining -= take;
        }
        Ok(())
    }
}

impl<R: std::io::Read> ReadBytesExt for R {}

#[cfg(test)]
mod tests {
    use super::ReadBytesExt;
    use std::io::{Cursor, ErrorKind};

    #[test]
    fn integers_are_little_endian() {
        let mut r = Cursor::new(vec![0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12]);
        assert_eq!(r.read_u8().unwrap(), 0x01);
        assert_eq!(r.read_le_u16().unwrap(), 0x1234);
        assert_eq!(r.read_le_u32().unwrap(), 0x12345678);
    }

    #[test]
    fn ascii_field_is_trimmed() {
        let mut field = b"House".to_vec();
        field.resize(16, 0);
        let mut r = Cursor::new(field);
        assert_eq!(r.read_ascii(16).unwrap(), "House");
    }

    #[test]
    fn ascii_field_rejects_non_ascii() {
        let mut field = b"Geb\xe4ude".to_vec();
        field.resize(16, 0);
        let mut r = Cursor::new(field);
        let err = r.read_ascii(16).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn skip_past_end_is_unexpected_eof() {
        let mut r = Cursor::new(vec![0u8; 10]);
        r.skip(8).unwrap();
        let err = r.skip(8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
