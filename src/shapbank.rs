use std::io::Cursor;

use crate::{bytes_ext::ReadBytesExt, error::Error};

// Fixed positions within a shapbank payload.
const SPRITE_COUNT_POS: u64 = 42;
const OFFSET_TABLE_POS: u64 = 69;

/// Byte offset of a sprite record, relative to its resource's start
/// address. Kept distinct from absolute file offsets so the two never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteOffset(pub u32);

impl SpriteOffset {
    pub fn absolute(self, start_address: u32) -> u64 {
        start_address as u64 + self.0 as u64
    }
}

/// The sub-header at the front of a resource payload. Only the offset
/// table matters downstream; the rest is carried as parsed.
#[derive(Debug)]
pub struct Shapbank {
    pub sprite_count: u16,
    /// Two fields of unconfirmed meaning, possibly maximum widths.
    pub max_width: [u16; 2],
    /// The payload size again; the directory entry already stores it.
    /// Neither copy is confirmed authoritative, so no cross-check is done.
    pub size: u32,
    pub sprite_offsets: Vec<SpriteOffset>,
}

impl Shapbank {
    pub fn parse(payload: &[u8]) -> Result<Shapbank, Error> {
        let mut r = Cursor::new(payload);

        r.set_position(SPRITE_COUNT_POS);
        let sprite_count = r.read_le_u16()?;
        let max_width = [r.read_le_u16()?, r.read_le_u16()?];
        let size = r.read_le_u32()?;

        r.set_position(OFFSET_TABLE_POS);
        let mut sprite_offsets = Vec::with_capacity(sprite_count as usize);
        for _ in 0..sprite_count {
            sprite_offsets.push(SpriteOffset(r.read_le_u32()?));
        }

        Ok(Shapbank {
            sprite_count,
            max_width,
            size,
            sprite_offsets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_with(count: u16, offsets: &[u32]) -> Vec<u8> {
        let mut payload = vec![0u8; 69 + 4 * offsets.len()];
        let payload_len = payload.len() as u32;
        payload[42..44].copy_from_slice(&count.to_le_bytes());
        payload[44..46].copy_from_slice(&21u16.to_le_bytes());
        payload[46..48].copy_from_slice(&34u16.to_le_bytes());
        payload[48..52].copy_from_slice(&payload_len.to_le_bytes());
        for (i, offset) in offsets.iter().enumerate() {
            payload[69 + 4 * i..73 + 4 * i].copy_from_slice(&offset.to_le_bytes());
        }
        payload
    }

    #[test]
    fn reads_fields_at_fixed_positions() {
        let payload = payload_with(2, &[77, 144]);
        let shapbank = Shapbank::parse(&payload).unwrap();

        assert_eq!(shapbank.sprite_count, 2);
        assert_eq!(shapbank.max_width, [21, 34]);
        assert_eq!(shapbank.size, payload.len() as u32);
        assert_eq!(
            shapbank.sprite_offsets,
            vec![SpriteOffset(77), SpriteOffset(144)]
        );
    }

    #[test]
    fn zero_sprites_is_not_an_error() {
        let payload = payload_with(0, &[]);
        let shapbank = Shapbank::parse(&payload).unwrap();
        assert!(shapbank.sprite_offsets.is_empty());
    }

    #[test]
    fn short_payload_is_truncated_input() {
        let payload = payload_with(2, &[77]);
        let err = Shapbank::parse(&payload).unwrap_err();
        assert!(matches!(err, Error::TruncatedInput));
    }

    #[test]
    fn offsets_resolve_against_the_resource_start() {
        assert_eq!(SpriteOffset(77).absolute(1000), 1077);
    }
}
