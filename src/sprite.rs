use std::io::Read;

use crate::{bytes_ext::ReadBytesExt, error::Error};

/// Bytes preceding each pixel row, discarded. Looks like 4 edge pixels at
/// 3 bytes each; skipping them lands on pixel data for most shapbanks,
/// but some sprites use a row layout this decoder does not understand yet.
const ROW_PADDING: usize = 12;

/// Reserved header bytes between the height field and the first row:
/// seven u16 fields (among them a duplicate width/height pair), an 8-byte
/// gap and three u32 fields. Meaning unconfirmed; skipped as one block so
/// the rows start at the right place.
const RESERVED_TAIL: usize = 38;

#[derive(Debug)]
pub struct SpriteRecord {
    /// Record size as declared in the header. Not used to bound the row
    /// reads; decoding derives everything from the dimensions.
    pub size: u32,
    pub width: u16,
    pub height: u16,
    /// RGB triples, row-major, top-to-bottom, `width * height * 3` bytes.
    pub data: Vec<u8>,
}

impl SpriteRecord {
    pub fn read<R: Read>(r: &mut R) -> Result<SpriteRecord, Error> {
        let size = r.read_le_u32()?;
        r.skip(2)?;
        let width = r.read_le_u16()?;
        r.skip(2)?;
        let height = r.read_le_u16()?;
        r.skip(RESERVED_TAIL)?;

        let row_len = width as usize * 3;
        let mut data = Vec::with_capacity(row_len * height as usize);
        let mut row = vec![0u8; row_len];

        for _ in 0..height {
            r.skip(ROW_PADDING)?;
            r.read_exact(row.as_mut_slice())?;
            data.extend_from_slice(row.as_slice());
        }

        Ok(SpriteRecord {
            size,
            width,
            height,
            data,
        })
    }
}
