use std::{
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use crate::{
    bytes_ext::ReadBytesExt,
    error::Error,
    shapbank::{Shapbank, SpriteOffset},
    sprite::SpriteRecord,
};

const NAME_FIELD_LEN: usize = 48;

/// An opened graphics archive: one reader for the whole pass plus the
/// parsed top-level directory. Every payload and sprite read starts with
/// an absolute seek, so reads never depend on a previous cursor position.
#[derive(Debug)]
pub struct GfxFile<R> {
    reader: R,
    pub entries: Vec<GfxEntry>,
}

/// One directory record: a named group of sprites sharing a shapbank
/// payload. The declared dimensions are directory metadata only; decoding
/// trusts the per-sprite header instead.
#[derive(Debug, Clone)]
pub struct GfxEntry {
    pub name: String,
    pub start_address: u32,
    pub payload_size: u32,
    pub declared_width: u16,
    pub declared_height: u16,
}

impl GfxFile<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        GfxFile::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> GfxFile<R> {
    pub fn new(mut reader: R) -> Result<Self, Error> {
        let entry_count = reader.read_le_u32()? as usize;
        let mut entries = Vec::with_capacity(entry_count);

        for _ in 0..entry_count {
            let name = reader.read_ascii(NAME_FIELD_LEN)?;
            let start_address = reader.read_le_u32()?;
            reader.skip(4)?;
            let payload_size = reader.read_le_u32()?;
            reader.skip(20)?;
            let declared_width = reader.read_le_u16()?;
            let declared_height = reader.read_le_u16()?;

            entries.push(GfxEntry {
                name,
                start_address,
                payload_size,
                declared_width,
                declared_height,
            });
        }

        Ok(GfxFile { reader, entries })
    }

    pub fn read_payload(&mut self, entry: &GfxEntry) -> Result<Vec<u8>, Error> {
        self.reader
            .seek(SeekFrom::Start(entry.start_address as u64))?;

        let mut payload = vec![0; entry.payload_size as usize];
        self.reader.read_exact(payload.as_mut_slice())?;

        Ok(payload)
    }

    pub fn read_shapbank(&mut self, entry: &GfxEntry) -> Result<Shapbank, Error> {
        let payload = self.read_payload(entry)?;
        Shapbank::parse(payload.as_slice())
    }

    pub fn read_sprite(
        &mut self,
        entry: &GfxEntry,
        offset: SpriteOffset,
    ) -> Result<SpriteRecord, Error> {
        self.reader
            .seek(SeekFrom::Start(offset.absolute(entry.start_address)))?;

        SpriteRecord::read(&mut self.reader)
    }
}
