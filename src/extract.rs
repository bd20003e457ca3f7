use std::{fs, path::Path};

use crate::{bitmap, error::Error, gfx_file::GfxFile};

/// Decodes every sprite in the archive into `<output_dir>/graphics/`,
/// in directory order. Any decode failure aborts the whole pass.
pub fn extract_graphics(gfx_path: &Path, output_dir: &Path) -> Result<(), Error> {
    let mut gfx = GfxFile::open(gfx_path)?;

    let graphics_dir = output_dir.join("graphics");
    fs::create_dir_all(&graphics_dir)?;

    let entries = gfx.entries.clone();
    for entry in entries.iter() {
        println!("Extracting `{}`", entry.name);

        let shapbank = gfx
            .read_shapbank(entry)
            .map_err(|e| e.in_resource(&entry.name))?;

        for (i, &offset) in shapbank.sprite_offsets.iter().enumerate() {
            let absolute = offset.absolute(entry.start_address);

            let sprite = gfx
                .read_sprite(entry, offset)
                .map_err(|e| e.in_sprite(&entry.name, i, absolute))?;

            let path = bitmap::bitmap_path(&graphics_dir, &entry.name, i);
            bitmap::write_bmp(&path, sprite)
                .map_err(|e| e.in_sprite(&entry.name, i, absolute))?;
        }
    }

    Ok(())
}
