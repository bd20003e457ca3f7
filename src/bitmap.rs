use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::{error::Error, sprite::SpriteRecord};

/// The first sprite of a resource takes the bare name; later sprites get
/// a `+N` suffix with their index.
pub fn bitmap_path(dir: &Path, name: &str, index: usize) -> PathBuf {
    if index == 0 {
        dir.join(format!("{}.bmp", name))
    } else {
        dir.join(format!("{}+{}.bmp", name, index))
    }
}

pub fn write_bmp(path: &Path, sprite: SpriteRecord) -> Result<(), Error> {
    let len = sprite.data.len();
    let image = RgbImage::from_raw(sprite.width as u32, sprite.height as u32, sprite.data)
        .ok_or(Error::UnsupportedSpriteLayout {
            width: sprite.width,
            height: sprite.height,
            len,
        })?;

    image.save(path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sprite_takes_the_bare_name() {
        let dir = Path::new("out");
        assert_eq!(bitmap_path(dir, "Sigil", 0), Path::new("out/Sigil.bmp"));
    }

    #[test]
    fn later_sprites_are_suffixed_with_their_index() {
        let dir = Path::new("out");
        assert_eq!(bitmap_path(dir, "Sigil", 1), Path::new("out/Sigil+1.bmp"));
        assert_eq!(bitmap_path(dir, "Sigil", 2), Path::new("out/Sigil+2.bmp"));
    }
}
