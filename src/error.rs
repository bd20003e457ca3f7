use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    PathNotFound(PathBuf),
    TruncatedInput,
    InvalidEncoding,
    UnsupportedSpriteLayout {
        width: u16,
        height: u16,
        len: usize,
    },
    Resource {
        name: String,
        source: Box<Error>,
    },
    Sprite {
        resource: String,
        index: usize,
        offset: u64,
        source: Box<Error>,
    },
    IOError(std::io::Error),
    BmpEncodingError(image::ImageError),
}

impl Error {
    pub fn in_resource(self, name: &str) -> Error {
        Error::Resource {
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    pub fn in_sprite(self, resource: &str, index: usize, offset: u64) -> Error {
        Error::Sprite {
            resource: resource.to_string(),
            index,
            offset,
            source: Box::new(self),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::TruncatedInput,
            std::io::ErrorKind::InvalidData => Self::InvalidEncoding,
            _ => Self::IOError(e),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::BmpEncodingError(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::PathNotFound(path) => write!(f, "path `{}` not found", path.display()),
            Error::TruncatedInput => write!(f, "unexpected end of input"),
            Error::InvalidEncoding => write!(f, "non-ascii byte in name field"),
            Error::UnsupportedSpriteLayout { width, height, len } => {
                write!(
                    f,
                    "sprite layout {}x{} does not match {} bytes of pixel data",
                    width, height, len
                )
            }
            Error::Resource { name, source } => write!(f, "resource `{}`: {}", name, source),
            Error::Sprite {
                resource,
                index,
                offset,
                source,
            } => {
                write!(
                    f,
                    "resource `{}`, sprite {} at offset {:#x}: {}",
                    resource, index, offset, source
                )
            }
            Error::IOError(e) => write!(f, "{}", e),
            Error::BmpEncodingError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}
