pub mod bitmap;
pub mod bytes_ext;
pub mod error;
pub mod extract;
pub mod gfx_file;
pub mod shapbank;
pub mod sprite;
