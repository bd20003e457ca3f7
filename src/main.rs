use std::path::PathBuf;

use clap::Parser;

use gilde_extract::{error::Error, extract::extract_graphics};

// Where a game installation keeps the archive, relative to its root.
const DEFAULT_ARCHIVE: &str = "gfx/Gilde_add_on_german.gfx";

#[derive(Debug, Parser)]
#[command(name = "gilde-extract")]
struct Cli {
    /// Path to the graphics archive, or to a game directory containing it
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Directory the decoded bitmaps are written to
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let input = cli.input.unwrap_or_else(|| PathBuf::from("."));
    let gfx_path = if input.is_dir() {
        input.join(DEFAULT_ARCHIVE)
    } else {
        input
    };
    let output = cli.output.unwrap_or_else(|| PathBuf::from("output"));

    if !gfx_path.exists() {
        println!("input path does not exist");
        return Ok(());
    }

    extract_graphics(&gfx_path, &output)
}
