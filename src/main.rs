//! CLI for rendering the solved maze data as SVG images

use std::path::PathBuf;

use clap::Parser;
use maze_display::{renderer, SolvedMaze, MAZE_DATA_FILE};

/// Draw the unsolved and solved maze images from generated maze data
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File, where to read the solved maze data
    #[arg(default_value = MAZE_DATA_FILE)]
    file: PathBuf,
}

/// Read maze data from file, write both image files
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let maze = SolvedMaze::from_file(&args.file)?;
    let stamp = renderer::timestamp();
    let (unsolved, solved) = renderer::write_images(&maze, &stamp)?;

    println!("Wrote {} and {}", unsolved.display(), solved.display());
    Ok(())
}
