//! CLI for generating, solving and rendering a maze in one go

use std::{path::PathBuf, process, process::Command};

use anyhow::{bail, Context};
use clap::Parser;
use maze_display::{renderer, SideLength, SolvedMaze, MAZE_DATA_FILE};

/// Generate and solve a maze, then draw it as SVG images
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Desired maze side length in cells
    side_length: String,

    /// Maze generator/solver executable to invoke
    #[arg(long, default_value = "./main.exe")]
    generator: PathBuf,

    /// File, where the generator leaves the solved maze data
    #[arg(long, default_value = MAZE_DATA_FILE)]
    data_file: PathBuf,
}

/// Validate the side length, run the external generator, render the images
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let side: SideLength = match args.side_length.parse() {
        Ok(side) => side,
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(2);
        }
    };
    if side.truncated {
        println!(
            "User-inputted side length of {} is not valid, rounding down to {}",
            args.side_length, side.cells
        );
    }
    if side.cells < 3 {
        println!("WARNING: Maze may be too small to be of value");
    } else if side.cells >= 100 {
        println!("WARNING: Maze will be big, generating and rendering may take a long time");
    }

    let status = Command::new(&args.generator)
        .arg(side.cells.to_string())
        .status()
        .with_context(|| format!("cannot run maze generator {}", args.generator.display()))?;
    if !status.success() {
        bail!("maze generator failed with {status}");
    }

    let maze = SolvedMaze::from_file(&args.data_file)?;
    let stamp = renderer::timestamp();
    let (unsolved, solved) = renderer::write_images(&maze, &stamp)?;

    println!("Wrote {} and {}", unsolved.display(), solved.display());
    Ok(())
}
