//! Display a generated and solved maze as SVG images
//!
//! The maze itself is produced by an external generator/solver program,
//! which leaves its result behind as `mazeData.csv`. This crate reads that
//! file into an immutable grid and draws two images from it: one with the
//! walls only, and one that also highlights the entrance, the exit and the
//! path between them.
//!
//! # Examples
//! ```
//! use maze_display::SolvedMaze;
//!
//! let data = "\
//! 3,3,
//! CellEntranceSE,CellPathE,S,
//! S,CellPathSE,E,
//! E,CellPathS,CellExit,";
//! let maze = SolvedMaze::parse_csv(data).unwrap();
//!
//! let solved = maze_display::renderer::render(&maze, true);
//! assert!(solved.to_string().contains("lightgreen"));
//! ```

use std::{fs, path::Path, str::FromStr};

use anyhow::{anyhow, bail, Context};
use itertools::Itertools;

pub mod renderer;

/// File that the external generator/solver writes its result to
pub const MAZE_DATA_FILE: &str = "mazeData.csv";

/// Special marking of a cell, used only for highlighting
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum CellRole {
    /// No marking
    #[default]
    Regular,
    /// Where the maze is entered
    Entrance,
    /// Where the maze is left
    Exit,
    /// On the path from entrance to exit
    Path,
}

/// One grid unit of the maze
///
/// Only the south and east walls belong to a cell; the north and west edges
/// are drawn by the neighboring cells, or by the maze border.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Cell {
    pub role: CellRole,
    pub south_wall: bool,
    pub east_wall: bool,
}

impl Cell {
    /// Parse a cell from its descriptor string in the maze data file
    ///
    /// Descriptors combine an optional role prefix (`CellEntrance`,
    /// `CellExit`, `CellPath`) with an optional wall suffix (`S`, `E` or
    /// `SE`), e.g. `CellPathSE`. `CellRegular` and unrecognized prefixes
    /// carry no marking.
    ///
    /// # Examples
    /// ```
    /// use maze_display::{Cell, CellRole};
    ///
    /// let cell = Cell::from_descriptor("CellEntranceSE");
    /// assert_eq!(cell.role, CellRole::Entrance);
    /// assert!(cell.south_wall && cell.east_wall);
    /// ```
    pub fn from_descriptor(descriptor: &str) -> Self {
        let (prefix, south_wall, east_wall) = if let Some(p) = descriptor.strip_suffix("SE") {
            (p, true, true)
        } else if let Some(p) = descriptor.strip_suffix('S') {
            (p, true, false)
        } else if let Some(p) = descriptor.strip_suffix('E') {
            (p, false, true)
        } else {
            (descriptor, false, false)
        };
        let role = match prefix {
            "CellEntrance" => CellRole::Entrance,
            "CellExit" => CellRole::Exit,
            "CellPath" => CellRole::Path,
            _ => CellRole::Regular,
        };
        Cell {
            role,
            south_wall,
            east_wall,
        }
    }

    /// Fill color of the highlight square for this cell, if any
    ///
    /// Path highlighting is only wanted on the solved image, so it is gated
    /// behind `draw_path`; entrance and exit appear on both images.
    pub fn highlight_color(&self, draw_path: bool) -> Option<&'static str> {
        match self.role {
            CellRole::Exit => Some("red"),
            CellRole::Entrance => Some("coral"),
            CellRole::Path if draw_path => Some("lightgreen"),
            _ => None,
        }
    }
}

/// Solved maze as read from the generator's data file
///
/// Immutable after loading; the renderer only borrows it.
pub struct SolvedMaze {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Cell>>,
}

impl SolvedMaze {
    /// Parse maze data in the generator's CSV layout
    ///
    /// The first line lists the column and row counts as its first two
    /// fields. Every following line is one maze row: one descriptor field
    /// per column plus a trailing empty field, which is dropped. Rows and
    /// cells that are missing at the end stay at their default (no marking,
    /// no walls); extra rows or cells are an error.
    pub fn parse_csv(data: &str) -> anyhow::Result<Self> {
        let mut lines = data.lines();
        let header = lines.next().context("maze data is empty")?;
        let (cols_field, rows_field) = header
            .split(',')
            .take(2)
            .collect_tuple()
            .context("maze data header must list columns and rows")?;
        let cols: usize = cols_field
            .trim()
            .parse()
            .with_context(|| format!("invalid column count `{cols_field}`"))?;
        let rows: usize = rows_field
            .trim()
            .parse()
            .with_context(|| format!("invalid row count `{rows_field}`"))?;
        if rows == 0 || cols == 0 {
            bail!("maze dimensions must be positive, got {cols}x{rows}");
        }

        let mut grid = vec![vec![Cell::default(); cols]; rows];
        for (row, line) in lines.enumerate() {
            if row >= rows {
                bail!("maze data has more than {rows} rows");
            }
            let fields: Vec<&str> = line.split(',').collect();
            // The writer terminates every row with an empty field
            let descriptors = &fields[..fields.len() - 1];
            if descriptors.len() > cols {
                bail!(
                    "row {} has {} cells, expected at most {cols}",
                    row + 1,
                    descriptors.len()
                );
            }
            for (col, descriptor) in descriptors.iter().enumerate() {
                grid[row][col] = Cell::from_descriptor(descriptor);
            }
        }
        Ok(SolvedMaze { rows, cols, grid })
    }

    /// Read and parse the maze data file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("cannot read maze data from {}", path.display()))?;
        Self::parse_csv(&data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate over all cells in row-major order as `(row, col, cell)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }
}

/// Maze side length given on the command line, validated and normalized
///
/// Fractional input is accepted but truncated toward zero; the caller is
/// expected to warn the user when that happens.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct SideLength {
    /// Number of cells along one side of the maze
    pub cells: usize,
    /// Whether a fractional input was truncated
    pub truncated: bool,
}

impl FromStr for SideLength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| anyhow!("side length `{s}` is not a number"))?;
        if !value.is_finite() {
            bail!("side length `{s}` is not a finite number");
        }
        let whole = value.trunc();
        if whole < 1.0 {
            bail!("side length must be at least 1, got {value}");
        }
        Ok(SideLength {
            cells: whole as usize,
            truncated: value != whole,
        })
    }
}
