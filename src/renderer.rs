//! Draw the maze as SVG images
//!
//! Each run produces two files: the unsolved view with walls only, and the
//! solved view with the entrance, exit and path highlighted. Highlights are
//! drawn before the walls so that the walls stay visually on top.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Local;
use svg::{
    node::element::{Definitions, Line, Rectangle, Style},
    Document,
};

use crate::SolvedMaze;

/// Fixed height of the drawn maze, in pixels
const HEIGHT: u32 = 800;
/// Blank margin around the maze, in pixels
const PADDING: u32 = 10;
/// Stylesheet applied to all wall and border lines
const LINE_STYLE: &str = "line {
    stroke: #000000;
    stroke-linecap: square;
    stroke-width: 5;
}";

/// Pixel geometry of one rendered maze
struct Geometry {
    width: u32,
    height: u32,
    scale_x: f64,
    scale_y: f64,
}

impl Geometry {
    /// Scale the grid to the fixed height; width follows the aspect ratio
    fn for_grid(rows: usize, cols: usize) -> Self {
        let aspect_ratio = cols as f64 / rows as f64;
        let width = (f64::from(HEIGHT) * aspect_ratio).round() as u32;
        Geometry {
            width,
            height: HEIGHT,
            scale_x: f64::from(width) / cols as f64,
            scale_y: f64::from(HEIGHT) / rows as f64,
        }
    }
}

fn wall(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
}

/// Filled square covering 90% of the cell, inset by 5% of the cell width
fn highlight_square(geometry: &Geometry, row: usize, col: usize, color: &str) -> Rectangle {
    let inset = geometry.scale_x * 0.05;
    let side = geometry.scale_x * 0.9;
    Rectangle::new()
        .set("x", col as f64 * geometry.scale_x + inset)
        .set("y", row as f64 * geometry.scale_y + inset)
        .set("width", side)
        .set("height", side)
        .set("stroke", color)
        .set("fill", color)
        .set("stroke-width", 5)
}

/// Draw one view of the maze
///
/// With `draw_path` set, cells on the path from the entrance to the exit
/// are highlighted as well; otherwise only the entrance and exit are.
pub fn render(maze: &SolvedMaze, draw_path: bool) -> Document {
    let geometry = Geometry::for_grid(maze.rows(), maze.cols());
    let canvas_width = geometry.width + 2 * PADDING;
    let canvas_height = geometry.height + 2 * PADDING;

    let mut document = Document::new()
        .set("width", canvas_width)
        .set("height", canvas_height)
        .set(
            "viewBox",
            format!("-{PADDING} -{PADDING} {canvas_width} {canvas_height}"),
        )
        .set("style", "background: white")
        .add(Definitions::new().add(Style::new(LINE_STYLE)));

    // Highlight squares go in first so that the walls overlay them
    for (row, col, cell) in maze.cells() {
        if let Some(color) = cell.highlight_color(draw_path) {
            document = document.add(highlight_square(&geometry, row, col, color));
        }
    }

    // Each cell owns its south and east edge; north and west edges come
    // from the neighbors or from the border below
    for (row, col, cell) in maze.cells() {
        let west = col as f64 * geometry.scale_x;
        let north = row as f64 * geometry.scale_y;
        let east = (col + 1) as f64 * geometry.scale_x;
        let south = (row + 1) as f64 * geometry.scale_y;
        if cell.south_wall {
            document = document.add(wall(west, south, east, south));
        }
        if cell.east_wall {
            document = document.add(wall(east, north, east, south));
        }
    }

    let (w, h) = (f64::from(geometry.width), f64::from(geometry.height));
    document
        .add(wall(0.0, 0.0, w, 0.0)) // north border
        .add(wall(0.0, h, w, h)) // south border
        .add(wall(w, 0.0, w, h)) // east border
        .add(wall(0.0, 0.0, 0.0, h)) // west border
}

/// Write the image to a new file
///
/// An existing file is never overwritten; a name collision is an error.
pub fn save_new(path: &Path, document: &Document) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("cannot create image file {}", path.display()))?;
    writeln!(file, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
    svg::write(&mut file, document)?;
    Ok(())
}

/// Render and save the unsolved and solved views of the maze
///
/// Both file names carry the given timestamp. Returns the paths of the
/// unsolved and the solved image, in that order.
pub fn write_images(maze: &SolvedMaze, stamp: &str) -> anyhow::Result<(PathBuf, PathBuf)> {
    let unsolved = PathBuf::from(format!("maze_{stamp}.svg"));
    let solved = PathBuf::from(format!("maze_with_exit_path_{stamp}.svg"));
    save_new(&unsolved, &render(maze, false))?;
    save_new(&solved, &render(maze, true))?;
    Ok((unsolved, solved))
}

/// Current local time as `YYYYMMDD-HH-MM-SS`, for the image file names
///
/// Two runs within the same second get the same names; the later one then
/// fails on the no-overwrite rule.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d-%H-%M-%S").to_string()
}

#[cfg(test)]
mod tests {
    use std::{env, fs};

    use super::*;
    use crate::SolvedMaze;

    /// 3x3 maze with every wall closed, entrance top left, exit bottom right
    fn walled_maze() -> SolvedMaze {
        let data = "\
3,3,
CellEntranceSE,SE,SE,
SE,SE,SE,
SE,SE,CellExitSE,";
        SolvedMaze::parse_csv(data).unwrap()
    }

    #[test]
    fn canvas_size_follows_grid_aspect_ratio() {
        let maze = SolvedMaze::parse_csv("8,4,").unwrap();
        let image = render(&maze, false).to_string();
        // width = round(800 * 8/4) + 2 * 10
        assert!(image.contains(r#"width="1620""#));
        assert!(image.contains(r#"height="820""#));
        assert!(image.contains(r#"viewBox="-10 -10 1620 820""#));
    }

    #[test]
    fn every_wall_and_border_is_drawn() {
        let image = render(&walled_maze(), false).to_string();
        // 9 cells with south and east walls, plus 4 border lines
        assert_eq!(image.matches("<line").count(), 22);
    }

    #[test]
    fn cell_without_walls_draws_border_only() {
        let maze = SolvedMaze::parse_csv("1,1,\nCellExit,").unwrap();
        let image = render(&maze, false).to_string();
        assert_eq!(image.matches("<line").count(), 4);
    }

    #[test]
    fn entrance_and_exit_are_highlighted_on_both_views() {
        for draw_path in [false, true] {
            let image = render(&walled_maze(), draw_path).to_string();
            assert_eq!(image.matches(r#"fill="red""#).count(), 1);
            assert_eq!(image.matches(r#"fill="coral""#).count(), 1);
            assert_eq!(image.matches(r#"fill="lightgreen""#).count(), 0);
        }
    }

    #[test]
    fn path_is_highlighted_only_when_requested() {
        let maze = SolvedMaze::parse_csv("2,1,\nCellPathS,CellPathSE,").unwrap();
        let unsolved = render(&maze, false).to_string();
        assert_eq!(unsolved.matches(r#"fill="lightgreen""#).count(), 0);
        let solved = render(&maze, true).to_string();
        assert_eq!(solved.matches(r#"fill="lightgreen""#).count(), 2);
    }

    #[test]
    fn highlights_are_drawn_under_the_walls() {
        let image = render(&walled_maze(), true).to_string();
        let first_square = image.find("<rect").unwrap();
        let first_wall = image.find("<line").unwrap();
        assert!(first_square < first_wall);
    }

    #[test]
    fn save_new_refuses_to_overwrite() {
        let path = env::temp_dir().join(format!("maze-display-save-{}.svg", std::process::id()));
        let _ = fs::remove_file(&path);
        let document = render(&walled_maze(), false);
        save_new(&path, &document).unwrap();
        assert!(save_new(&path, &document).is_err());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn timestamp_matches_file_name_format() {
        let stamp = timestamp();
        assert_eq!(stamp.len(), 17);
        for (i, c) in stamp.char_indices() {
            if [8, 11, 14].contains(&i) {
                assert_eq!(c, '-');
            } else {
                assert!(c.is_ascii_digit());
            }
        }
    }
}
