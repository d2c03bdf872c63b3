//! Reading and writing of plain two-column coordinate (`.dat`) files.

use crate::errors::{GeoFoilError, Result};
use ncollide2d::na::Point2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Parses whitespace separated numeric rows. Blank lines and `#` comments are skipped, as is a
/// single title line in front of the first data row. The rows are returned as read, so that a wrong
/// column count is reported by the validator rather than here.
pub fn parse_coordinates(text: &str, path: &Path) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    let mut title = None;
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed: std::result::Result<Vec<f64>, _> =
            line.split_whitespace().map(str::parse::<f64>).collect();
        match parsed {
            Ok(row) => rows.push(row),
            Err(_) if rows.is_empty() && title.is_none() => {
                debug!(title = line, "skipping title line");
                title = Some(line);
            }
            Err(e) => {
                return Err(GeoFoilError::Parse {
                    path: path.to_path_buf(),
                    line: i + 1,
                    detail: format!("'{}' is not a coordinate row ({})", line, e),
                })
            }
        }
    }

    Ok(rows)
}

pub fn read_coordinates(path: &Path) -> Result<Vec<Vec<f64>>> {
    let text = std::fs::read_to_string(path).map_err(|e| GeoFoilError::io(path, e))?;
    parse_coordinates(&text, path)
}

/// Writes one point per line as two fixed-width columns of 16 characters with 12 decimals.
pub fn write_coordinates<W: Write>(points: &[Point2<f64>], out: &mut W) -> std::io::Result<()> {
    for p in points.iter() {
        writeln!(out, "{:16.12} {:16.12}", p.x, p.y)?;
    }
    Ok(())
}

pub fn save_coordinates(points: &[Point2<f64>], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| GeoFoilError::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_coordinates(points, &mut out)
        .and_then(|_| out.flush())
        .map_err(|e| GeoFoilError::io(path, e))
}
