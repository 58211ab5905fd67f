//! File input and output helpers for landmark and point data.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use crate::geometry::Point3;
use crate::gesture::LandmarkSet;

pub mod config;
pub use config::{read_thresholds_json, write_thresholds_json};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

/// Reads all lines of a file.
pub fn read_lines(path: &str) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

fn invalid(line: usize, msg: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", line, msg))
}

/// Parses `x,y,z` lines into points. Blank lines are skipped.
pub fn parse_points_csv(lines: &[String]) -> io::Result<Vec<Point3>> {
    let mut pts = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 3 {
            return Err(invalid(idx + 1, "expected x,y,z"));
        }
        let mut coords = [0.0; 3];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part.trim().parse::<f64>().map_err(|e| invalid(idx + 1, e))?;
        }
        pts.push(Point3::new(coords[0], coords[1], coords[2]));
    }
    Ok(pts)
}

/// Reads a CSV file of `x,y,z` points.
pub fn read_points_csv(path: &str) -> io::Result<Vec<Point3>> {
    let lines = read_lines(path)?;
    parse_points_csv(&lines)
}

/// Writes points as `x,y,z` lines.
pub fn write_points_csv(path: &str, points: &[Point3]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for p in points {
        writeln!(file, "{},{},{}", p.x, p.y, p.z)?;
    }
    Ok(())
}

/// Reads a hand landmark set stored as one `x,y,z` line per landmark.
pub fn read_landmarks_csv(path: &str) -> io::Result<LandmarkSet> {
    let pts = read_points_csv(path)?;
    LandmarkSet::new(pts).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
