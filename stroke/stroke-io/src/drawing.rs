//! Saving and loading named drawings as JSON.
//!
//! A drawing is a set of finished stroke meshes. Each drawing is stored
//! as one JSON file named after it under a caller-chosen directory.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stroke_types::StrokeMesh;

use crate::error::{IoError, IoResult};

/// A named set of finished stroke lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Drawing {
    lines: Vec<StrokeMesh>,
}

impl Drawing {
    /// Create an empty drawing.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a finished line to the drawing.
    pub fn push_line(&mut self, line: StrokeMesh) {
        self.lines.push(line);
    }

    /// The drawing's lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[StrokeMesh] {
        &self.lines
    }

    /// Number of lines in the drawing.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the drawing contains no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Build the on-disk path for a named drawing.
fn drawing_path(dir: &Path, name: &str) -> IoResult<PathBuf> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(IoError::invalid_content(format!(
            "invalid drawing name: {name:?}"
        )));
    }
    Ok(dir.join(format!("{name}.json")))
}

/// Save a drawing under `dir` as `<name>.json`, creating the directory
/// if needed.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or contains a path separator
/// - The directory or file cannot be written
///
/// # Example
///
/// ```no_run
/// use stroke_io::{save_drawing, Drawing};
///
/// let drawing = Drawing::new();
/// save_drawing(&drawing, "drawings", "sketch").unwrap();
/// ```
pub fn save_drawing<P: AsRef<Path>>(drawing: &Drawing, dir: P, name: &str) -> IoResult<PathBuf> {
    let path = drawing_path(dir.as_ref(), name)?;
    fs::create_dir_all(dir.as_ref())?;
    let file = File::create(&path)?;
    serde_json::to_writer(BufWriter::new(file), drawing)?;
    Ok(path)
}

/// Load a named drawing from `dir`.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or contains a path separator
/// - No drawing with this name exists (`FileNotFound`)
/// - The file cannot be read or is not valid JSON
///
/// # Example
///
/// ```no_run
/// use stroke_io::load_drawing;
///
/// let drawing = load_drawing("drawings", "sketch").unwrap();
/// println!("loaded {} lines", drawing.line_count());
/// ```
pub fn load_drawing<P: AsRef<Path>>(dir: P, name: &str) -> IoResult<Drawing> {
    let path = drawing_path(dir.as_ref(), name)?;
    let file = File::open(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound { path: path.clone() }
        } else {
            IoError::Io(e)
        }
    })?;
    let drawing = serde_json::from_reader(BufReader::new(file))?;
    Ok(drawing)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};

    fn test_line() -> StrokeMesh {
        let mut mesh = StrokeMesh::new();
        mesh.push_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::y());
        mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::y());
        mesh.push_vertex(Point3::new(0.0, 0.0, 1.0), Vector3::y());
        mesh.faces.push([0, 1, 2]);
        mesh
    }

    #[test]
    fn roundtrip_preserves_lines() {
        let mut drawing = Drawing::new();
        drawing.push_line(test_line());
        drawing.push_line(test_line());

        let dir = tempfile::tempdir().expect("tempdir");
        save_drawing(&drawing, dir.path(), "sketch").expect("save drawing");

        let loaded = load_drawing(dir.path(), "sketch").expect("load drawing");
        assert_eq!(loaded.line_count(), 2);
        for (orig, load) in drawing.lines().iter().zip(loaded.lines()) {
            assert_eq!(orig.vertex_count(), load.vertex_count());
            assert_eq!(orig.faces, load.faces);
            for (a, b) in orig.positions.iter().zip(load.positions.iter()) {
                assert!((a - b).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn load_missing_name_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load_drawing(dir.path(), "no_such_drawing");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let result = save_drawing(&Drawing::new(), "out", "");
        assert!(matches!(result, Err(IoError::InvalidContent { .. })));

        let result = load_drawing("out", "../escape");
        assert!(matches!(result, Err(IoError::InvalidContent { .. })));
    }

    #[test]
    fn empty_drawing_roundtrips() {
        let dir = tempfile::tempdir().expect("tempdir");
        save_drawing(&Drawing::new(), dir.path(), "blank").expect("save drawing");
        let loaded = load_drawing(dir.path(), "blank").expect("load drawing");
        assert!(loaded.is_empty());
    }
}
