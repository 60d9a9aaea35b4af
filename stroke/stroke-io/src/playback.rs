//! Loading and replaying recorded controller sessions.
//!
//! A recording is a JSON array containing one array of frames, each frame
//! a flat tuple `[frame_id, px, py, pz, fx, fy, fz, pressed]` captured at
//! a fixed tick rate. Playback can loop the session several times with a
//! fixed positional offset per loop, so repeated runs draw next to each
//! other instead of on top of each other.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use stroke_pen::PathSample;

use crate::error::{IoError, IoResult};

/// Tick rate recordings are captured at, in frames per second.
pub const TICK_RATE_HZ: f64 = 90.0;

/// Positional shift applied per playback loop.
pub const LOOP_OFFSET: Vector3<f64> = Vector3::new(0.3, 0.25, 0.15);

/// One captured controller frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "FrameTuple", into = "FrameTuple")]
pub struct RecordedFrame {
    /// Sequence number within the session.
    pub frame_id: u64,
    /// Controller position.
    pub position: Point3<f64>,
    /// Controller forward vector.
    pub forward: Vector3<f64>,
    /// Whether the trigger was held.
    pub pressed: bool,
}

/// On-disk frame layout. Pressed is stored as 0 or 1.
type FrameTuple = (u64, f64, f64, f64, f64, f64, f64, u8);

impl From<FrameTuple> for RecordedFrame {
    fn from(t: FrameTuple) -> Self {
        Self {
            frame_id: t.0,
            position: Point3::new(t.1, t.2, t.3),
            forward: Vector3::new(t.4, t.5, t.6),
            pressed: t.7 != 0,
        }
    }
}

impl From<RecordedFrame> for FrameTuple {
    fn from(f: RecordedFrame) -> Self {
        (
            f.frame_id,
            f.position.x,
            f.position.y,
            f.position.z,
            f.forward.x,
            f.forward.y,
            f.forward.z,
            u8::from(f.pressed),
        )
    }
}

/// Load a recorded session from a JSON file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist (`FileNotFound`)
/// - The file cannot be read or is not valid JSON
/// - The outer array contains no frame container
pub fn load_recording<P: AsRef<Path>>(path: P) -> IoResult<Vec<RecordedFrame>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let mut containers: Vec<Vec<RecordedFrame>> = serde_json::from_reader(BufReader::new(file))?;
    if containers.is_empty() {
        return Err(IoError::invalid_content("recording has no frame container"));
    }
    Ok(containers.swap_remove(0))
}

/// Save a recorded session to a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_recording<P: AsRef<Path>>(frames: &[RecordedFrame], path: P) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    serde_json::to_writer(std::io::BufWriter::new(file), &[frames])?;
    Ok(())
}

/// Iterator replaying a recorded session as pen samples.
///
/// Each pass over the frames shifts positions by one more
/// [`LOOP_OFFSET`]. Forward vectors are dropped: the pen derives its
/// orientation from movement, not from the controller's aim.
#[derive(Debug, Clone)]
pub struct Playback {
    frames: Vec<RecordedFrame>,
    cursor: usize,
    loops: usize,
    loop_index: usize,
    offset: Vector3<f64>,
}

impl Playback {
    /// Create a playback over `frames` repeated `loops` times.
    #[must_use]
    pub fn new(frames: Vec<RecordedFrame>, loops: usize) -> Self {
        Self {
            frames,
            cursor: 0,
            loops,
            loop_index: 0,
            offset: Vector3::zeros(),
        }
    }

    /// Zero-based index of the loop currently playing.
    #[inline]
    #[must_use]
    pub const fn loop_index(&self) -> usize {
        self.loop_index
    }
}

impl Iterator for Playback {
    type Item = PathSample;

    fn next(&mut self) -> Option<PathSample> {
        if self.loop_index >= self.loops {
            return None;
        }
        if self.cursor >= self.frames.len() {
            if self.loop_index + 1 >= self.loops {
                return None;
            }
            self.cursor = 0;
            self.loop_index += 1;
            self.offset += LOOP_OFFSET;
        }
        let frame = self.frames.get(self.cursor)?;
        self.cursor += 1;
        Some(PathSample::new(frame.position + self.offset, frame.pressed))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_frames(count: u64) -> Vec<RecordedFrame> {
        (0..count)
            .map(|i| {
                let t = i as f64 / TICK_RATE_HZ;
                RecordedFrame {
                    frame_id: i,
                    position: Point3::new(t, 0.0, 0.0),
                    forward: Vector3::z(),
                    pressed: i > 0 && i < count - 1,
                }
            })
            .collect()
    }

    #[test]
    fn frame_tuple_roundtrip() {
        let frame = RecordedFrame {
            frame_id: 7,
            position: Point3::new(0.1, 0.2, 0.3),
            forward: Vector3::new(0.0, 0.0, 1.0),
            pressed: true,
        };
        let json = serde_json::to_string(&frame).expect("serialize frame");
        assert_eq!(json, "[7,0.1,0.2,0.3,0.0,0.0,1.0,1]");

        let back: RecordedFrame = serde_json::from_str(&json).expect("parse frame");
        assert_eq!(back, frame);
    }

    #[test]
    fn frame_positions_roundtrip_bit_exact() {
        // 0.1 + 0.31 is not representable as a short decimal; nearest-value
        // float parsing must recover the exact bits.
        let x = 0.1 + 0.31;
        let frame = RecordedFrame {
            frame_id: 0,
            position: Point3::new(x, 0.0, 0.0),
            forward: Vector3::z(),
            pressed: false,
        };
        let json = serde_json::to_string(&frame).expect("serialize frame");
        let back: RecordedFrame = serde_json::from_str(&json).expect("parse frame");
        assert_eq!(back.position.x.to_bits(), x.to_bits());
    }

    #[test]
    fn recording_roundtrip() {
        let frames = test_frames(10);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("session.json");
        save_recording(&frames, &path).expect("save recording");

        let loaded = load_recording(&path).expect("load recording");
        assert_eq!(loaded, frames);
    }

    #[test]
    fn load_nonexistent_recording() {
        let result = load_recording("no_such_session_12345.json");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn playback_single_loop_preserves_positions() {
        let frames = test_frames(5);
        let samples: Vec<_> = Playback::new(frames.clone(), 1).collect();
        assert_eq!(samples.len(), 5);
        for (frame, sample) in frames.iter().zip(&samples) {
            assert_relative_eq!(frame.position.x, sample.position.x);
            assert_eq!(frame.pressed, sample.pressed);
        }
    }

    #[test]
    fn playback_loops_shift_positions() {
        let frames = test_frames(3);
        let samples: Vec<_> = Playback::new(frames.clone(), 3).collect();
        assert_eq!(samples.len(), 9);

        // Second loop is shifted by one offset, third by two.
        for (loop_index, chunk) in samples.chunks(3).enumerate() {
            let shift = LOOP_OFFSET * loop_index as f64;
            for (frame, sample) in frames.iter().zip(chunk) {
                let expected = frame.position + shift;
                assert_relative_eq!(expected.x, sample.position.x, epsilon = 1e-12);
                assert_relative_eq!(expected.y, sample.position.y, epsilon = 1e-12);
                assert_relative_eq!(expected.z, sample.position.z, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn playback_zero_loops_is_empty() {
        let samples: Vec<_> = Playback::new(test_frames(4), 0).collect();
        assert!(samples.is_empty());
    }
}
