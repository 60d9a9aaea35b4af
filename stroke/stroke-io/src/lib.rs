//! Persistence and playback for stroke drawings.
//!
//! This crate covers the two file boundaries of the stroke pipeline:
//!
//! - **Drawings**: a named set of finished stroke meshes, stored as one
//!   JSON file per drawing under a caller-chosen directory.
//! - **Recordings**: captured controller sessions (position, forward
//!   vector, pressed flag per tick) that can be replayed through a
//!   `stroke_pen::Pen`, optionally looped with a positional offset per
//!   pass.
//!
//! Loading something that does not exist reports
//! [`IoError::FileNotFound`] so callers can fall back to an empty
//! drawing instead of failing.
//!
//! # Example
//!
//! ```no_run
//! use stroke_io::{load_drawing, save_drawing, Drawing, IoError};
//!
//! let drawing = match load_drawing("drawings", "sketch") {
//!     Ok(drawing) => drawing,
//!     Err(IoError::FileNotFound { .. }) => Drawing::new(),
//!     Err(e) => return Err(e),
//! };
//! // ... append newly finished lines ...
//! save_drawing(&drawing, "drawings", "sketch")?;
//! # Ok::<(), IoError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod drawing;
mod error;
mod playback;

pub use drawing::{load_drawing, save_drawing, Drawing};
pub use error::{IoError, IoResult};
pub use playback::{
    load_recording, save_recording, Playback, RecordedFrame, LOOP_OFFSET, TICK_RATE_HZ,
};
