//! SMPTE 12M timecode for broadcast and post-production tooling.
//!
//! This crate models timecode the way tape decks and NLEs do:
//!
//! - **SMPTE Timecode**: `HH:MM:SS:FF` labels over the broadcast frame rate
//!   catalog, backed by a canonical sequential frame count
//! - **Drop-Frame Timecode**: 29.97/59.94 fps numbering that stays on
//!   wall-clock time by skipping labels, never frames
//! - **Validation**: structural and rate-aware string checks, usable without
//!   constructing a value
//! - **Conversions**: strings, component tuples, wall-clock instants and
//!   elapsed seconds all map to and from the frame count
//!
//! # Quick Start
//!
//! ```rust
//! use smpte_timecode::{FrameRate, Timecode};
//!
//! // Create a timecode
//! let tc = Timecode::new("01:30:45:12", FrameRate::Fps24, false).unwrap();
//! assert_eq!(tc.frame_count(), 130_692);
//! println!("Timecode: {}", tc); // Output: 01:30:45:12
//!
//! // Parse from string, inferring the rate from the frames field
//! let tc2: Timecode = "01:30:45:12".parse().unwrap();
//! assert_eq!(tc2.frame_rate(), FrameRate::Fps24);
//!
//! // Timecode arithmetic
//! let tc3 = tc.add(100).unwrap();
//! assert_eq!(tc3.to_string(), "01:30:49:16");
//! ```
//!
//! # Drop-Frame Timecode
//!
//! For 29.97 fps content, drop-frame timecode maintains synchronization with
//! real wall-clock time (note the semicolon separator):
//!
//! ```rust
//! use smpte_timecode::{FrameRate, Timecode};
//!
//! let tc = Timecode::new("01:00:00;02", FrameRate::Fps29_97, true).unwrap();
//! assert_eq!(tc.frame_count(), 107_894);
//!
//! // One wall-clock hour of 29.97 material lands on the 01:00:00;00 label
//! let hour = Timecode::from_seconds(3600.0, FrameRate::Fps29_97, true).unwrap();
//! assert_eq!(hour.to_string(), "01:00:00;00");
//! ```
//!
//! # Validation
//!
//! ```rust
//! use smpte_timecode::{is_timecode_format_valid, is_valid_timecode, FrameRate};
//!
//! assert!(is_timecode_format_valid("23:59:59:29", false));
//! assert!(!is_timecode_format_valid("24:00:00:00", false));
//!
//! // 00:01:00;00 is shaped correctly but names a dropped frame at 29.97
//! assert!(is_timecode_format_valid("00:01:00;00", true));
//! assert!(!is_valid_timecode("00:01:00;00", FrameRate::Fps29_97, true));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod dropframe;
pub mod error;
pub mod timecode;
pub mod validate;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use smpte_framerate::FrameRate;
pub use timecode::{Timecode, TimecodeParts, TimecodeSource};

// Re-export drop-frame utilities
pub use dropframe::{display_frame_count, frames_dropped_before, is_dropped_frame, DropFrameConfig};

// Re-export validation helpers
pub use validate::{frame_count_from_timecode, is_timecode_format_valid, is_valid_timecode};

/// The version of SMPTE standard this library implements.
pub const SMPTE_VERSION: &str = "SMPTE 12M-2008";

/// Maximum hours value in timecode (23).
pub const MAX_HOURS: u8 = 23;

/// Maximum minutes value in timecode (59).
pub const MAX_MINUTES: u8 = 59;

/// Maximum seconds value in timecode (59).
pub const MAX_SECONDS: u8 = 59;

/// Maximum frames field value any catalog rate can produce (59).
pub const MAX_FRAMES_FIELD: u8 = 59;

/// Create a timecode from hours, minutes, seconds, and frames.
///
/// This is a convenience function that creates a non-drop-frame timecode.
///
/// # Arguments
/// * `hours` - Hours (0-23)
/// * `minutes` - Minutes (0-59)
/// * `seconds` - Seconds (0-59)
/// * `frames` - Frames (0 to nominal fps - 1)
/// * `frame_rate` - The frame rate
///
/// # Example
/// ```rust
/// use smpte_timecode::{timecode, FrameRate};
///
/// let tc = timecode(1, 30, 45, 12, FrameRate::Fps24).unwrap();
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
pub fn timecode(
    hours: u8,
    minutes: u8,
    seconds: u8,
    frames: u8,
    frame_rate: FrameRate,
) -> Result<Timecode> {
    Timecode::from_parts(
        TimecodeParts {
            hours,
            minutes,
            seconds,
            frames,
        },
        frame_rate,
        false,
    )
}

/// Create a drop-frame timecode from hours, minutes, seconds, and frames.
///
/// # Arguments
/// * `hours` - Hours (0-23)
/// * `minutes` - Minutes (0-59)
/// * `seconds` - Seconds (0-59)
/// * `frames` - Frames (0 to nominal fps - 1, excluding dropped labels)
/// * `frame_rate` - The frame rate (must be 29.97 or 59.94)
///
/// # Example
/// ```rust
/// use smpte_timecode::{timecode_df, FrameRate};
///
/// let tc = timecode_df(1, 0, 0, 2, FrameRate::Fps29_97).unwrap();
/// assert_eq!(tc.to_string(), "01:00:00;02");
/// ```
pub fn timecode_df(
    hours: u8,
    minutes: u8,
    seconds: u8,
    frames: u8,
    frame_rate: FrameRate,
) -> Result<Timecode> {
    Timecode::from_parts(
        TimecodeParts {
            hours,
            minutes,
            seconds,
            frames,
        },
        frame_rate,
        true,
    )
}

/// Calculate the duration between two timecodes in seconds.
///
/// # Arguments
/// * `start` - Start timecode
/// * `end` - End timecode
///
/// # Returns
/// Duration in seconds (can be negative if end is before start)
#[must_use]
pub fn duration_seconds(start: &Timecode, end: &Timecode) -> f64 {
    end.to_seconds() - start.to_seconds()
}

/// Calculate the duration between two timecodes in frames.
///
/// Note: This only makes sense if both timecodes have the same frame rate.
///
/// # Arguments
/// * `start` - Start timecode
/// * `end` - End timecode
///
/// # Returns
/// Duration in frames (can be negative if end is before start)
#[must_use]
pub fn duration_frames(start: &Timecode, end: &Timecode) -> i64 {
    end.frame_count() as i64 - start.frame_count() as i64
}
