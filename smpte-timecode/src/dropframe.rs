//! Drop-frame numbering for 29.97 and 59.94 fps.
//!
//! NTSC material runs at 30000/1001 (or 60000/1001) frames per second, so a
//! timecode display counting a frame every 1/30 s drifts behind wall-clock
//! time by about 3.6 seconds per hour. Drop-frame numbering compensates by
//! skipping display labels:
//!
//! - Frame numbers 0 and 1 (0 through 3 for 59.94) are skipped at the start
//!   of each minute
//! - Except for minutes 0, 10, 20, 30, 40, 50
//!
//! Only labels are dropped, never frames of the underlying material. This
//! module converts between the two numbering spaces: the *sequential* count
//! of frames since midnight, and the *display* count whose decomposition
//! into HH:MM:SS:FF produces the drop-frame label.

use serde::{Deserialize, Serialize};
use smpte_framerate::FrameRate;

/// Drop-frame numbering parameters for one frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Number of frame labels dropped per minute (except every 10th minute).
    pub frames_dropped_per_minute: u32,
    /// Nominal frame rate used to decompose display counts into fields.
    pub nominal_fps: u32,
    /// Sequential frames per 10 minutes (accounting for drops).
    pub frames_per_10_minutes: u64,
    /// Sequential frames per dropped minute (accounting for drops).
    pub frames_per_minute: u64,
}

impl DropFrameConfig {
    /// The drop-frame configuration for 29.97 fps.
    #[must_use]
    pub const fn for_29_97() -> Self {
        Self {
            frames_dropped_per_minute: 2,
            nominal_fps: 30,
            // 30 * 60 * 10 - 9 * 2 = 18000 - 18 = 17982
            frames_per_10_minutes: 17982,
            // 30 * 60 - 2 = 1798
            frames_per_minute: 1798,
        }
    }

    /// The drop-frame configuration for 59.94 fps.
    #[must_use]
    pub const fn for_59_94() -> Self {
        Self {
            frames_dropped_per_minute: 4,
            nominal_fps: 60,
            // 60 * 60 * 10 - 9 * 4 = 36000 - 36 = 35964
            frames_per_10_minutes: 35964,
            // 60 * 60 - 4 = 3596
            frames_per_minute: 3596,
        }
    }

    /// The configuration for a frame rate, if it supports drop-frame.
    #[must_use]
    pub const fn for_frame_rate(frame_rate: FrameRate) -> Option<Self> {
        match frame_rate {
            FrameRate::Fps29_97 => Some(Self::for_29_97()),
            FrameRate::Fps59_94 => Some(Self::for_59_94()),
            _ => None,
        }
    }
}

/// Convert a sequential frame count to the display count whose HH:MM:SS:FF
/// decomposition (at the nominal rate) is the drop-frame label.
///
/// # Arguments
/// * `frame_count` - Sequential frames since midnight (0-indexed)
/// * `config` - Drop-frame parameters for the rate
///
/// # Example
/// ```rust
/// use smpte_timecode::dropframe::{display_frame_count, DropFrameConfig};
///
/// let config = DropFrameConfig::for_29_97();
/// // One real minute of frames lands on label 00:01:00;02
/// assert_eq!(display_frame_count(1800, config), 1802);
/// // Every 10th minute keeps its low labels
/// assert_eq!(display_frame_count(17982, config), 18000);
/// ```
#[must_use]
pub fn display_frame_count(frame_count: u64, config: DropFrameConfig) -> u64 {
    let drop = u64::from(config.frames_dropped_per_minute);

    let ten_minute_blocks = frame_count / config.frames_per_10_minutes;
    let mut into_block = frame_count % config.frames_per_10_minutes;
    // The first `drop` frames of a block belong to a 10th minute, which
    // drops nothing; shift them past the subtraction below.
    if into_block < drop {
        into_block += drop;
    }
    let dropped_minutes = (into_block - drop) / config.frames_per_minute;

    frame_count + 9 * drop * ten_minute_blocks + drop * dropped_minutes
}

/// Number of frame labels dropped in all minutes before `total_minutes`.
///
/// Each minute drops `frames_dropped_per_minute` labels except every 10th,
/// so this is `drop * (total_minutes - total_minutes / 10)`.
#[must_use]
pub fn frames_dropped_before(total_minutes: u64, config: DropFrameConfig) -> u64 {
    u64::from(config.frames_dropped_per_minute) * (total_minutes - total_minutes / 10)
}

/// Whether a display label names a dropped frame.
///
/// Dropped labels sit at the start of each minute that is not a multiple
/// of 10, with a frames field below the per-minute drop count.
#[must_use]
pub fn is_dropped_frame(minutes: u8, seconds: u8, frames: u8, config: DropFrameConfig) -> bool {
    seconds == 0 && minutes % 10 != 0 && u32::from(frames) < config.frames_dropped_per_minute
}
