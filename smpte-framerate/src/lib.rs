//! Broadcast frame rate catalog for SMPTE timecode.
//!
//! This crate defines the closed set of frame rates that SMPTE 12M timecode
//! is defined for, together with the exact rational value of each rate.
//!
//! The NTSC-family rates (23.976, 29.97, 59.94) are not the decimal numbers
//! their names suggest: they are exact rationals over 1001 (for example
//! 29.97 fps is really 30000/1001 fps). Timecode field arithmetic always
//! uses the nominal (rounded) rate, while duration arithmetic uses the
//! exact rational, so both are exposed here.
//!
//! # Quick Start
//!
//! ```rust
//! use smpte_framerate::FrameRate;
//!
//! let rate = FrameRate::Fps29_97;
//! assert_eq!(rate.as_rational(), (30000, 1001));
//! assert_eq!(rate.nominal_fps(), 30);
//! assert!(rate.supports_drop_frame());
//!
//! // Tolerant lookup accepts both spellings of an NTSC rate
//! assert_eq!(FrameRate::from_fps(29.97), Some(FrameRate::Fps29_97));
//! assert_eq!(FrameRate::from_fps(30000.0 / 1001.0), Some(FrameRate::Fps29_97));
//! assert_eq!(FrameRate::from_fps(26.0), None);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Absolute tolerance used by [`FrameRate::from_fps`].
///
/// Wide enough that 29.97 and 30000/1001 resolve to the same rate, narrow
/// enough that neighbouring catalog rates (29.97 vs 30) stay distinct.
const FPS_TOLERANCE: f64 = 1e-3;

/// A frame rate from the broadcast catalog.
///
/// Variants are declared in ascending rate order, so the derived `Ord`
/// compares rates numerically.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum FrameRate {
    /// 23.976 fps (24000/1001), film material prepared for NTSC broadcast.
    Fps23_976,
    /// 24 fps, film.
    #[default]
    Fps24,
    /// 25 fps, PAL broadcast.
    Fps25,
    /// 29.97 fps (30000/1001), NTSC broadcast.
    Fps29_97,
    /// 30 fps.
    Fps30,
    /// 50 fps, PAL double rate.
    Fps50,
    /// 59.94 fps (60000/1001), NTSC double rate.
    Fps59_94,
    /// 60 fps.
    Fps60,
}

impl FrameRate {
    /// Every catalog rate, in ascending order.
    pub const ALL: [FrameRate; 8] = [
        FrameRate::Fps23_976,
        FrameRate::Fps24,
        FrameRate::Fps25,
        FrameRate::Fps29_97,
        FrameRate::Fps30,
        FrameRate::Fps50,
        FrameRate::Fps59_94,
        FrameRate::Fps60,
    ];

    /// The exact rate as a `(numerator, denominator)` pair of frames per second.
    ///
    /// Integral rates have a denominator of 1; NTSC-family rates have a
    /// denominator of 1001.
    #[must_use]
    pub const fn as_rational(self) -> (u32, u32) {
        match self {
            FrameRate::Fps23_976 => (24000, 1001),
            FrameRate::Fps24 => (24, 1),
            FrameRate::Fps25 => (25, 1),
            FrameRate::Fps29_97 => (30000, 1001),
            FrameRate::Fps30 => (30, 1),
            FrameRate::Fps50 => (50, 1),
            FrameRate::Fps59_94 => (60000, 1001),
            FrameRate::Fps60 => (60, 1),
        }
    }

    /// The rate as a floating point number of frames per second.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        let (num, den) = self.as_rational();
        f64::from(num) / f64::from(den)
    }

    /// The nominal (rounded) rate used for timecode field arithmetic.
    ///
    /// This is the number of frame slots per second in the display: 30 for
    /// 29.97 fps, 60 for 59.94 fps, and the rate itself for integral rates.
    #[must_use]
    pub const fn nominal_fps(self) -> u32 {
        match self {
            FrameRate::Fps23_976 | FrameRate::Fps24 => 24,
            FrameRate::Fps25 => 25,
            FrameRate::Fps29_97 | FrameRate::Fps30 => 30,
            FrameRate::Fps50 => 50,
            FrameRate::Fps59_94 | FrameRate::Fps60 => 60,
        }
    }

    /// Whether the rate is a whole number of frames per second.
    #[must_use]
    pub const fn is_integral(self) -> bool {
        self.as_rational().1 == 1
    }

    /// Whether drop-frame numbering is defined for this rate.
    ///
    /// Drop-frame only exists for 29.97 and 59.94 fps; the other NTSC-family
    /// rate (23.976) has no drop-frame variant in SMPTE 12M.
    #[must_use]
    pub const fn supports_drop_frame(self) -> bool {
        matches!(self, FrameRate::Fps29_97 | FrameRate::Fps59_94)
    }

    /// Look up a catalog rate from a floating point frames-per-second value.
    ///
    /// The lookup is tolerant: `29.97` and `30000.0 / 1001.0` both resolve
    /// to [`FrameRate::Fps29_97`]. Values that match no catalog rate return
    /// `None`.
    ///
    /// # Example
    /// ```rust
    /// use smpte_framerate::FrameRate;
    ///
    /// assert_eq!(FrameRate::from_fps(25.0), Some(FrameRate::Fps25));
    /// assert_eq!(FrameRate::from_fps(23.976), Some(FrameRate::Fps23_976));
    /// assert_eq!(FrameRate::from_fps(23.98), None);
    /// ```
    #[must_use]
    pub fn from_fps(fps: f64) -> Option<FrameRate> {
        FrameRate::ALL
            .into_iter()
            .find(|rate| (rate.as_f64() - fps).abs() < FPS_TOLERANCE)
    }

    /// Whether `fps` matches a catalog rate under the [`from_fps`] tolerance.
    ///
    /// [`from_fps`]: FrameRate::from_fps
    #[must_use]
    pub fn is_supported(fps: f64) -> bool {
        FrameRate::from_fps(fps).is_some()
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrameRate::Fps23_976 => "23.976",
            FrameRate::Fps24 => "24",
            FrameRate::Fps25 => "25",
            FrameRate::Fps29_97 => "29.97",
            FrameRate::Fps30 => "30",
            FrameRate::Fps50 => "50",
            FrameRate::Fps59_94 => "59.94",
            FrameRate::Fps60 => "60",
        };
        f.write_str(name)
    }
}
