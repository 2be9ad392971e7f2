//! Timecode string validation and parsing.
//!
//! Validation happens in two layers:
//!
//! - **Structural**: the text is shaped like `HH:MM:SS:FF` with two-digit
//!   fields in range, legal separators, and separator placement consistent
//!   with the drop-frame flag
//! - **Semantic**: the label exists at the given frame rate, meaning the
//!   frames field is below the nominal rate and, in drop-frame mode, the
//!   label is not one of the dropped frame numbers
//!
//! The two layers map to the two error variants: structural failures report
//! [`TimecodeError::InvalidTimecodeFormat`], semantic failures report
//! [`TimecodeError::InvalidTimecode`].

use smpte_framerate::FrameRate;

use crate::dropframe::{frames_dropped_before, is_dropped_frame, DropFrameConfig};
use crate::error::{Result, TimecodeError};
use crate::timecode::{render_parts, TimecodeParts};
use crate::{MAX_FRAMES_FIELD, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};

/// Byte offsets of the eight field digits in `HH:MM:SS:FF`.
const DIGIT_OFFSETS: [usize; 8] = [0, 1, 3, 4, 6, 7, 9, 10];

/// Byte offsets of the three separators in `HH:MM:SS:FF`.
const SEPARATOR_OFFSETS: [usize; 3] = [2, 5, 8];

/// Split an 11-byte timecode string into its fields and separators.
///
/// Checks shape only (digits in the digit slots, `:` or `;` in the
/// separator slots), not field ranges or separator consistency.
fn parse_fields(text: &str) -> Option<(TimecodeParts, [u8; 3])> {
    let bytes = text.as_bytes();
    if bytes.len() != 11 {
        return None;
    }
    for &offset in &DIGIT_OFFSETS {
        if !bytes[offset].is_ascii_digit() {
            return None;
        }
    }
    for &offset in &SEPARATOR_OFFSETS {
        if bytes[offset] != b':' && bytes[offset] != b';' {
            return None;
        }
    }

    let parts = TimecodeParts {
        hours: two_digits(bytes, 0),
        minutes: two_digits(bytes, 3),
        seconds: two_digits(bytes, 6),
        frames: two_digits(bytes, 9),
    };
    Some((parts, [bytes[2], bytes[5], bytes[8]]))
}

fn two_digits(bytes: &[u8], offset: usize) -> u8 {
    (bytes[offset] - b'0') * 10 + (bytes[offset + 1] - b'0')
}

/// Drop-frame parameters used by the validators.
///
/// Drop-frame at a rate without its own table is checked with the 29.97
/// numbering (two dropped labels per minute).
fn drop_config(frame_rate: FrameRate) -> DropFrameConfig {
    DropFrameConfig::for_frame_rate(frame_rate).unwrap_or(DropFrameConfig::for_29_97())
}

/// Whether `text` is structurally a valid timecode for the drop-frame flag.
///
/// A structurally valid timecode is 11 characters of `HH:MM:SS:FF` where
/// hours are 00-23, minutes and seconds 00-59, frames 00-59, separators are
/// `:` or `;`, and the first two separators match each other. Non-drop-frame
/// timecode must not contain `;` anywhere; drop-frame timecode must use `;`
/// before the frames field.
///
/// This says nothing about the frame rate: use [`is_valid_timecode`] to
/// check that the label actually exists at a rate.
///
/// # Example
/// ```rust
/// use smpte_timecode::validate::is_timecode_format_valid;
///
/// assert!(is_timecode_format_valid("23:59:59:29", false));
/// assert!(is_timecode_format_valid("00:01:00;02", true));
/// assert!(!is_timecode_format_valid("00:01:00;02", false));
/// assert!(!is_timecode_format_valid("24:00:00:00", false));
/// ```
#[must_use]
pub fn is_timecode_format_valid(text: &str, drop_frame: bool) -> bool {
    if !drop_frame && text.contains(';') {
        return false;
    }
    if drop_frame && text.as_bytes().get(8) != Some(&b';') {
        return false;
    }

    let (parts, separators) = match parse_fields(text) {
        Some(split) => split,
        None => return false,
    };
    if separators[0] != separators[1] {
        return false;
    }

    parts.hours <= MAX_HOURS
        && parts.minutes <= MAX_MINUTES
        && parts.seconds <= MAX_SECONDS
        && parts.frames <= MAX_FRAMES_FIELD
}

/// Why a structurally valid label does not exist at a frame rate, if so.
pub(crate) fn semantic_issue(
    parts: TimecodeParts,
    frame_rate: FrameRate,
    drop_frame: bool,
) -> Option<String> {
    let nominal = frame_rate.nominal_fps();
    if u32::from(parts.frames) >= nominal {
        return Some(format!("frames field must be below {nominal}"));
    }
    if drop_frame
        && is_dropped_frame(
            parts.minutes,
            parts.seconds,
            parts.frames,
            drop_config(frame_rate),
        )
    {
        return Some("dropped frame number".to_string());
    }
    None
}

/// Whether `text` names a frame that exists at `frame_rate`.
///
/// This is the structural check of [`is_timecode_format_valid`] plus the
/// rate-dependent rules: the frames field must be below the nominal rate,
/// and drop-frame labels must not be dropped frame numbers.
///
/// # Example
/// ```rust
/// use smpte_framerate::FrameRate;
/// use smpte_timecode::validate::is_valid_timecode;
///
/// assert!(is_valid_timecode("00:00:00:23", FrameRate::Fps24, false));
/// assert!(!is_valid_timecode("00:00:00:24", FrameRate::Fps24, false));
///
/// // 00:01:00;00 is a dropped label at 29.97
/// assert!(!is_valid_timecode("00:01:00;00", FrameRate::Fps29_97, true));
/// assert!(is_valid_timecode("00:01:00;02", FrameRate::Fps29_97, true));
/// ```
#[must_use]
pub fn is_valid_timecode(text: &str, frame_rate: FrameRate, drop_frame: bool) -> bool {
    frame_count_from_timecode(text, frame_rate, drop_frame).is_ok()
}

/// Sequential frame count for a validated component tuple.
pub(crate) fn sequential_frame_count(
    parts: TimecodeParts,
    frame_rate: FrameRate,
    drop_frame: bool,
) -> u64 {
    let nominal = u64::from(frame_rate.nominal_fps());
    let naive = nominal * 3600 * u64::from(parts.hours)
        + nominal * 60 * u64::from(parts.minutes)
        + nominal * u64::from(parts.seconds)
        + u64::from(parts.frames);
    if !drop_frame {
        return naive;
    }

    let total_minutes = 60 * u64::from(parts.hours) + u64::from(parts.minutes);
    naive - frames_dropped_before(total_minutes, drop_config(frame_rate))
}

/// Sequential frame count for a component tuple, validated like its string
/// form.
///
/// Errors carry the tuple rendered with the default separators, so the
/// string and tuple construction paths report identically.
pub(crate) fn frame_count_from_parts(
    parts: TimecodeParts,
    frame_rate: FrameRate,
    drop_frame: bool,
) -> Result<u64> {
    if parts.hours > MAX_HOURS
        || parts.minutes > MAX_MINUTES
        || parts.seconds > MAX_SECONDS
        || parts.frames > MAX_FRAMES_FIELD
    {
        return Err(TimecodeError::invalid_format(render_parts(
            parts, drop_frame,
        )));
    }
    if let Some(reason) = semantic_issue(parts, frame_rate, drop_frame) {
        return Err(TimecodeError::invalid_timecode(
            render_parts(parts, drop_frame),
            reason,
        ));
    }
    Ok(sequential_frame_count(parts, frame_rate, drop_frame))
}

/// Parse a timecode string into its sequential frame count.
///
/// The count is the number of actual frames since `00:00:00:00`, so for
/// drop-frame timecode the dropped labels are subtracted back out.
///
/// # Arguments
/// * `text` - The timecode string
/// * `frame_rate` - The frame rate the label is interpreted at
/// * `drop_frame` - Whether the label uses drop-frame numbering
///
/// # Example
/// ```rust
/// use smpte_framerate::FrameRate;
/// use smpte_timecode::validate::frame_count_from_timecode;
///
/// let count = frame_count_from_timecode("00:00:01:00", FrameRate::Fps24, false).unwrap();
/// assert_eq!(count, 24);
///
/// // The first minute of drop-frame skips labels ;00 and ;01
/// let count = frame_count_from_timecode("00:01:00;02", FrameRate::Fps29_97, true).unwrap();
/// assert_eq!(count, 1800);
/// ```
pub fn frame_count_from_timecode(
    text: &str,
    frame_rate: FrameRate,
    drop_frame: bool,
) -> Result<u64> {
    if !is_timecode_format_valid(text, drop_frame) {
        return Err(TimecodeError::invalid_format(text));
    }
    let (parts, _) = match parse_fields(text) {
        Some(split) => split,
        None => return Err(TimecodeError::invalid_format(text)),
    };
    if let Some(reason) = semantic_issue(parts, frame_rate, drop_frame) {
        return Err(TimecodeError::invalid_timecode(text, reason));
    }
    Ok(sequential_frame_count(parts, frame_rate, drop_frame))
}
