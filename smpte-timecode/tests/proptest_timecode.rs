//! Property-based tests for timecode conversions.
//!
//! Uses proptest to verify round-trip correctness of label parsing and
//! rendering, drop-frame numbering, and frame arithmetic.

use proptest::prelude::*;
use smpte_timecode::{
    frame_count_from_timecode, is_dropped_frame, is_valid_timecode, DropFrameConfig, FrameRate,
    Timecode, TimecodeParts,
};

/// One day of 29.97 drop-frame material in frames.
const DROP_FRAME_DAY_29_97: u64 = 2_589_408;

/// One day of 59.94 drop-frame material in frames.
const DROP_FRAME_DAY_59_94: u64 = 5_178_816;

fn catalog() -> impl Strategy<Value = FrameRate> {
    prop::sample::select(FrameRate::ALL.to_vec())
}

// =============================================================================
// Label Round-Trip Tests
// =============================================================================

proptest! {
    /// Every frame of a 29.97 drop-frame day renders to a label that parses
    /// back to the same frame count.
    #[test]
    fn drop_frame_labels_roundtrip_29_97(frame in 0u64..DROP_FRAME_DAY_29_97) {
        let tc = Timecode::from_frame_count(frame as i64, FrameRate::Fps29_97, true).unwrap();
        let label = tc.to_string();

        prop_assert!(is_valid_timecode(&label, FrameRate::Fps29_97, true));
        prop_assert_eq!(
            frame_count_from_timecode(&label, FrameRate::Fps29_97, true).unwrap(),
            frame
        );
    }

    /// Same round-trip at 59.94, which drops four labels per minute.
    #[test]
    fn drop_frame_labels_roundtrip_59_94(frame in 0u64..DROP_FRAME_DAY_59_94) {
        let tc = Timecode::from_frame_count(frame as i64, FrameRate::Fps59_94, true).unwrap();
        let label = tc.to_string();

        prop_assert!(is_valid_timecode(&label, FrameRate::Fps59_94, true));
        prop_assert_eq!(
            frame_count_from_timecode(&label, FrameRate::Fps59_94, true).unwrap(),
            frame
        );
    }

    /// Non-drop-frame labels round-trip at every catalog rate.
    #[test]
    fn labels_roundtrip_at_every_rate(frame_rate in catalog(), frame in 0u64..5_184_000) {
        let day = u64::from(frame_rate.nominal_fps()) * 86_400;
        let frame = frame % day;

        let tc = Timecode::from_frame_count(frame as i64, frame_rate, false).unwrap();
        let label = tc.to_string();

        prop_assert!(is_valid_timecode(&label, frame_rate, false));
        prop_assert_eq!(
            frame_count_from_timecode(&label, frame_rate, false).unwrap(),
            frame
        );
    }

    /// Component tuples survive construction unchanged and render with
    /// zero-padded fields.
    #[test]
    fn parts_roundtrip(
        frame_rate in catalog(),
        hours in 0u8..24,
        minutes in 0u8..60,
        seconds in 0u8..60,
        frames in 0u8..60,
    ) {
        let frames = frames % (frame_rate.nominal_fps() as u8);
        let parts = TimecodeParts { hours, minutes, seconds, frames };

        let tc = Timecode::from_parts(parts, frame_rate, false).unwrap();
        prop_assert_eq!(tc.parts(), parts);
        prop_assert_eq!(
            tc.to_string(),
            format!("{:02}:{:02}:{:02}:{:02}", hours, minutes, seconds, frames)
        );
    }

    /// Drop-frame tuples that name an existing label survive unchanged.
    #[test]
    fn drop_frame_parts_roundtrip(
        hours in 0u8..24,
        minutes in 0u8..60,
        seconds in 0u8..60,
        frames in 0u8..30,
    ) {
        let config = DropFrameConfig::for_29_97();
        prop_assume!(!is_dropped_frame(minutes, seconds, frames, config));

        let parts = TimecodeParts { hours, minutes, seconds, frames };
        let tc = Timecode::from_parts(parts, FrameRate::Fps29_97, true).unwrap();
        prop_assert_eq!(tc.parts(), parts);
    }
}

// =============================================================================
// Drop-Frame Numbering Tests
// =============================================================================

proptest! {
    /// Drop-frame rendering never emits a dropped label.
    #[test]
    fn rendered_labels_are_never_dropped(frame in 0u64..DROP_FRAME_DAY_29_97) {
        let tc = Timecode::from_frame_count(frame as i64, FrameRate::Fps29_97, true).unwrap();
        let config = DropFrameConfig::for_29_97();

        prop_assert!(
            !is_dropped_frame(tc.minutes(), tc.seconds(), tc.frames(), config),
            "frame {} rendered dropped label {}",
            frame,
            tc
        );
    }

    /// Label order agrees with frame count order, so drop-frame timecode can
    /// be sorted as strings.
    #[test]
    fn label_order_matches_frame_order(
        a in 0u64..DROP_FRAME_DAY_29_97,
        b in 0u64..DROP_FRAME_DAY_29_97,
    ) {
        let ta = Timecode::from_frame_count(a as i64, FrameRate::Fps29_97, true).unwrap();
        let tb = Timecode::from_frame_count(b as i64, FrameRate::Fps29_97, true).unwrap();

        prop_assert_eq!(ta.to_string().cmp(&tb.to_string()), a.cmp(&b));
    }

    /// Walking frame by frame matches jumping by the whole distance: single
    /// frame increments never trigger the label-arithmetic compensation.
    #[test]
    fn repeated_single_frame_adds_match_direct_addition(
        start in 0u64..1_000_000u64,
        steps in 1u64..200u64,
    ) {
        let tc = Timecode::from_frame_count(start as i64, FrameRate::Fps29_97, true).unwrap();

        let mut walked = tc;
        for _ in 0..steps {
            walked = walked.add(1).unwrap();
        }

        let jumped = Timecode::from_frame_count((start + steps) as i64, FrameRate::Fps29_97, true)
            .unwrap();
        prop_assert_eq!(walked.frame_count(), start + steps);
        prop_assert_eq!(walked.to_string(), jumped.to_string());
    }
}

// =============================================================================
// Arithmetic and Conversion Tests
// =============================================================================

proptest! {
    /// Adding then subtracting the same operand returns to the start.
    #[test]
    fn add_then_subtract_returns_start(
        start in 0u64..1_000_000u64,
        delta in 0u64..1_000_000u64,
    ) {
        let tc = Timecode::from_frame_count(start as i64, FrameRate::Fps24, false).unwrap();
        let back = tc.add(delta as i64).unwrap().subtract(delta as i64).unwrap();
        prop_assert_eq!(back.frame_count(), start);
    }

    /// Timecode ordering agrees with frame count ordering at a fixed rate.
    #[test]
    fn ordering_matches_frame_counts(a in 0u64..10_000_000u64, b in 0u64..10_000_000u64) {
        let ta = Timecode::from_frame_count(a as i64, FrameRate::Fps25, false).unwrap();
        let tb = Timecode::from_frame_count(b as i64, FrameRate::Fps25, false).unwrap();
        prop_assert_eq!(ta.cmp(&tb), a.cmp(&b));
    }

    /// Seconds conversions land within half a frame of the requested time.
    #[test]
    fn seconds_conversions_are_frame_accurate(
        frame_rate in catalog(),
        seconds in 0.0f64..86_400.0,
    ) {
        let tc = Timecode::from_seconds(seconds, frame_rate, false).unwrap();
        let half_frame = 0.5 / frame_rate.as_f64();
        prop_assert!(
            (tc.to_seconds() - seconds).abs() <= half_frame + 1e-9,
            "{} fps: requested {} got {}",
            frame_rate,
            seconds,
            tc.to_seconds()
        );
    }
}

// =============================================================================
// Day Boundary Edge Cases
// =============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_last_frame_of_drop_frame_day() {
        let tc = Timecode::from_frame_count(
            DROP_FRAME_DAY_29_97 as i64 - 1,
            FrameRate::Fps29_97,
            true,
        )
        .unwrap();
        assert_eq!(tc.to_string(), "23:59:59;29");

        let tc = Timecode::from_frame_count(
            DROP_FRAME_DAY_59_94 as i64 - 1,
            FrameRate::Fps59_94,
            true,
        )
        .unwrap();
        assert_eq!(tc.to_string(), "23:59:59;59");
    }

    #[test]
    fn test_exact_day_wraps_to_zero() {
        let tc = Timecode::from_frame_count(DROP_FRAME_DAY_29_97 as i64, FrameRate::Fps29_97, true)
            .unwrap();
        assert_eq!(tc.to_string(), "00:00:00;00");
        assert_eq!(tc.frame_count(), DROP_FRAME_DAY_29_97);

        let tc = Timecode::from_frame_count(24 * 86_400, FrameRate::Fps24, false).unwrap();
        assert_eq!(tc.to_string(), "00:00:00:00");
    }

    #[test]
    fn test_day_lengths_differ_from_nominal_by_dropped_labels() {
        // A nominal 30 fps day minus 2 dropped labels for 54 of every 60
        // minutes: 2_592_000 - 2 * 54 * 24 = 2_589_408
        assert_eq!(DROP_FRAME_DAY_29_97, 30 * 86_400 - 2 * 54 * 24);
        assert_eq!(DROP_FRAME_DAY_59_94, 60 * 86_400 - 4 * 54 * 24);
    }

    /// Integer-only sweep of every frame in a 29.97 drop-frame day. Strings
    /// are covered by the proptest above; this closes the sampling gap.
    #[test]
    fn test_every_frame_of_a_29_97_day_decomposes_and_rebuilds() {
        let config = DropFrameConfig::for_29_97();
        for frame in 0..DROP_FRAME_DAY_29_97 {
            let tc =
                Timecode::from_frame_count(frame as i64, FrameRate::Fps29_97, true).unwrap();
            let parts = tc.parts();
            assert!(
                !is_dropped_frame(parts.minutes, parts.seconds, parts.frames, config),
                "frame {frame} decomposed to dropped label"
            );
            let rebuilt = Timecode::from_parts(parts, FrameRate::Fps29_97, true).unwrap();
            assert_eq!(rebuilt.frame_count(), frame, "frame {frame} did not round-trip");
        }
    }

    /// Same sweep over the first hour at 59.94, where four labels per minute
    /// are dropped.
    #[test]
    fn test_first_hour_of_a_59_94_day_decomposes_and_rebuilds() {
        let config = DropFrameConfig::for_59_94();
        let first_hour = 6 * config.frames_per_10_minutes;
        for frame in 0..first_hour {
            let tc =
                Timecode::from_frame_count(frame as i64, FrameRate::Fps59_94, true).unwrap();
            let parts = tc.parts();
            assert!(!is_dropped_frame(parts.minutes, parts.seconds, parts.frames, config));
            let rebuilt = Timecode::from_parts(parts, FrameRate::Fps59_94, true).unwrap();
            assert_eq!(rebuilt.frame_count(), frame);
        }
    }
}
