#![no_main]

//! Fuzz target for timecode string validation and parsing.
//!
//! Tests structural validation, rate-aware validation, and frame count
//! parsing with arbitrary input to find parsing bugs and panics.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use smpte_timecode::{
    frame_count_from_timecode, is_timecode_format_valid, is_valid_timecode, FrameRate, Timecode,
};

#[derive(Arbitrary, Debug)]
struct ParseInput {
    text: String,
    rate_index: usize,
    drop_frame: bool,
}

fuzz_target!(|input: ParseInput| {
    // Limit input size
    if input.text.len() > 256 {
        return;
    }
    let frame_rate = FrameRate::ALL[input.rate_index % FrameRate::ALL.len()];

    // Validators must never panic on any input
    let structurally_valid = is_timecode_format_valid(&input.text, input.drop_frame);
    let _ = is_valid_timecode(&input.text, frame_rate, input.drop_frame);
    let _ = input.text.parse::<Timecode>();

    if let Ok(count) = frame_count_from_timecode(&input.text, frame_rate, input.drop_frame) {
        // An accepted label passed the structural layer too
        assert!(structurally_valid, "accepted label failed structural check");

        // Hours are capped at 23, so the count stays below one nominal day
        let nominal_day = u64::from(frame_rate.nominal_fps()) * 86_400;
        assert!(count < nominal_day, "count {} past one day", count);

        // The count renders back to a label naming the same count
        if !input.drop_frame || frame_rate.supports_drop_frame() {
            let tc = Timecode::from_frame_count(count as i64, frame_rate, input.drop_frame)
                .expect("accepted count must construct");
            let reparsed =
                frame_count_from_timecode(&tc.to_string(), frame_rate, input.drop_frame)
                    .expect("rendered label must parse");
            assert_eq!(count, reparsed, "label {} reparsed differently", tc);
        }
    }
});
