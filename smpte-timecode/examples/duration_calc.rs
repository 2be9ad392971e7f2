//! Duration between an in point and an out point.
//!
//! Parses two timecode strings, inferring the frame rate from their shape,
//! and reports the distance between them in frames, seconds and timecode.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example duration_calc -- 01:00:10;00 01:02:30;12
//! ```

use std::env;

use smpte_timecode::{duration_frames, duration_seconds, Result, Timecode};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let (in_point, out_point) = if args.len() >= 3 {
        (args[1].as_str(), args[2].as_str())
    } else {
        ("01:00:10;00", "01:02:30;12")
    };

    let start: Timecode = in_point.parse()?;
    let end: Timecode = out_point.parse()?;

    println!(
        "In point:    {} ({} fps{})",
        start,
        start.frame_rate(),
        if start.is_drop_frame() {
            ", drop-frame"
        } else {
            ""
        }
    );
    println!("Out point:   {}", end);

    println!("Duration:    {} frames", duration_frames(&start, &end));
    println!("             {:.3} seconds", duration_seconds(&start, &end));

    let clip = end.subtract(&start)?;
    println!("As timecode: {}", clip);

    Ok(())
}
