//! Drop-frame numbering demonstration.
//!
//! Shows how drop-frame timecode keeps 29.97 fps labels on wall-clock time
//! while non-drop-frame labels fall behind by 3.6 seconds every hour.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example drop_frame_drift
//! ```

use smpte_timecode::{FrameRate, Result, Timecode};

fn main() -> Result<()> {
    println!("Wall clock   Non-drop-frame   Drop-frame");

    for hour in 1..=4 {
        let seconds = f64::from(hour) * 3600.0;
        let non_drop = Timecode::from_seconds(seconds, FrameRate::Fps29_97, false)?;
        let drop = Timecode::from_seconds(seconds, FrameRate::Fps29_97, true)?;
        println!("{:>2}:00:00      {}      {}", hour, non_drop, drop);
    }

    // Both numberings name the same frames; only the labels differ
    let frame = 107_892;
    let non_drop = Timecode::from_frame_count(frame, FrameRate::Fps29_97, false)?;
    let drop = Timecode::from_frame_count(frame, FrameRate::Fps29_97, true)?;
    println!("\nFrame {}:", frame);
    println!("  as non-drop-frame: {}", non_drop);
    println!("  as drop-frame:     {}", drop);

    // The dropped labels never reach the screen
    for label in ["00:00:59;29", "00:01:00;00", "00:01:00;01", "00:01:00;02"] {
        let exists = smpte_timecode::is_valid_timecode(label, FrameRate::Fps29_97, true);
        println!(
            "{} {}",
            label,
            if exists { "exists" } else { "is a dropped label" }
        );
    }

    Ok(())
}
