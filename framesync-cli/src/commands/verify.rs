use anyhow::{bail, Context, Result};
use colored::*;
use framesync_core::checksum::frame_is_valid;
use std::fs;
use std::io::{self, Read};
use tracing::{info, warn};

/// Strict verification: the file must be an exact concatenation of
/// `length`-byte frames, every one of which passes the checksum test.
pub fn execute(input: &str, length: usize) -> Result<()> {
    info!("Verifying file: {}", input);

    if length < 1 {
        bail!("Frame length must be at least 1");
    }

    // Read input file or stdin
    let data = if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?
    };

    if data.is_empty() {
        println!("{} File is empty", "✗".red());
        bail!("No frames to verify");
    }

    if data.len() % length != 0 {
        println!(
            "{} File size {} is not a multiple of frame length {}",
            "✗".red(),
            data.len(),
            length
        );
        bail!("Misaligned frame file");
    }

    let mut valid_frames = 0usize;
    let mut invalid_frames = 0usize;

    for (i, frame) in data.chunks(length).enumerate() {
        if frame_is_valid(frame) {
            valid_frames += 1;
        } else {
            invalid_frames += 1;
            warn!("Frame {} failed checksum", i);
        }
    }

    println!("\n=== Verification Results ===");
    println!("Total frames:   {}", valid_frames + invalid_frames);
    println!("Valid frames:   {}", valid_frames.to_string().green());
    if invalid_frames > 0 {
        println!("Invalid frames: {}", invalid_frames.to_string().red());
        bail!("{} frames failed checksum", invalid_frames);
    }
    println!("Invalid frames: {}", invalid_frames);
    println!("{} All frames valid", "✓".green());

    Ok(())
}
