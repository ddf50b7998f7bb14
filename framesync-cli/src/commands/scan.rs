use anyhow::{Context, Result};
use framesync_core::Synchronizer;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

/// Chunk size used when feeding file contents, so scanning a file exercises
/// the same chunked path a live byte source would.
const FEED_CHUNK: usize = 4096;

#[derive(Serialize, Deserialize)]
struct RecoveredFrame {
    index: usize,
    len: usize,
    bytes: String,
    validated: bool,
}

pub fn execute(input: &str, output: Option<&str>, length: usize, stats_only: bool) -> Result<()> {
    info!("Scanning file: {}", input);

    // Read input file
    let data =
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    info!("File size: {} bytes", data.len());

    let mut sync = Synchronizer::new(length)
        .with_context(|| format!("Invalid frame length: {}", length))?;

    let mut frames = Vec::new();
    for chunk in data.chunks(FEED_CHUNK) {
        frames.extend(sync.feed(chunk));
    }

    let stats = sync.stats();
    let tail = sync.close();

    // Print statistics
    println!("\n=== Scan Results ===");
    println!("Bytes scanned:      {} bytes", stats.bytes_fed);
    println!("Valid frames:       {}", stats.frames_emitted);
    println!("Locks acquired:     {}", stats.locks_acquired);
    println!("Checksum failures:  {}", stats.checksum_failures);
    println!("Bytes discarded:    {} bytes", stats.bytes_discarded);
    println!("Recovery rate:      {:.2}%", stats.recovery_rate());
    if let Some(ref tail) = tail {
        println!("Unvalidated tail:   {} bytes", tail.len());
    }
    println!();

    if stats_only {
        return Ok(());
    }

    // Convert to JSON-friendly format
    let mut recovered: Vec<RecoveredFrame> = frames
        .iter()
        .enumerate()
        .map(|(index, frame)| RecoveredFrame {
            index,
            len: frame.len(),
            bytes: hex::encode(frame.as_bytes()),
            validated: true,
        })
        .collect();

    if let Some(tail) = tail {
        recovered.push(RecoveredFrame {
            index: recovered.len(),
            len: tail.len(),
            bytes: hex::encode(tail.as_bytes()),
            validated: false,
        });
    }

    if let Some(output_path) = output {
        // Write to JSON file
        let json = serde_json::to_string_pretty(&recovered)
            .with_context(|| "Failed to serialize recovered frames")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Recovered frames written to: {}", output_path);
    } else {
        // Print to stdout
        println!("=== Recovered Frames ===");
        for frame in &recovered {
            println!(
                "Frame {}: {} bytes{}",
                frame.index,
                frame.len,
                if frame.validated { "" } else { " (unvalidated tail)" }
            );
        }
    }

    Ok(())
}
