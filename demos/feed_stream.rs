//! Example demonstrating basic chunked feeding of a clean frame stream

use framesync_core::encoder::encode_stream;
use framesync_core::Synchronizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Framesync Basic Feed Example\n");

    const LENGTH: usize = 6;

    // Step 1: Build a clean stream of 10 frames
    println!("Step 1: Creating 10 frames of {} bytes...", LENGTH);
    let bodies: Vec<Vec<u8>> = (0..10u8)
        .map(|i| vec![i, i + 1, i + 2, i + 3, i + 4])
        .collect();
    let stream = encode_stream(&bodies);
    println!("Stream: {} bytes\n", stream.len());

    // Step 2: Feed it in deliberately awkward chunk sizes
    println!("Step 2: Feeding in 7-byte chunks (not frame-aligned)...");
    let mut sync = Synchronizer::new(LENGTH)?;
    let mut frames = Vec::new();
    for chunk in stream.chunks(7) {
        frames.extend(sync.feed(chunk));
    }

    println!("Emitted {} frames:", frames.len());
    for (i, frame) in frames.iter().enumerate() {
        println!("  Frame {}: {:?}", i + 1, frame.as_bytes());
    }

    // Step 3: End of stream
    match sync.close() {
        Some(tail) => println!("\nFlushed {} unterminated tail bytes", tail.len()),
        None => println!("\nNo tail bytes left over"),
    }

    Ok(())
}
