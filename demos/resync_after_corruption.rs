//! Example demonstrating re-synchronization after stream corruption

use framesync_core::encoder::encode_stream;
use framesync_core::Synchronizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Framesync Corruption Recovery Example\n");

    const LENGTH: usize = 6;

    // Step 1: Build a clean stream of 10 frames
    println!("Step 1: Creating 10 frames...");
    let bodies: Vec<Vec<u8>> = (0..10u8)
        .map(|i| vec![10 + i, 20 + i, 30 + i, 40 + i, 50 + i])
        .collect();
    let mut stream = encode_stream(&bodies);
    println!("Clean stream: {} bytes\n", stream.len());

    // Step 2: Simulate damage
    println!("Step 2: Simulating damage...");

    // Flip the checksum byte of frame 4
    stream[3 * LENGTH + LENGTH - 1] ^= 0xFF;
    println!("Corrupted checksum of frame 4");

    // Delete two bytes from frame 7 (shifts everything after it)
    stream.drain(6 * LENGTH + 2..6 * LENGTH + 4);
    println!("Deleted 2 bytes inside frame 7\n");

    // Step 3: Feed through the synchronizer
    println!("Step 3: Feeding damaged stream...");
    let mut sync = Synchronizer::new(LENGTH)?;
    let mut frames = Vec::new();
    for chunk in stream.chunks(8) {
        frames.extend(sync.feed(chunk));
    }
    if let Some(tail) = sync.close() {
        println!("Tail flush: {} unvalidated bytes", tail.len());
    }

    println!("\nRecovered frames:");
    for frame in &frames {
        println!("  {:?}", frame.as_bytes());
    }

    println!("\nRecovered {}/10 frames despite damage", frames.len());

    Ok(())
}
