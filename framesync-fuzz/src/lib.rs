//! Fuzzing placeholder for the framesync synchronizer
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_feed

use framesync_core::Synchronizer;

/// Feed arbitrary bytes in one call - should never panic
///
/// The first input byte picks the frame length (clamped to 1..=64), the rest
/// is the stream.
pub fn fuzz_feed(data: &[u8]) {
    let Some((&first, stream)) = data.split_first() else {
        return;
    };
    let length = usize::from(first).clamp(1, 64);

    let mut sync = Synchronizer::new(length).expect("length is in range");
    let _ = sync.feed(stream);
    let _ = sync.close();
}

/// Same stream, fed in chunk sizes derived from the input - the emitted
/// frames must match the single-call feed exactly
pub fn fuzz_feed_chunked(data: &[u8]) {
    let Some((&first, stream)) = data.split_first() else {
        return;
    };
    let length = usize::from(first).clamp(1, 64);
    let chunk_size = usize::from(first >> 3).max(1);

    let mut whole = Synchronizer::new(length).expect("length is in range");
    let expected = whole.feed(stream);

    let mut chunked = Synchronizer::new(length).expect("length is in range");
    let mut frames = Vec::new();
    for chunk in stream.chunks(chunk_size) {
        frames.extend(chunked.feed(chunk));
    }

    assert_eq!(frames, expected);
    assert_eq!(chunked.close(), whole.close());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_feed_empty() {
        fuzz_feed(&[]);
    }

    #[test]
    fn test_fuzz_feed_random() {
        fuzz_feed(&[0x12, 0x34, 0x56, 0x78]);
    }

    #[test]
    fn test_fuzz_feed_all_zero() {
        // length 1, all-zero stream: every byte is a valid frame
        fuzz_feed(&[0x00; 256]);
    }

    #[test]
    fn test_fuzz_feed_chunked_long() {
        fuzz_feed_chunked(&[0xFF; 1024]);
    }
}
