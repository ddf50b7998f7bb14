//! Trailing sum-mod-256 checksum rule
//!
//! A `length`-byte window is a valid frame iff its last byte equals the sum
//! of the preceding `length - 1` bytes, reduced mod 256.

/// Compute the sum-mod-256 checksum of a frame body (all bytes but the last)
pub fn sum8(body: &[u8]) -> u8 {
    body.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Check whether a candidate window is a valid frame
///
/// An empty window is never valid. A one-byte window is valid iff the byte
/// is zero (the checksum of an empty body).
pub fn frame_is_valid(window: &[u8]) -> bool {
    match window.split_last() {
        Some((&check, body)) => sum8(body) == check,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum8_wraps() {
        assert_eq!(sum8(&[]), 0);
        assert_eq!(sum8(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(sum8(&[200, 100]), 44); // 300 mod 256
        assert_eq!(sum8(&[255, 1]), 0);
    }

    #[test]
    fn test_frame_is_valid() {
        assert!(frame_is_valid(&[1, 2, 3, 4, 5, 15]));
        assert!(!frame_is_valid(&[1, 2, 3, 4, 5, 16]));
        assert!(frame_is_valid(&[0])); // empty body sums to zero
        assert!(!frame_is_valid(&[7]));
        assert!(!frame_is_valid(&[]));
    }
}
