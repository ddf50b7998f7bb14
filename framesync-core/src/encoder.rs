//! Building well-formed frame streams
//!
//! The synchronizer itself only consumes bytes; these helpers exist so tests,
//! benches and the CLI can produce streams the synchronizer will accept.

use crate::checksum::sum8;
use alloc::vec::Vec;
use bytes::{BufMut, Bytes, BytesMut};

/// Encode one frame: the body followed by its sum-mod-256 checksum byte
///
/// The resulting frame is `body.len() + 1` bytes long. An empty body yields
/// the one-byte frame `[0]`.
pub fn encode_frame(body: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(body.len() + 1);
    buf.put_slice(body);
    buf.put_u8(sum8(body));
    buf.freeze()
}

/// Encode a sequence of equal-length bodies into one contiguous frame stream
pub fn encode_stream<I, B>(bodies: I) -> Vec<u8>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    let mut stream = Vec::new();
    for body in bodies {
        stream.extend_from_slice(&encode_frame(body.as_ref()));
    }
    stream
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::frame_is_valid;

    #[test]
    fn test_encode_frame_appends_checksum() {
        let frame = encode_frame(&[1, 2, 3, 4, 5]);
        assert_eq!(frame.as_ref(), &[1, 2, 3, 4, 5, 15]);
        assert!(frame_is_valid(&frame));
    }

    #[test]
    fn test_encode_empty_body() {
        assert_eq!(encode_frame(&[]).as_ref(), &[0]);
    }

    #[test]
    fn test_encode_stream_concatenates() {
        let stream = encode_stream([&[1u8, 1][..], &[2, 2][..]]);
        assert_eq!(stream, vec![1, 1, 2, 2, 2, 4]);
    }
}
