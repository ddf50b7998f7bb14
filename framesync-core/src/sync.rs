//! The hunting/locked frame synchronizer state machine

use crate::checksum::frame_is_valid;
use crate::error::SyncError;
use crate::frame::{Frame, SyncStats};
use alloc::vec::Vec;
use bytes::{Buf, BufMut, BytesMut};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Synchronizer mode
///
/// The scan offset only exists while hunting, so a nonzero offset in locked
/// mode is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Sliding a candidate window byte by byte, looking for a valid frame
    Hunting {
        /// Start of the candidate window within the working buffer
        scan_offset: usize,
    },
    /// Locked onto the frame boundary; a frame is cut every `length` bytes
    Locked,
}

/// Streaming synchronizer for fixed-length, checksum-terminated frames
///
/// Feed it byte chunks of any size in stream order; it emits each frame
/// whose trailing byte matches the sum-mod-256 checksum of the preceding
/// `length - 1` bytes. Corruption is not an error: a failed checksum while
/// locked silently drops the lock and restarts the hunt from the next byte.
///
/// All state is mutated in place; callers running multiple producers must
/// sequence their `feed` calls externally.
///
/// # Examples
///
/// ```
/// use framesync_core::Synchronizer;
///
/// // Two garbage bytes, then one valid frame (1+2+3+4+5 = 15).
/// let mut sync = Synchronizer::new(6).unwrap();
/// let frames = sync.feed(&[0, 0, 1, 2, 3, 4, 5, 15]);
///
/// assert_eq!(frames.len(), 1);
/// assert_eq!(frames[0].as_bytes(), &[1, 2, 3, 4, 5, 15]);
/// assert!(sync.is_locked());
/// ```
#[derive(Debug)]
pub struct Synchronizer {
    /// Frame length in bytes, trailing checksum byte included
    length: usize,

    /// Working buffer; bytes accumulate here until emitted or discarded
    buf: BytesMut,

    state: State,

    /// Checksum failures while locked since the last validated frame.
    /// A single failure already costs the lock, so this never exceeds one
    /// before a re-hunt; kept per instance for observability.
    consecutive_failures: usize,

    stats: SyncStats,
}

impl Synchronizer {
    /// Create a synchronizer for frames of `length` bytes
    ///
    /// `length` counts the trailing checksum byte, so it must be at least 1.
    pub fn new(length: usize) -> Result<Self, SyncError> {
        if length < 1 {
            return Err(SyncError::InvalidLength(length));
        }

        Ok(Self {
            length,
            // Room to slide the window up to `length` times before compacting
            buf: BytesMut::with_capacity(2 * length),
            state: State::Hunting { scan_offset: 0 },
            consecutive_failures: 0,
            stats: SyncStats::default(),
        })
    }

    /// Configured frame length in bytes
    pub fn length(&self) -> usize {
        self.length
    }

    /// True once a frame boundary has been found and not yet lost
    pub fn is_locked(&self) -> bool {
        matches!(self.state, State::Locked)
    }

    /// Bytes currently sitting in the working buffer
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Checksum failures while locked since the last validated frame
    pub fn consecutive_failures(&self) -> usize {
        self.consecutive_failures
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    /// Consume one chunk of the byte stream, emitting any completed frames
    ///
    /// Chunk boundaries are irrelevant: feeding a stream one byte at a time
    /// or all at once yields the identical frame sequence. The chunk is
    /// always consumed fully before returning.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();

        for &byte in chunk {
            self.buf.put_u8(byte);
            self.stats.bytes_fed += 1;

            match self.state {
                State::Hunting { scan_offset } => self.hunt(scan_offset, &mut frames),
                State::Locked => self.cut_locked(&mut frames),
            }
        }

        frames
    }

    /// Flush and tear down at end of stream
    ///
    /// Emits whatever bytes remain buffered as one final frame, which may be
    /// shorter than `length` and is never checksum-validated. Returns `None`
    /// when nothing is buffered. Consuming `self` guarantees no further
    /// `feed` after the flush.
    pub fn close(self) -> Option<Frame> {
        if self.buf.is_empty() {
            None
        } else {
            Some(Frame::new(self.buf.freeze()))
        }
    }

    /// Test the candidate window ending at the byte just appended
    fn hunt(&mut self, scan_offset: usize, frames: &mut Vec<Frame>) {
        let window_end = scan_offset + self.length;
        if self.buf.len() < window_end {
            return;
        }

        let window = &self.buf[scan_offset..window_end];
        if frame_is_valid(window) {
            #[cfg(feature = "logging")]
            debug!(
                skipped = scan_offset,
                length = self.length,
                "lock acquired"
            );

            frames.push(Frame::copy_from_slice(window));
            self.stats.frames_emitted += 1;
            self.stats.locks_acquired += 1;
            self.stats.bytes_discarded += scan_offset;
            self.buf.clear();
            self.state = State::Locked;
        } else {
            let mut next = scan_offset + 1;
            // Bytes behind the window can no longer start a matching frame;
            // dropping them keeps the buffer bounded through long garbage runs.
            if next == self.length {
                self.buf.advance(next);
                self.stats.bytes_discarded += next;
                next = 0;
            }
            self.state = State::Hunting { scan_offset: next };
        }
    }

    /// Validate a full buffer while locked; one failure costs the lock
    fn cut_locked(&mut self, frames: &mut Vec<Frame>) {
        if self.buf.len() < self.length {
            return;
        }

        if frame_is_valid(&self.buf) {
            frames.push(Frame::copy_from_slice(&self.buf));
            self.stats.frames_emitted += 1;
            self.consecutive_failures = 0;
            self.buf.clear();
        } else {
            self.consecutive_failures += 1;
            self.stats.checksum_failures += 1;
            self.stats.bytes_discarded += self.length;

            #[cfg(feature = "logging")]
            warn!(
                consecutive = self.consecutive_failures,
                "checksum failure while locked; re-hunting"
            );

            self.buf.clear();
            self.state = State::Hunting { scan_offset: 0 };
        }
    }
}
