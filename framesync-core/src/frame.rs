//! Emitted frame value and synchronizer statistics

use bytes::Bytes;

/// One emitted frame
///
/// Exactly `length` bytes for frames produced by [`feed`], including the
/// trailing checksum byte, in stream order. The final frame produced by
/// [`close`] may be shorter and is never checksum-validated.
///
/// [`feed`]: crate::sync::Synchronizer::feed
/// [`close`]: crate::sync::Synchronizer::close
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Bytes,
}

impl Frame {
    pub(crate) fn new(bytes: Bytes) -> Self {
        Self { bytes }
    }

    pub(crate) fn copy_from_slice(data: &[u8]) -> Self {
        Self {
            bytes: Bytes::copy_from_slice(data),
        }
    }

    /// The frame contents, checksum byte included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The frame body: everything but the trailing checksum byte
    ///
    /// Empty for a zero- or one-byte frame.
    pub fn body(&self) -> &[u8] {
        let end = self.bytes.len().saturating_sub(1);
        &self.bytes[..end]
    }

    /// Frame length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the frame holds no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the frame, handing off its underlying buffer
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Counters accumulated by a synchronizer over its lifetime
///
/// Purely observational; none of these influence the state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Total bytes fed so far
    pub bytes_fed: usize,

    /// Validated frames emitted (excludes the unvalidated close flush)
    pub frames_emitted: usize,

    /// Checksum failures observed while locked; each one costs the lock
    pub checksum_failures: usize,

    /// Number of times a lock was acquired from hunting
    pub locks_acquired: usize,

    /// Bytes skipped over while hunting plus bytes of corrupt locked frames
    pub bytes_discarded: usize,
}

impl SyncStats {
    /// Fraction of fed bytes that ended up in validated frames, as a percentage
    pub fn recovery_rate(&self) -> f64 {
        if self.bytes_fed == 0 {
            0.0
        } else {
            let recovered = self.bytes_fed - self.bytes_discarded;
            (recovered as f64 / self.bytes_fed as f64) * 100.0
        }
    }
}
