//! Error types for framesync operations

/// Errors that can occur when configuring a synchronizer
///
/// Checksum mismatches are deliberately absent: they are routine signals that
/// drive the re-synchronization state machine, never surfaced as errors.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncError {
    /// Frame length must be at least 1 (the trailing checksum byte)
    #[cfg_attr(
        feature = "std",
        error("Invalid frame length {0}: must be a positive integer")
    )]
    InvalidLength(usize),
}
