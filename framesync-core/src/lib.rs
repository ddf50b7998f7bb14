//! # Framesync Core
//!
//! A streaming synchronizer for fixed-length, checksum-terminated frames
//! embedded in an otherwise unstructured byte stream.
//!
//! Bytes arrive in arbitrarily sized chunks (a serial link, a pipe, a file
//! read loop); the synchronizer hunts for a frame boundary by sliding a
//! fixed-size window one byte at a time, locks once a window passes the
//! trailing sum-mod-256 checksum, and then emits one validated frame per
//! `length` bytes until a checksum failure sends it back to hunting.
//!
//! ## Modules
//!
//! - `checksum`: The trailing sum-mod-256 checksum rule
//! - `encoder`: Building well-formed frame streams (tests, benches, CLI)
//! - `error`: Configuration error type
//! - `frame`: Emitted frame value and synchronizer statistics
//! - `sync`: The hunting/locked synchronizer state machine

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod checksum;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod sync;

// Re-export commonly used types
pub use error::SyncError;
pub use frame::{Frame, SyncStats};
pub use sync::Synchronizer;

/// Result type alias for framesync operations
pub type Result<T> = core::result::Result<T, SyncError>;
