//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations.
///
/// A [`Reader`](crate::Reader) or [`Writer`](crate::Writer) records the first
/// failure it encounters and holds it until an explicit
/// [`clear`](crate::Reader::clear); the kind never changes while faulted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("argument out of range")]
    InvalidArgument,
    #[error("invalid data")]
    InvalidData,
}
