//! Pack and unpack binary data at the bit level.
//!
//! # Overview
//!
//! A positional binary codec: a [`Writer`] accumulates a sequence of typed
//! values into a byte buffer, and a [`Reader`] later replays the matching
//! sequence of reads over the finished bytes. The stream carries no tags,
//! framing, or schema — reader and writer must agree out-of-band on field
//! order, count, and widths.
//!
//! Values are packed least-significant-bit first at arbitrary widths (1–64
//! bits), so sub-byte fields cost exactly their declared width. Byte-oriented
//! fields (raw bytes, strings, varints) first advance the cursor to the next
//! byte boundary, which lets bit-level and byte-level fields interleave
//! freely.
//!
//! # Supported Encodings
//!
//! - Booleans: 1 bit
//! - Fixed-width integers: exactly N bits, N ∈ {8, 16, 32, 64}, unsigned or
//!   two's-complement signed
//! - ZigZag integers: signed values mapped to unsigned before packing into a
//!   caller-specified width
//! - IEEE-754 floats: raw binary32/binary64 bit patterns
//! - Varints: byte-aligned LEB128, at most 10 bytes, with a ZigZag variant
//!   for signed values
//! - Byte blobs and varint-length-prefixed UTF-8 strings
//!
//! # Error Handling
//!
//! Operations never panic and never return `Result`. The first failure (end
//! of buffer, bad argument, malformed varint) faults the instance; every
//! later operation degrades to a default value (`false`/`0`/empty) without
//! touching the cursor. A whole encode or decode sequence therefore runs
//! unconditionally and is checked once at the end:
//!
//! ```
//! use bitwire_codec::{Error, Reader};
//!
//! let mut reader = Reader::new(vec![0xFFu8]);
//! assert_eq!(reader.read_bits(16), 0);
//! assert_eq!(reader.read_u32(), 0);
//! assert_eq!(reader.error(), Some(Error::EndOfBuffer));
//! ```
//!
//! # Example
//!
//! ```
//! use bitwire_codec::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.write_u32(0xCAFE_BABE);
//! writer.write_i16(-1234);
//! writer.write_string("test");
//! assert!(writer.is_valid());
//!
//! let mut reader = Reader::new(writer.into_bytes());
//! assert_eq!(reader.read_u32(), 0xCAFE_BABE);
//! assert_eq!(reader.read_i16(), -1234);
//! assert_eq!(reader.read_string(), "test");
//! assert!(reader.is_valid());
//! ```
//!
//! # Example (sub-byte fields)
//!
//! ```
//! use bitwire_codec::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.write_bool(true);
//! writer.write_bits(0b101, 3);
//! writer.write_zigzag(-2, 6);
//!
//! let mut reader = Reader::new(writer.into_bytes());
//! assert!(reader.read_bool());
//! assert_eq!(reader.read_bits(3), 0b101);
//! assert_eq!(reader.read_zigzag(6), -2);
//! assert_eq!(reader.position(), 10);
//! ```

mod buffer;
pub mod error;
pub mod reader;
pub mod varint;
pub mod writer;

// Re-export main types
pub use error::Error;
pub use reader::Reader;
pub use writer::Writer;
