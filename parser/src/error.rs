//! Error types for decoding DICOM content.
//!
//! Every decode-time failure carries the tag being decoded
//! and the byte offset in the source where the failing read started.

use crate::text::DecodeTextError;
use dcmframes_core::Tag;
use snafu::{Backtrace, GenerateImplicitData, Snafu};

/// An error which may occur while decoding data elements,
/// sequences or pixel data fragments.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The source ended before the format required it to.
    #[snafu(display(
        "Stream ended prematurely while reading {} at offset {}",
        tag,
        offset
    ))]
    TruncatedStream {
        tag: Tag,
        offset: u64,
        backtrace: Backtrace,
    },
    /// The source failed for reasons other than its end.
    #[snafu(display("Could not read {} at offset {}", tag, offset))]
    ReadSource {
        tag: Tag,
        offset: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    /// The reserved bytes of a long explicit VR header were not zero.
    #[snafu(display(
        "Reserved bytes {:02X?} of {} at offset {} are not zero",
        reserved,
        tag,
        offset
    ))]
    MalformedReserved {
        tag: Tag,
        offset: u64,
        reserved: [u8; 2],
        backtrace: Backtrace,
    },
    /// The value representation code in the stream is not known.
    #[snafu(display(
        "Unknown value representation {:02X?} for {} at offset {}",
        code,
        tag,
        offset
    ))]
    UnknownVr {
        tag: Tag,
        offset: u64,
        code: [u8; 2],
        backtrace: Backtrace,
    },
    /// A delimiter was found with a nonzero length,
    /// or a pixel data fragment with an undefined length.
    #[snafu(display(
        "Structural element {} at offset {} has invalid length {}",
        tag,
        offset,
        len
    ))]
    StructuralError {
        tag: Tag,
        offset: u64,
        len: u32,
        backtrace: Backtrace,
    },
    /// An item or delimiter tag was found where it is not legal.
    #[snafu(display("Unexpected structural tag {} at offset {}", tag, offset))]
    UnexpectedStructuralTag {
        tag: Tag,
        offset: u64,
        backtrace: Backtrace,
    },
    /// An undefined length was found on an element
    /// which is neither a sequence nor encapsulated binary data.
    #[snafu(display("Undefined length is not allowed for {} at offset {}", tag, offset))]
    UndefinedLength {
        tag: Tag,
        offset: u64,
        backtrace: Backtrace,
    },
    /// The text of a value could not be decoded.
    #[snafu(display("Could not decode text of {} at offset {}", tag, offset))]
    DecodeText {
        tag: Tag,
        offset: u64,
        #[snafu(backtrace)]
        source: DecodeTextError,
    },
    /// The basic offset table of encapsulated pixel data is not empty,
    /// which the fragment reassembler does not resolve.
    #[snafu(display("Unsupported basic offset table of {} bytes", len))]
    UnsupportedOffsetTable { len: u32, backtrace: Backtrace },
    /// Sequence items are nested deeper than allowed.
    #[snafu(display(
        "Item nesting depth {} exceeds the limit at offset {}",
        depth,
        offset
    ))]
    RecursionLimitExceeded {
        depth: u32,
        offset: u64,
        backtrace: Backtrace,
    },
    /// Decoding needed to read past the configured byte budget.
    #[snafu(display("Byte budget of {} bytes exceeded", budget))]
    ByteBudgetExceeded { budget: u64, backtrace: Backtrace },
    /// The data set has no pixel data.
    #[snafu(display("No pixel data found"))]
    MissingPixelData { backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fail with a [`Error::StructuralError`] for a structural element of invalid length.
pub(crate) fn structural_error<T>(tag: Tag, offset: u64, len: u32) -> Result<T> {
    Err(Error::StructuralError {
        tag,
        offset,
        len,
        backtrace: Backtrace::generate(),
    })
}
