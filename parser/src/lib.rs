#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This crate decodes DICOM content directly from a byte stream
//! and retrieves the pixel data frames of a DICOM object.
//!
//! - [`stateful`] provides the [`StatefulDecoder`],
//!   which resolves value lengths, decodes data elements,
//!   nested sequences and encapsulated pixel data fragments.
//! - [`frames`] retrieves the frames of an object,
//!   falling back to a linear scan of the stream for the pixel data.
//! - [`file`] reads the preamble and file meta group of a DICOM file
//!   before handing the rest of it to a decoder.
//! - [`text`] decodes text values according to the specific character set.
//! - [`transfer_syntax`] derives the VR mode from a transfer syntax UID.
//!
//! For the time being, all APIs are based on synchronous I/O.
//!
//! # Example
//!
//! ```
//! # use dcmframes_parser::{StatefulDecoder, VrMode};
//! # use std::io::Cursor;
//! #[rustfmt::skip]
//! let raw: &[u8] = &[
//!     0x28, 0x00, 0x10, 0x00, // (0028,0010) Rows
//!     0x02, 0x00, 0x00, 0x00, // Length: 2
//!     0x10, 0x00,             // 16
//! ];
//! let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Implicit);
//! let data_set = decoder.decode_data_set()?;
//! assert_eq!(data_set.int(dcmframes_core::Tag(0x0028, 0x0010))?, 16);
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```

pub mod error;
pub mod file;
pub mod frames;
pub mod options;
pub mod stateful;
pub mod text;
pub mod transfer_syntax;

pub use error::{Error, Result};
pub use file::{DicomFile, OpenFileOptions, ReadPreamble};
pub use frames::{extract_frames, frames_from_data_set};
pub use options::DecodeOptions;
pub use stateful::{decode_data_set, StatefulDecoder};
pub use transfer_syntax::{is_encapsulated_transfer_syntax, VrMode};
