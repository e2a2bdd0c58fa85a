//! Stateful decoding of DICOM content.
//!
//! The [`StatefulDecoder`] reads element headers, values, sequences
//! and encapsulated pixel data from a byte source,
//! keeping track of the position and of the active character set.

pub mod decode;
mod fragments;

pub use self::decode::{decode_data_set, StatefulDecoder};
