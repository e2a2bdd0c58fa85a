#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmframes containing the data model
//! shared by the element decoder and the frame extractor.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types for DICOM element headers,
//!   including common definitions for DICOM tags, value representations
//!   and value lengths.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute tags to a dictionary entry
//!   containing relevant information about the attribute.
//! - [`value`] holds the decoded value of a data element,
//!   with the awareness of multiplicity and the possible presence of
//!   sequences.
//! - [`object`] holds data elements and the in-memory data set
//!   they are collected into.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`object`]: ./object/index.html
//! [`value`]: ./value/index.html

pub mod dictionary;
pub mod header;
pub mod object;
pub mod value;

pub use dictionary::{DataDictionary, DataDictionaryEntryRef, TagRange};
pub use header::{DataElementHeader, HasLength, Header, Length, Tag, VrClass, VR};
pub use object::{AccessError, DataElement, DataSet, Sequence};
pub use value::{FrameBuffer, Value, ValueType, C};

// re-export crates that are part of the public API
pub use smallvec;
