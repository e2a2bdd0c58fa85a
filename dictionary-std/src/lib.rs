//! This crate implements the standard DICOM attribute dictionary
//! and constants needed by the dcmframes decoder.
//!
//! ## Run-time dictionary
//!
//! - [`data_element`]: the attributes known to the decoder,
//!   queried by tag when decoding implicit VR content.
//!   Repeating groups, generic group lengths and private creators
//!   are resolved as well.
//!
//! The records are collected from [DICOM PS3.6].
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for the normative transfer syntax unique identifiers
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::StandardDataDictionary;
