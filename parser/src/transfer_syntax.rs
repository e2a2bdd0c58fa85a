//! Value representation mode selection from transfer syntax identifiers.

use dcmframes_dictionary_std::uids::{IMPLICIT_VR_LITTLE_ENDIAN, NATIVE_TRANSFER_SYNTAXES};

/// Whether the value representation of each data element
/// is written in the stream (explicit)
/// or looked up from the data dictionary (implicit).
///
/// Both modes are little endian.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VrMode {
    /// The VR is carried in the stream after each tag.
    #[default]
    Explicit,
    /// The VR is resolved from the data dictionary by tag.
    Implicit,
}

impl VrMode {
    /// Determine the VR mode from a transfer syntax UID.
    ///
    /// Trailing null or space padding in the UID is ignored.
    /// Only _Implicit VR Little Endian_ yields [`VrMode::Implicit`];
    /// any other identifier implies explicit VR.
    ///
    /// ```
    /// # use dcmframes_parser::VrMode;
    /// assert_eq!(VrMode::from_transfer_syntax("1.2.840.10008.1.2\0"), VrMode::Implicit);
    /// assert_eq!(VrMode::from_transfer_syntax("1.2.840.10008.1.2.4.90"), VrMode::Explicit);
    /// ```
    pub fn from_transfer_syntax(uid: &str) -> Self {
        if trim_uid(uid) == IMPLICIT_VR_LITTLE_ENDIAN {
            VrMode::Implicit
        } else {
            VrMode::Explicit
        }
    }
}

/// Check whether pixel data in the given transfer syntax
/// is stored in encapsulated fragments rather than natively.
pub fn is_encapsulated_transfer_syntax(uid: &str) -> bool {
    let uid = trim_uid(uid);
    !NATIVE_TRANSFER_SYNTAXES.iter().any(|ts| *ts == uid)
}

fn trim_uid(uid: &str) -> &str {
    uid.trim_end_matches(|c: char| c == '\0' || c == ' ')
}
