//! Data types for interpreting the header of a DICOM data element:
//! the attribute tag, the value representation and the value length.

use std::cmp::Ordering;
use std::fmt;

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value length as declared in the header, in bytes.
    ///
    /// The length may be undefined for sequences,
    /// items and encapsulated pixel data.
    fn length(&self) -> Length;
}

/// A trait for a data type containing a DICOM header.
pub trait Header: HasLength {
    /// Retrieve the element's tag.
    fn tag(&self) -> Tag;
}

/// The header of a data element as read from the stream.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Declared value length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header.
    #[inline]
    pub fn new(tag: Tag, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader { tag, vr, len }
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }
}

/// The shape of the value held by elements of a given value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum VrClass {
    /// Character string values, possibly multi-valued.
    Text,
    /// Fixed-width binary integers (including attribute tags).
    Integer,
    /// Fixed-width binary floating point numbers.
    Float,
    /// Opaque byte blobs (the `O*` family).
    Binary,
    /// A nested sequence of items.
    Sequence,
    /// Content of unknown representation.
    Unknown,
}

// Declares `VR` from a table of
// `code => (value class, length field size under explicit VR)`.
macro_rules! value_representations {
    ($($(#[$doc:meta])* $vr:ident => ($class:ident, $len_field:literal),)+) => {
        /// A DICOM value representation.
        #[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
        pub enum VR {
            $($(#[$doc])* $vr,)+
        }

        impl VR {
            /// Parse the two character code of a value representation,
            /// as found in explicit VR element headers.
            pub fn from_binary(code: [u8; 2]) -> Option<VR> {
                $(
                    if code[..] == *stringify!($vr).as_bytes() {
                        return Some(VR::$vr);
                    }
                )+
                None
            }

            /// The two character code of this VR.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(VR::$vr => stringify!($vr),)+
                }
            }

            /// Classify this VR by the shape of its decoded value.
            pub fn class(self) -> VrClass {
                match self {
                    $(VR::$vr => VrClass::$class,)+
                }
            }

            /// Whether the value length of an element with this VR is
            /// encoded in 2 bytes under explicit VR.
            ///
            /// All other representations use 2 reserved bytes
            /// followed by a 4 byte length.
            pub fn has_short_length(self) -> bool {
                match self {
                    $(VR::$vr => $len_field == 2,)+
                }
            }
        }
    };
}

value_representations! {
    /// Application Entity
    AE => (Text, 2),
    /// Age String
    AS => (Text, 2),
    /// Attribute Tag
    AT => (Integer, 2),
    /// Code String
    CS => (Text, 2),
    /// Date
    DA => (Text, 2),
    /// Decimal String
    DS => (Text, 2),
    /// Date Time
    DT => (Text, 2),
    /// Floating Point Single
    FL => (Float, 2),
    /// Floating Point Double
    FD => (Float, 2),
    /// Integer String
    IS => (Text, 2),
    /// Long String
    LO => (Text, 2),
    /// Long Text
    LT => (Text, 2),
    /// Other Byte
    OB => (Binary, 4),
    /// Other Double
    OD => (Binary, 4),
    /// Other Float
    OF => (Binary, 4),
    /// Other Long
    OL => (Binary, 4),
    /// Other Very Long
    OV => (Binary, 4),
    /// Other Word
    OW => (Binary, 4),
    /// Person Name
    PN => (Text, 2),
    /// Short String
    SH => (Text, 2),
    /// Signed Long
    SL => (Integer, 2),
    /// Sequence of Items
    SQ => (Sequence, 4),
    /// Signed Short
    SS => (Integer, 2),
    /// Short Text
    ST => (Text, 2),
    /// Signed Very Long
    SV => (Integer, 4),
    /// Time
    TM => (Text, 2),
    /// Unlimited Characters
    UC => (Text, 4),
    /// Unique Identifier
    UI => (Text, 2),
    /// Unsigned Long
    UL => (Integer, 2),
    /// Unknown
    UN => (Unknown, 4),
    /// Universal Resource Identifier or Locator
    UR => (Text, 4),
    /// Unsigned Short
    US => (Integer, 2),
    /// Unlimited Text
    UT => (Text, 4),
    /// Unsigned Very Long
    UV => (Integer, 4),
}

impl VR {
    /// The code of this VR as it is written in explicit VR headers.
    pub fn to_bytes(self) -> [u8; 2] {
        let code = self.as_str().as_bytes();
        [code[0], code[1]]
    }

    /// The width in bytes of each value of a fixed-width numeric VR.
    ///
    /// Returns `None` for representations without a fixed width.
    pub fn value_width(self) -> Option<usize> {
        use VR::*;
        match self {
            SS | US => Some(2),
            AT | SL | UL | FL => Some(4),
            SV | UV | FD => Some(8),
            _ => None,
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The data type for DICOM data element tags.
///
/// A tag is a `(group, element)` pair.
/// On the wire and in tag constants it is often seen
/// as a single 32-bit number `(group << 16) | element`,
/// see [`Tag::to_u32`] and [`Tag::from_u32`].
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub u16, pub u16);

impl Tag {
    /// Item (FFFE,E000)
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D)
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD)
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// Pixel Data (7FE0,0010)
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

    /// The tag's group number.
    #[inline]
    pub fn group(self) -> u16 {
        self.0
    }

    /// The tag's element number.
    #[inline]
    pub fn element(self) -> u16 {
        self.1
    }

    /// Pack the tag into a single number, group first.
    #[inline]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Unpack a tag from its `(group << 16) | element` representation.
    #[inline]
    pub fn from_u32(value: u32) -> Tag {
        Tag((value >> 16) as u16, (value & 0xFFFF) as u16)
    }

    /// Whether this is one of the three structural tags
    /// (item, item delimiter, sequence delimiter).
    #[inline]
    pub fn is_structural(self) -> bool {
        self == Tag::ITEM || self == Tag::ITEM_DELIMITER || self == Tag::SEQUENCE_DELIMITER
    }

    /// Whether the tag belongs to a private group (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

/// A value length in bytes, as declared in an element or item header.
///
/// The raw value `0xFFFF_FFFF` stands for an undefined length,
/// in which case the extent of the value is found
/// by reading up to a delimiter.
/// An undefined length is neither equal nor comparable to any length,
/// itself included:
///
/// ```
/// # use dcmframes_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// assert!(Length(16) < Length(64));
/// assert!(!(Length::UNDEFINED < Length(64)));
/// assert!(!(Length::UNDEFINED > Length(64)));
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(0xFFFF_FFFF);

    /// Check whether this length is undefined.
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == Length::UNDEFINED.0
    }

    /// Check whether this length is defined.
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// The number of bytes, or `None` if the length is undefined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        if self.is_undefined() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.get(), rhs.get()) {
            (Some(l1), Some(l2)) => l1 == l2,
            _ => false,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.get(), rhs.get()) {
            (Some(l1), Some(l2)) => Some(l1.cmp(&l2)),
            _ => None,
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            None => f.write_str("Length(Undefined)"),
            Some(l) => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            None => f.write_str("U/L"),
            Some(l) => write!(f, "{}", l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_packing() {
        assert_eq!(Tag::ITEM.to_u32(), 0xFFFE_E000);
        assert_eq!(Tag::ITEM_DELIMITER.to_u32(), 0xFFFE_E00D);
        assert_eq!(Tag::SEQUENCE_DELIMITER.to_u32(), 0xFFFE_E0DD);
        assert_eq!(Tag::PIXEL_DATA.to_u32(), 0x7FE0_0010);
        assert_eq!(Tag::from_u32(0x0028_0010), Tag(0x0028, 0x0010));
        assert!(Tag(0x0008, 0x0018) < Tag(0x0010, 0x0010));
    }

    #[test]
    fn tag_formatting() {
        assert_eq!(Tag(0x7FE0, 0x0010).to_string(), "(7FE0,0010)");
        assert_eq!(format!("{:?}", Tag(0x0028, 0x0010)), "Tag(0x0028, 0x0010)");
    }

    #[test]
    fn structural_tags() {
        assert!(Tag::ITEM.is_structural());
        assert!(Tag::SEQUENCE_DELIMITER.is_structural());
        assert!(!Tag::PIXEL_DATA.is_structural());
        assert!(Tag(0x0009, 0x0010).is_private());
    }

    #[test]
    fn vr_codes() {
        assert_eq!(VR::from_binary(*b"OB"), Some(VR::OB));
        assert_eq!(VR::from_binary(*b"SV"), Some(VR::SV));
        assert_eq!(VR::from_binary(*b"ZZ"), None);
        assert_eq!(VR::from_binary(*b"ob"), None);
        assert_eq!(VR::from_binary([0xFF, 0x00]), None);
        assert_eq!(VR::UT.to_bytes(), *b"UT");
        assert_eq!(VR::PN.to_string(), "PN");
    }

    #[test]
    fn vr_length_forms() {
        for vr in [VR::AE, VR::AT, VR::FD, VR::IS, VR::US, VR::UL, VR::TM] {
            assert!(vr.has_short_length(), "{} should have a short length", vr);
        }
        for vr in [
            VR::OB,
            VR::OW,
            VR::SQ,
            VR::UN,
            VR::UT,
            VR::UC,
            VR::UR,
            VR::SV,
            VR::UV,
        ] {
            assert!(!vr.has_short_length(), "{} should have a long length", vr);
        }
    }

    #[test]
    fn vr_classes() {
        assert_eq!(VR::PN.class(), VrClass::Text);
        assert_eq!(VR::AT.class(), VrClass::Integer);
        assert_eq!(VR::FL.class(), VrClass::Float);
        assert_eq!(VR::OV.class(), VrClass::Binary);
        assert_eq!(VR::SQ.class(), VrClass::Sequence);
        assert_eq!(VR::UN.class(), VrClass::Unknown);
        assert_eq!(VR::SS.value_width(), Some(2));
        assert_eq!(VR::UV.value_width(), Some(8));
        assert_eq!(VR::LO.value_width(), None);
    }

    #[test]
    fn length_semantics() {
        assert!(Length::UNDEFINED.is_undefined());
        assert!(Length(0).is_defined());
        assert_eq!(Length::UNDEFINED.get(), None);
        assert_eq!(Length(12).get(), Some(12));
        assert_eq!(Length(12), Length(12));
        assert_eq!(format!("{:?}", Length::UNDEFINED), "Length(Undefined)");
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
        assert_eq!(Length(8).to_string(), "8");
    }
}
