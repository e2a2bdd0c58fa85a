//! A minimal little endian DICOM encoder,
//! used to produce input for the decoder under test.
#![allow(dead_code)]

use dcmframes_core::header::{Tag, VR};
use dcmframes_parser::VrMode;

pub const UNDEFINED: u32 = 0xFFFF_FFFF;

#[derive(Debug, Clone)]
pub struct Encoder {
    mode: VrMode,
    out: Vec<u8>,
}

impl Encoder {
    pub fn new(mode: VrMode) -> Self {
        Encoder {
            mode,
            out: Vec::new(),
        }
    }

    pub fn explicit() -> Self {
        Encoder::new(VrMode::Explicit)
    }

    pub fn implicit() -> Self {
        Encoder::new(VrMode::Implicit)
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }

    pub fn tag(&mut self, tag: Tag) -> &mut Self {
        self.out.extend_from_slice(&tag.0.to_le_bytes());
        self.out.extend_from_slice(&tag.1.to_le_bytes());
        self
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.out.extend_from_slice(bytes);
        self
    }

    /// Write an element header in the encoder's VR mode.
    pub fn header(&mut self, tag: Tag, vr: VR, len: u32) -> &mut Self {
        self.tag(tag);
        match self.mode {
            VrMode::Implicit => {
                self.out.extend_from_slice(&len.to_le_bytes());
            }
            VrMode::Explicit if vr.has_short_length() => {
                self.out.extend_from_slice(&vr.to_bytes());
                self.out.extend_from_slice(&(len as u16).to_le_bytes());
            }
            VrMode::Explicit => {
                self.out.extend_from_slice(&vr.to_bytes());
                self.out.extend_from_slice(&[0, 0]);
                self.out.extend_from_slice(&len.to_le_bytes());
            }
        }
        self
    }

    /// Write a full element with a defined length.
    pub fn element(&mut self, tag: Tag, vr: VR, value: &[u8]) -> &mut Self {
        self.header(tag, vr, value.len() as u32);
        self.raw(value)
    }

    /// Write a text element, padded to an even length.
    pub fn text(&mut self, tag: Tag, vr: VR, text: &str) -> &mut Self {
        let value = pad_text(vr, text);
        self.element(tag, vr, &value)
    }

    /// Write an item or delimiter with the given raw length.
    pub fn structural(&mut self, tag: Tag, len: u32) -> &mut Self {
        self.tag(tag);
        self.out.extend_from_slice(&len.to_le_bytes());
        self
    }

    pub fn item(&mut self, len: u32) -> &mut Self {
        self.structural(Tag::ITEM, len)
    }

    pub fn item_delimiter(&mut self) -> &mut Self {
        self.structural(Tag::ITEM_DELIMITER, 0)
    }

    pub fn sequence_delimiter(&mut self) -> &mut Self {
        self.structural(Tag::SEQUENCE_DELIMITER, 0)
    }

    /// Write a sequence of defined length
    /// whose items are also of defined length.
    pub fn defined_sequence(&mut self, tag: Tag, items: &[Vec<u8>]) -> &mut Self {
        let len: usize = items.iter().map(|item| 8 + item.len()).sum();
        self.header(tag, VR::SQ, len as u32);
        for item in items {
            self.item(item.len() as u32);
            self.raw(item);
        }
        self
    }

    /// Write a sequence of undefined length
    /// whose items are also of undefined length.
    pub fn undefined_sequence(&mut self, tag: Tag, items: &[Vec<u8>]) -> &mut Self {
        self.header(tag, VR::SQ, UNDEFINED);
        for item in items {
            self.item(UNDEFINED);
            self.raw(item);
            self.item_delimiter();
        }
        self.sequence_delimiter()
    }

    /// Write encapsulated pixel data with an empty basic offset table.
    pub fn encapsulated_pixel_data(&mut self, fragments: &[&[u8]]) -> &mut Self {
        self.header(Tag::PIXEL_DATA, VR::OB, UNDEFINED);
        self.item(0);
        for fragment in fragments {
            self.item(fragment.len() as u32);
            self.raw(fragment);
        }
        self.sequence_delimiter()
    }
}

pub fn pad_text(vr: VR, text: &str) -> Vec<u8> {
    let mut value = text.as_bytes().to_vec();
    if value.len() % 2 == 1 {
        value.push(if vr == VR::UI { 0 } else { b' ' });
    }
    value
}

pub fn u16s(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn i16s(values: &[i16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn u32s(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn i32s(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn i64s(values: &[i64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn u64s(values: &[u64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn f32s(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

pub fn f64s(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}
