//! This module provides the stateful decoder,
//! which turns a byte source into DICOM data elements.
//!
//! The decoder keeps track of the number of bytes read,
//! which bounds sequences and items of defined length,
//! and of the character set declared in the data set.

use crate::error::{
    structural_error, ByteBudgetExceededSnafu, DecodeTextSnafu, MalformedReservedSnafu,
    ReadSourceSnafu, RecursionLimitExceededSnafu, Result, TruncatedStreamSnafu, UndefinedLengthSnafu,
    UnexpectedStructuralTagSnafu, UnknownVrSnafu,
};
use crate::options::DecodeOptions;
use crate::text::{SpecificCharacterSet, TextCodec};
use crate::transfer_syntax::VrMode;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmframes_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmframes_core::header::{DataElementHeader, HasLength, Header, Length, Tag, VrClass, VR};
use dcmframes_core::value::{Value, C};
use dcmframes_core::{DataElement, DataSet, Sequence};
use dcmframes_dictionary_std::{tags, StandardDataDictionary};
use snafu::{ensure, OptionExt, ResultExt};
use std::io::{self, Read};
use tracing::{debug, warn};

/// A stateful decoder of DICOM content in little endian byte order.
///
/// `S` is the byte source,
/// `D` is the data dictionary consulted for implicit VR content.
///
/// Decoding is sequential:
/// each operation starts at the current position of the source
/// and leaves it right after what was decoded.
#[derive(Debug)]
pub struct StatefulDecoder<S, D = StandardDataDictionary> {
    from: S,
    mode: VrMode,
    dict: D,
    text: SpecificCharacterSet,
    options: DecodeOptions,
    bytes_read: u64,
    /// a tag already consumed from the source but not yet decoded
    pending_tag: Option<Tag>,
    /// the last tag read, reported by errors which occur between elements
    last_tag: Tag,
}

impl<S> StatefulDecoder<S>
where
    S: Read,
{
    /// Create a new decoder over the given source,
    /// using the standard data dictionary.
    pub fn new(from: S, mode: VrMode) -> Self {
        StatefulDecoder::with_dict(from, mode, StandardDataDictionary)
    }

    /// Create a new decoder for reading the file meta group,
    /// which is always in _Explicit VR Little Endian_.
    pub fn file_header_decoder(from: S) -> Self {
        StatefulDecoder::new(from, VrMode::Explicit)
    }
}

impl<S, D> StatefulDecoder<S, D>
where
    S: Read,
    D: DataDictionary,
{
    /// Create a new decoder over the given source and data dictionary.
    pub fn with_dict(from: S, mode: VrMode, dict: D) -> Self {
        StatefulDecoder {
            from,
            mode,
            dict,
            text: SpecificCharacterSet::default(),
            options: DecodeOptions::default(),
            bytes_read: 0,
            pending_tag: None,
            last_tag: Tag(0x0000, 0x0000),
        }
    }

    /// Replace the decoding options.
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the position of the source at building time,
    /// so that reported offsets are absolute.
    pub fn with_base_offset(mut self, offset: u64) -> Self {
        self.bytes_read = offset;
        self
    }

    /// Retrieve the exact number of bytes read so far by the decoder.
    #[inline]
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Retrieve the VR mode of the decoder.
    #[inline]
    pub fn mode(&self) -> VrMode {
        self.mode
    }

    /// Replace the VR mode for the elements which follow.
    pub(crate) fn set_mode(&mut self, mode: VrMode) {
        self.mode = mode;
    }

    /// Retrieve the decoding options.
    #[inline]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Retrieve the character set currently used for text values.
    #[inline]
    pub fn character_set(&self) -> SpecificCharacterSet {
        self.text
    }

    /// Retrieve the tag consumed from the source but not yet decoded, if any.
    #[inline]
    pub fn pending_tag(&self) -> Option<Tag> {
        self.pending_tag
    }

    /// Unwrap the decoder, returning the underlying source.
    pub fn into_inner(self) -> S {
        self.from
    }

    // ---------------- byte level reads ---------------------

    fn check_budget(&self, n: u64) -> Result<()> {
        if let Some(budget) = self.options.byte_budget {
            ensure!(
                self.bytes_read + n <= budget,
                ByteBudgetExceededSnafu { budget }
            );
        }
        Ok(())
    }

    /// Fill the buffer from the source on behalf of the element `tag`.
    pub(crate) fn read_exact(&mut self, buf: &mut [u8], tag: Tag) -> Result<()> {
        self.check_budget(buf.len() as u64)?;
        let offset = self.bytes_read;
        match self.from.read_exact(buf) {
            Ok(()) => {
                self.bytes_read += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                TruncatedStreamSnafu { tag, offset }.fail()
            }
            Err(e) => Err(e).context(ReadSourceSnafu { tag, offset }),
        }
    }

    /// Read exactly `len` bytes of value data.
    ///
    /// The buffer grows with the data actually read,
    /// so a bogus length cannot trigger a huge allocation up front.
    pub(crate) fn read_value_bytes(&mut self, len: u32, tag: Tag) -> Result<Vec<u8>> {
        let len = u64::from(len);
        self.check_budget(len)?;
        let offset = self.bytes_read;
        let mut buf = Vec::new();
        let n = (&mut self.from)
            .take(len)
            .read_to_end(&mut buf)
            .context(ReadSourceSnafu { tag, offset })?;
        self.bytes_read += n as u64;
        ensure!(n as u64 == len, TruncatedStreamSnafu { tag, offset });
        Ok(buf)
    }

    /// Consume `len` bytes of value data without keeping them.
    pub(crate) fn skip_bytes(&mut self, len: u32, tag: Tag) -> Result<()> {
        let len = u64::from(len);
        self.check_budget(len)?;
        let offset = self.bytes_read;
        let n = io::copy(&mut (&mut self.from).take(len), &mut io::sink())
            .context(ReadSourceSnafu { tag, offset })?;
        self.bytes_read += n;
        ensure!(n == len, TruncatedStreamSnafu { tag, offset });
        Ok(())
    }

    /// Read a raw 4 byte length, as found after item and delimiter tags.
    pub(crate) fn read_raw_length(&mut self, tag: Tag) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf, tag)?;
        Ok(LittleEndian::read_u32(&buf))
    }

    // ---------------- headers ---------------------

    /// Read the next tag from the source,
    /// or `None` if the source ended cleanly before it.
    ///
    /// A tag left pending by [`read_metadata`](Self::read_metadata)
    /// is returned first.
    /// A source ending in the middle of the tag is a truncated stream.
    pub fn try_read_tag(&mut self) -> Result<Option<Tag>> {
        if let Some(tag) = self.pending_tag.take() {
            self.last_tag = tag;
            return Ok(Some(tag));
        }

        let offset = self.bytes_read;
        let mut buf = [0u8; 4];
        let mut filled = 0;
        while filled < buf.len() {
            match self.from.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    return Err(e).context(ReadSourceSnafu {
                        tag: self.last_tag,
                        offset,
                    })
                }
            }
        }
        if filled == 0 {
            return Ok(None);
        }
        self.check_budget(4)?;
        self.bytes_read += filled as u64;
        ensure!(
            filled == 4,
            TruncatedStreamSnafu {
                tag: self.last_tag,
                offset
            }
        );

        let tag = Tag(
            LittleEndian::read_u16(&buf[0..2]),
            LittleEndian::read_u16(&buf[2..4]),
        );
        self.last_tag = tag;
        Ok(Some(tag))
    }

    /// Read the next tag from the source.
    pub fn read_tag(&mut self) -> Result<Tag> {
        let offset = self.bytes_read;
        let tag = self.last_tag;
        self.try_read_tag()?
            .context(TruncatedStreamSnafu { tag, offset })
    }

    /// Determine the value representation of the element `tag`.
    ///
    /// Under explicit VR, the two character code is read from the source.
    /// Under implicit VR, the data dictionary is consulted:
    /// pixel data and overlay data resolve to OW,
    /// tags unknown to the dictionary to UN.
    pub fn read_vr(&mut self, tag: Tag) -> Result<VR> {
        match self.mode {
            VrMode::Explicit => {
                let offset = self.bytes_read;
                let mut code = [0u8; 2];
                self.read_exact(&mut code, tag)?;
                VR::from_binary(code).context(UnknownVrSnafu { tag, offset, code })
            }
            VrMode::Implicit => Ok(self.implicit_vr(tag)),
        }
    }

    fn implicit_vr(&self, tag: Tag) -> VR {
        let overlay_data = tag.group() & 0xFF00 == 0x6000 && tag.element() == 0x3000;
        if tag == Tag::PIXEL_DATA || overlay_data {
            return VR::OW;
        }
        self.dict.by_tag(tag).map(|entry| entry.vr()).unwrap_or(VR::UN)
    }

    /// Read the value length of the element `tag` with the given VR.
    ///
    /// Item and delimiter tags are followed by a raw 4 byte length.
    /// Under implicit VR the length is always 4 bytes.
    /// Under explicit VR, short length VRs use 2 bytes,
    /// all other VRs use 2 reserved bytes (which must be zero)
    /// followed by 4 bytes.
    pub fn read_length(&mut self, tag: Tag, vr: VR) -> Result<Length> {
        if tag.is_structural() || self.mode == VrMode::Implicit {
            return self.read_raw_length(tag).map(Length);
        }
        if vr.has_short_length() {
            let mut buf = [0u8; 2];
            self.read_exact(&mut buf, tag)?;
            return Ok(Length(u32::from(LittleEndian::read_u16(&buf))));
        }

        let offset = self.bytes_read;
        let mut reserved = [0u8; 2];
        self.read_exact(&mut reserved, tag)?;
        ensure!(
            reserved == [0, 0],
            MalformedReservedSnafu {
                tag,
                offset,
                reserved
            }
        );
        self.read_raw_length(tag).map(Length)
    }

    /// Resolve the value length of the element `tag`,
    /// whose tag was just read.
    ///
    /// Returns the length and the number of bytes consumed to obtain it,
    /// including the VR code under explicit VR.
    pub fn resolve_length(&mut self, tag: Tag) -> Result<(Length, u64)> {
        let start = self.bytes_read;
        let len = if tag.is_structural() {
            self.read_length(tag, VR::UN)?
        } else {
            let vr = self.read_vr(tag)?;
            self.read_length(tag, vr)?
        };
        Ok((len, self.bytes_read - start))
    }

    /// Read the remainder of the element header for `tag`,
    /// whose tag was just read.
    pub fn read_header(&mut self, tag: Tag) -> Result<DataElementHeader> {
        let vr = self.read_vr(tag)?;
        let len = self.read_length(tag, vr)?;
        Ok(DataElementHeader::new(tag, vr, len))
    }

    // ---------------- elements ---------------------

    /// Decode the data element `tag`, whose tag was just read,
    /// including any nested sequence items.
    pub fn decode_element(&mut self, tag: Tag) -> Result<DataElement> {
        self.decode_element_at(tag, 0)
    }

    pub(crate) fn decode_element_at(&mut self, tag: Tag, depth: u32) -> Result<DataElement> {
        let offset = self.bytes_read.saturating_sub(4);
        ensure!(
            !tag.is_structural(),
            UnexpectedStructuralTagSnafu { tag, offset }
        );

        let header = self.read_header(tag)?;
        let value = self.decode_value(&header, offset, depth)?;
        debug!(
            "Decoded {} {} ({}) at offset {}",
            tag,
            header.vr(),
            header.length(),
            offset
        );
        Ok(DataElement::new(header, value))
    }

    fn decode_value(&mut self, header: &DataElementHeader, offset: u64, depth: u32) -> Result<Value> {
        let tag = header.tag();
        let vr = header.vr();
        let len = header.length();

        match vr.class() {
            VrClass::Sequence => self.decode_items(tag, len, depth).map(Value::Sequence),
            VrClass::Binary => match len.get() {
                Some(len) => self.read_value_bytes(len, tag).map(Value::Binary),
                None => {
                    let mut frames = self.reassemble_fragments()?;
                    if frames.len() == 1 {
                        Ok(Value::Binary(frames.remove(0)))
                    } else {
                        Ok(Value::Empty)
                    }
                }
            },
            VrClass::Unknown => match len.get() {
                Some(len) => {
                    self.skip_bytes(len, tag)?;
                    Ok(Value::Empty)
                }
                None => {
                    // PS3.5 6.2.2: content of unknown VR and undefined length
                    // is a sequence encoded in implicit VR little endian
                    let mode = std::mem::replace(&mut self.mode, VrMode::Implicit);
                    let items = self.decode_items(tag, len, depth);
                    self.mode = mode;
                    items.map(Value::Sequence)
                }
            },
            VrClass::Text => {
                let len = len.get().context(UndefinedLengthSnafu { tag, offset })?;
                let bytes = self.read_value_bytes(len, tag)?;
                let text = self
                    .text
                    .decode(&bytes)
                    .context(DecodeTextSnafu { tag, offset })?;
                Ok(Value::Text(text))
            }
            VrClass::Integer => {
                let len = len.get().context(UndefinedLengthSnafu { tag, offset })?;
                let bytes = self.read_value_bytes(len, tag)?;
                Ok(Value::Int(read_ints(tag, vr, &bytes)))
            }
            VrClass::Float => {
                let len = len.get().context(UndefinedLengthSnafu { tag, offset })?;
                let bytes = self.read_value_bytes(len, tag)?;
                Ok(Value::Float(read_floats(tag, vr, &bytes)))
            }
        }
    }

    // ---------------- sequences ---------------------

    /// Decode the sequence `tag`, whose tag (and VR code, if explicit)
    /// were just read.
    ///
    /// The sequence length is read first.
    /// A sequence of defined length ends once that many bytes were consumed,
    /// a sequence of undefined length ends at the sequence delimiter.
    pub fn decode_sequence(&mut self, tag: Tag) -> Result<Sequence> {
        let len = self.read_length(tag, VR::SQ)?;
        self.decode_items(tag, len, 0)
    }

    /// Decode the items of the sequence `tag` at the given depth,
    /// the sequence length having already been read.
    fn decode_items(&mut self, tag: Tag, len: Length, depth: u32) -> Result<Sequence> {
        let end = len.get().map(|len| self.bytes_read + u64::from(len));
        let mut items = Vec::new();

        loop {
            if let Some(end) = end {
                if self.bytes_read >= end {
                    if self.bytes_read > end {
                        warn!(
                            "Sequence {} overran its length by {} bytes",
                            tag,
                            self.bytes_read - end
                        );
                    }
                    break;
                }
            }

            let offset = self.bytes_read;
            let item_tag = self.read_tag()?;
            match item_tag {
                Tag::ITEM => {
                    let item_len = self.read_raw_length(item_tag)?;
                    let item_depth = depth + 1;
                    ensure!(
                        item_depth <= self.options.depth_limit(),
                        RecursionLimitExceededSnafu {
                            depth: item_depth,
                            offset
                        }
                    );
                    let item = self.decode_item(Length(item_len), item_depth)?;
                    items.push(item);
                }
                Tag::ITEM_DELIMITER => {
                    let delimiter_len = self.read_raw_length(item_tag)?;
                    if delimiter_len != 0 {
                        return structural_error(item_tag, offset, delimiter_len);
                    }
                    warn!(
                        "Stray item delimiter in sequence {} at offset {}",
                        tag, offset
                    );
                }
                Tag::SEQUENCE_DELIMITER => {
                    let delimiter_len = self.read_raw_length(item_tag)?;
                    if delimiter_len != 0 {
                        return structural_error(item_tag, offset, delimiter_len);
                    }
                    break;
                }
                other => {
                    return UnexpectedStructuralTagSnafu { tag: other, offset }.fail();
                }
            }
        }

        debug!("Decoded sequence {} with {} items", tag, items.len());
        Ok(items)
    }

    /// Decode one item data set, its item header having just been read.
    fn decode_item(&mut self, len: Length, depth: u32) -> Result<DataSet> {
        let mut item = DataSet::new();
        match len.get() {
            Some(len) => {
                let end = self.bytes_read + u64::from(len);
                while self.bytes_read < end {
                    let tag = self.read_tag()?;
                    let element = self.decode_element_at(tag, depth)?;
                    put_element(&mut item, element);
                }
                if self.bytes_read > end {
                    warn!(
                        "Item overran its length by {} bytes",
                        self.bytes_read - end
                    );
                }
            }
            None => loop {
                let offset = self.bytes_read;
                let tag = self.read_tag()?;
                if tag == Tag::ITEM_DELIMITER {
                    let delimiter_len = self.read_raw_length(tag)?;
                    if delimiter_len != 0 {
                        return structural_error(tag, offset, delimiter_len);
                    }
                    break;
                }
                let element = self.decode_element_at(tag, depth)?;
                put_element(&mut item, element);
            },
        }
        Ok(item)
    }

    // ---------------- data sets ---------------------

    /// Decode a flat sequence of elements until the source is exhausted.
    pub fn decode_data_set(&mut self) -> Result<DataSet> {
        let mut set = DataSet::new();
        while let Some(tag) = self.try_read_tag()? {
            let element = self.decode_element_at(tag, 0)?;
            self.put_root_element(&mut set, element);
        }
        Ok(set)
    }

    /// Decode elements until the pixel data tag is found
    /// or the source is exhausted.
    ///
    /// The pixel data tag is left pending,
    /// to be decoded by a subsequent frame extraction.
    pub fn read_metadata(&mut self) -> Result<DataSet> {
        let mut set = DataSet::new();
        while let Some(tag) = self.try_read_tag()? {
            if tag == Tag::PIXEL_DATA {
                self.pending_tag = Some(tag);
                break;
            }
            let element = self.decode_element_at(tag, 0)?;
            self.put_root_element(&mut set, element);
        }
        Ok(set)
    }

    /// Insert an element of the root data set,
    /// switching the text codec on a specific character set.
    pub(crate) fn put_root_element(&mut self, set: &mut DataSet, element: DataElement) {
        if element.tag() == tags::SPECIFIC_CHARACTER_SET {
            self.switch_character_set(element.value());
        }
        put_element(set, element);
    }

    fn switch_character_set(&mut self, value: &Value) {
        let codes = value.to_multi_str().unwrap_or_default();
        let code = match codes.iter().find(|code| !code.is_empty()) {
            Some(code) => code,
            None => return,
        };
        match SpecificCharacterSet::from_code(code) {
            Some(charset) => {
                debug!("Switching to character set {}", charset.name());
                self.text = charset;
            }
            None => warn!(
                "Unsupported character set `{}`, keeping {}",
                code,
                self.text.name()
            ),
        }
    }
}

/// Decode a flat sequence of data elements from the given source
/// until it is exhausted, using the standard data dictionary
/// and the default decoding options.
pub fn decode_data_set<S>(from: S, mode: VrMode) -> Result<DataSet>
where
    S: Read,
{
    StatefulDecoder::new(from, mode).decode_data_set()
}

fn put_element(set: &mut DataSet, element: DataElement) {
    if let Some(old) = set.put(element) {
        warn!("Duplicate data element {} replaced", old.tag());
    }
}

fn warn_trailing(tag: Tag, vr: VR, len: usize, width: usize) {
    let rest = len % width;
    if rest != 0 {
        warn!(
            "Ignoring {} trailing bytes in {} value of {}",
            rest, vr, tag
        );
    }
}

/// Interpret the bytes of a fixed-width integer value.
fn read_ints(tag: Tag, vr: VR, bytes: &[u8]) -> C<i64> {
    let width = vr.value_width().unwrap_or(1);
    warn_trailing(tag, vr, bytes.len(), width);
    bytes
        .chunks_exact(width)
        .map(|c| match vr {
            VR::SS => i64::from(LittleEndian::read_i16(c)),
            VR::US => i64::from(LittleEndian::read_u16(c)),
            VR::SL => i64::from(LittleEndian::read_i32(c)),
            VR::UL => i64::from(LittleEndian::read_u32(c)),
            VR::AT => {
                let tag = Tag(LittleEndian::read_u16(&c[0..2]), LittleEndian::read_u16(&c[2..4]));
                i64::from(tag.to_u32())
            }
            VR::SV => LittleEndian::read_i64(c),
            // values above i64::MAX wrap around
            VR::UV => LittleEndian::read_u64(c) as i64,
            _ => i64::from(c[0]),
        })
        .collect()
}

/// Interpret the bytes of a fixed-width floating point value.
fn read_floats(tag: Tag, vr: VR, bytes: &[u8]) -> C<f64> {
    let width = vr.value_width().unwrap_or(8);
    warn_trailing(tag, vr, bytes.len(), width);
    bytes
        .chunks_exact(width)
        .map(|c| match vr {
            VR::FL => f64::from(LittleEndian::read_f32(c)),
            _ => LittleEndian::read_f64(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::StatefulDecoder;
    use crate::error::Error;
    use crate::options::DecodeOptions;
    use crate::transfer_syntax::VrMode;
    use dcmframes_core::header::{HasLength, Length, Tag, VR};
    use dcmframes_core::value::Value;
    use std::io::Cursor;

    // manually crafting some DICOM data elements
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x08, 0x00, 0x60, 0x00,     // (0008,0060) Modality
            b'C', b'S',             // VR: CS (Code String)
            0x02, 0x00,             // Length: 2 bytes
                b'M', b'R',
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            b'P', b'N',             // VR: PN (Person Name)
            0x08, 0x00,             // Length: 8 bytes
                b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
        0x28, 0x00, 0x03, 0x95,     // (0028,9503) Vertices of the Region
            b'S', b'S',             // VR: SS (Signed Short)
            0x04, 0x00,             // Length: 4 bytes (2 * 2)
                0x29, 0xEE,         // Value: -4567
                0xE1, 0x10,         // Value: 4321
        0x72, 0x00, 0x26, 0x00,     // (0072,0026) Selector Attribute
            b'A', b'T',             // VR: AT (Attribute Tag)
            0x04, 0x00,             // Length: 4 bytes
                0x28, 0x00, 0x10, 0x21, // Tag: (0028,2110)
        0x40, 0x00, 0x25, 0x92,     // (0040,9225) Real World Value Slope
            b'F', b'D',             // VR: FD
            0x08, 0x00,             // Length: 8 bytes
                // Value: 3.141592653589793
                0x18, 0x2D, 0x44, 0x54, 0xFB, 0x21, 0x09, 0x40,
        0x72, 0x00, 0x82, 0x00,     // (0072,0082) Selector SV Value
            b'S', b'V',             // VR: SV (Signed Very long)
            0x00, 0x00,             // Reserved, always 0
            0x08, 0x00, 0x00, 0x00, // Length: 8 bytes
                // Value: -123456789012345678
                0xB2, 0x0C, 0xCF, 0x59, 0xB4, 0x64, 0x49, 0xFE,
        0x08, 0x00, 0x1B, 0x04,     // (0008,041B) RecordKey
            b'O', b'B',             // VR: OB (Other Byte)
            0x00, 0x00,             // Reserved, always 0
            0x02, 0x00, 0x00, 0x00, // Length: 2 bytes
                0x12, 0x34,
        0x01, 0xC0, 0x34, 0x12,     // (C001,1234) private data element
            b'U', b'N',             // VR: UN (Unknown)
            0x00, 0x00,             // Reserved, always 0
            0x06, 0x00, 0x00, 0x00, // Length: 6 bytes
                0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
    ];

    #[test]
    fn decode_explicit_elements() {
        let mut decoder = StatefulDecoder::new(Cursor::new(RAW), VrMode::Explicit);

        let tag = decoder.read_tag().unwrap();
        let modality = decoder.decode_element(tag).unwrap();
        assert_eq!(modality.vr(), VR::CS);
        assert_eq!(modality.value(), &Value::from("MR"));
        assert_eq!(decoder.bytes_read(), 10);

        let tag = decoder.read_tag().unwrap();
        let name = decoder.decode_element(tag).unwrap();
        assert_eq!(name.value().to_str().unwrap(), "Doe^John");

        let tag = decoder.read_tag().unwrap();
        let vertices = decoder.decode_element(tag).unwrap();
        assert_eq!(vertices.value().ints().unwrap(), &[-4567, 4321]);

        let tag = decoder.read_tag().unwrap();
        let selector = decoder.decode_element(tag).unwrap();
        assert_eq!(selector.value().ints().unwrap(), &[0x0028_2110]);

        let tag = decoder.read_tag().unwrap();
        let slope = decoder.decode_element(tag).unwrap();
        assert_eq!(slope.value().floats().unwrap(), &[std::f64::consts::PI]);

        let tag = decoder.read_tag().unwrap();
        let sv = decoder.decode_element(tag).unwrap();
        assert_eq!(sv.value().ints().unwrap(), &[-123_456_789_012_345_678]);

        let tag = decoder.read_tag().unwrap();
        let record_key = decoder.decode_element(tag).unwrap();
        assert_eq!(record_key.value().binary().unwrap(), &[0x12, 0x34]);
        assert_eq!(record_key.length(), Length(2));

        // unknown content is skipped
        let tag = decoder.read_tag().unwrap();
        let private = decoder.decode_element(tag).unwrap();
        assert_eq!(private.vr(), VR::UN);
        assert_eq!(private.value(), &Value::Empty);

        assert_eq!(decoder.bytes_read(), RAW.len() as u64);
        assert_eq!(decoder.try_read_tag().unwrap(), None);
    }

    #[test]
    fn decode_explicit_data_set() {
        let mut decoder = StatefulDecoder::new(Cursor::new(RAW), VrMode::Explicit);
        let set = decoder.decode_data_set().unwrap();
        assert_eq!(set.len(), 8);
        assert_eq!(set.string(Tag(0x0008, 0x0060)).unwrap(), "MR");
    }

    #[test]
    fn length_forms_consume_expected_bytes() {
        #[rustfmt::skip]
        let short: &[u8] = &[
            b'U', b'S',             // VR: US
            0x02, 0x00,             // Length: 2 bytes
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(short), VrMode::Explicit);
        let (len, consumed) = decoder.resolve_length(Tag(0x0028, 0x0010)).unwrap();
        assert_eq!(len, Length(2));
        assert_eq!(consumed, 4);

        #[rustfmt::skip]
        let long: &[u8] = &[
            b'O', b'W',             // VR: OW
            0x00, 0x00,             // Reserved, always 0
            0x00, 0x01, 0x00, 0x00, // Length: 256 bytes
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(long), VrMode::Explicit);
        let (len, consumed) = decoder.resolve_length(Tag(0x7FE0, 0x0010)).unwrap();
        assert_eq!(len, Length(256));
        assert_eq!(consumed, 8);

        // sentinel tags carry a raw length
        let raw: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        let (len, consumed) = decoder.resolve_length(Tag::ITEM).unwrap();
        assert!(len.is_undefined());
        assert_eq!(consumed, 4);
    }

    #[test]
    fn nonzero_reserved_bytes_fail() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            b'O', b'B',             // VR: OB
            0x01, 0x00,             // Reserved, not 0
            0x02, 0x00, 0x00, 0x00, // Length: 2 bytes
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        let err = decoder.resolve_length(Tag(0x0008, 0x041B)).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedReserved {
                offset: 2,
                reserved: [0x01, 0x00],
                ..
            }
        ));
    }

    #[test]
    fn unknown_vr_code_fails() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, // (0008,0060) Modality
                b'Z', b'Z',         // VR: not a VR
                0x02, 0x00,
                b'M', b'R',
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        let err = decoder.decode_data_set().unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownVr {
                tag: Tag(0x0008, 0x0060),
                offset: 4,
                code: [b'Z', b'Z'],
                ..
            }
        ));
    }

    #[test]
    fn truncated_value_fails() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, // (0010,0010) Patient Name
                b'P', b'N',
                0x08, 0x00,         // Length: 8 bytes
                b'D', b'o', b'e',   // only 3 bytes follow
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        let err = decoder.decode_data_set().unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedStream {
                tag: Tag(0x0010, 0x0010),
                offset: 8,
                ..
            }
        ));
    }

    #[test]
    fn truncated_tag_fails() {
        let raw: &[u8] = &[0x08, 0x00];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert!(matches!(
            decoder.try_read_tag(),
            Err(Error::TruncatedStream { offset: 0, .. })
        ));
    }

    #[test]
    fn undefined_length_text_fails() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x08, 0x00, 0x19, 0x01, // (0008,0119) Long Code Value
                b'U', b'C',
                0x00, 0x00,
                0xFF, 0xFF, 0xFF, 0xFF, // Undefined length
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        let err = decoder.decode_data_set().unwrap_err();
        assert!(matches!(err, Error::UndefinedLength { offset: 0, .. }));
    }

    #[test]
    fn implicit_vr_from_dictionary() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
                0x02, 0x00, 0x00, 0x00, // Length: 2 bytes
                0x10, 0x00,             // Value: 16
            0x08, 0x00, 0x60, 0x00,     // (0008,0060) Modality
                0x02, 0x00, 0x00, 0x00, // Length: 2 bytes
                b'C', b'T',
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Implicit);
        let set = decoder.decode_data_set().unwrap();
        let rows = set.element(Tag(0x0028, 0x0010)).unwrap();
        assert_eq!(rows.vr(), VR::US);
        assert_eq!(rows.value().to_int().unwrap(), 16);
        assert_eq!(set.string(Tag(0x0008, 0x0060)).unwrap(), "CT");
    }

    #[test]
    fn implicit_pixel_and_overlay_data_are_words() {
        let mut decoder = StatefulDecoder::new(Cursor::new(&[][..]), VrMode::Implicit);
        assert_eq!(decoder.read_vr(Tag::PIXEL_DATA).unwrap(), VR::OW);
        assert_eq!(decoder.read_vr(Tag(0x6002, 0x3000)).unwrap(), VR::OW);
        assert_eq!(decoder.read_vr(Tag(0x0029, 0x1010)).unwrap(), VR::UN);
        assert_eq!(decoder.bytes_read(), 0);
    }

    #[test]
    fn character_set_switches_text_decoding() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x08, 0x00, 0x05, 0x00,     // (0008,0005) Specific Character Set
                b'C', b'S',
                0x0A, 0x00,             // Length: 10 bytes
                b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'9', b'2',
            0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
                b'P', b'N',
                0x04, 0x00,             // Length: 4 bytes
                b'J', 0xC3, 0xA9, b' ', // "Jé " in UTF-8
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        let set = decoder.decode_data_set().unwrap();
        assert_eq!(set.string(Tag(0x0010, 0x0010)).unwrap(), "Jé");
    }

    #[test]
    fn byte_budget_is_enforced() {
        let mut decoder = StatefulDecoder::new(Cursor::new(RAW), VrMode::Explicit)
            .with_options(DecodeOptions::new().byte_budget(16));
        let err = decoder.decode_data_set().unwrap_err();
        assert!(matches!(err, Error::ByteBudgetExceeded { budget: 16, .. }));

        // a budget covering the whole source is not an error
        let mut decoder = StatefulDecoder::new(Cursor::new(RAW), VrMode::Explicit)
            .with_options(DecodeOptions::new().byte_budget(RAW.len() as u64));
        assert!(decoder.decode_data_set().is_ok());
    }

    #[test]
    fn metadata_stops_before_pixel_data() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
                b'U', b'S', 0x02, 0x00,
                0x02, 0x00,
            0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
                b'O', b'B', 0x00, 0x00,
                0x02, 0x00, 0x00, 0x00,
                0xAB, 0xCD,
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        let meta = decoder.read_metadata().unwrap();
        assert_eq!(meta.len(), 1);
        assert_eq!(decoder.pending_tag(), Some(Tag::PIXEL_DATA));

        let tag = decoder.read_tag().unwrap();
        assert_eq!(tag, Tag::PIXEL_DATA);
        let pixel_data = decoder.decode_element(tag).unwrap();
        assert_eq!(pixel_data.value().binary().unwrap(), &[0xAB, 0xCD]);
    }

    #[test]
    fn pending_tag_is_reported_by_later_errors() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
                b'U', b'S', 0x02, 0x00,
                0x02, 0x00,
            0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        decoder.read_metadata().unwrap();
        decoder.last_tag = Tag(0x0028, 0x0010);

        assert_eq!(decoder.read_tag().unwrap(), Tag::PIXEL_DATA);
        assert!(matches!(
            decoder.read_tag(),
            Err(Error::TruncatedStream {
                tag: Tag::PIXEL_DATA,
                offset: 14,
                ..
            })
        ));
    }
}
