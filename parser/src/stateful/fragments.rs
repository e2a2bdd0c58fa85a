//! Reassembly of encapsulated pixel data.
//!
//! Encapsulated pixel data is a sequence of items:
//! the basic offset table first, then one or more pixel data fragments,
//! closed by a sequence delimiter.

use super::decode::StatefulDecoder;
use crate::error::{
    structural_error, Error, Result, UnexpectedStructuralTagSnafu, UnsupportedOffsetTableSnafu,
};
use dcmframes_core::dictionary::DataDictionary;
use dcmframes_core::header::{Length, Tag};
use dcmframes_core::value::FrameBuffer;
use std::io::Read;
use tracing::{debug, warn};

impl<S, D> StatefulDecoder<S, D>
where
    S: Read,
    D: DataDictionary,
{
    /// Reassemble the fragments of encapsulated pixel data into frames,
    /// the element header of undefined length having just been read.
    ///
    /// With an empty basic offset table,
    /// all fragments are concatenated into a single frame,
    /// empty if the fragments are.
    /// A non-empty offset table is not resolved:
    /// the fragments are skipped and no frames are returned.
    pub fn reassemble_fragments(&mut self) -> Result<Vec<FrameBuffer>> {
        match self.read_fragments() {
            Err(Error::UnsupportedOffsetTable { len, .. }) => {
                warn!(
                    "Basic offset table of {} bytes is not supported, no frames retrieved",
                    len
                );
                Ok(Vec::new())
            }
            frames => frames,
        }
    }

    /// Read the fragments of encapsulated pixel data,
    /// the element header of undefined length having just been read.
    ///
    /// Unlike [`reassemble_fragments`](Self::reassemble_fragments),
    /// a non-empty basic offset table is reported
    /// as [`Error::UnsupportedOffsetTable`],
    /// after the fragments were consumed up to the sequence delimiter.
    pub fn read_fragments(&mut self) -> Result<Vec<FrameBuffer>> {
        let offset = self.bytes_read();
        let tag = self.read_tag()?;
        let len = self.read_raw_length(tag)?;
        match tag {
            Tag::ITEM => {}
            Tag::SEQUENCE_DELIMITER if len == 0 => {
                debug!("Encapsulated pixel data without offset table nor fragments");
                return Ok(Vec::new());
            }
            Tag::SEQUENCE_DELIMITER => return structural_error(tag, offset, len),
            other => return UnexpectedStructuralTagSnafu { tag: other, offset }.fail(),
        }

        if Length(len).is_undefined() {
            return structural_error(tag, offset, len);
        }

        if len != 0 {
            self.skip_bytes(len, tag)?;
            while let Some(fragment_len) = self.next_fragment()? {
                self.skip_bytes(fragment_len, Tag::ITEM)?;
            }
            return UnsupportedOffsetTableSnafu { len }.fail();
        }

        let mut frame = FrameBuffer::new();
        let mut fragments = 0;
        while let Some(fragment_len) = self.next_fragment()? {
            let mut fragment = self.read_value_bytes(fragment_len, Tag::ITEM)?;
            frame.append(&mut fragment);
            fragments += 1;
        }

        debug!(
            "Reassembled frame of {} bytes from {} fragments",
            frame.len(),
            fragments
        );
        Ok(vec![frame])
    }

    /// Read the header of the next fragment,
    /// or `None` at the closing sequence delimiter.
    fn next_fragment(&mut self) -> Result<Option<u32>> {
        let offset = self.bytes_read();
        let tag = self.read_tag()?;
        let len = self.read_raw_length(tag)?;
        match tag {
            Tag::ITEM if Length(len).is_defined() => Ok(Some(len)),
            Tag::SEQUENCE_DELIMITER if len == 0 => Ok(None),
            Tag::ITEM | Tag::SEQUENCE_DELIMITER => structural_error(tag, offset, len),
            other => UnexpectedStructuralTagSnafu { tag: other, offset }.fail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::stateful::decode::StatefulDecoder;
    use crate::transfer_syntax::VrMode;
    use dcmframes_core::header::Tag;
    use std::io::Cursor;

    #[test]
    fn concatenates_fragments_with_empty_offset_table() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0,     // Item (basic offset table)
                0x00, 0x00, 0x00, 0x00, // Length: 0
            0xFE, 0xFF, 0x00, 0xE0,     // Item (fragment)
                0x02, 0x00, 0x00, 0x00, // Length: 2
                0xFF, 0x4F,
            0xFE, 0xFF, 0x00, 0xE0,     // Item (fragment)
                0x04, 0x00, 0x00, 0x00, // Length: 4
                0xFF, 0x51, 0x00, 0x2F,
            0xFE, 0xFF, 0xDD, 0xE0,     // Sequence Delimiter
                0x00, 0x00, 0x00, 0x00, // Length: 0
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        let frames = decoder.reassemble_fragments().unwrap();
        assert_eq!(frames, vec![vec![0xFF, 0x4F, 0xFF, 0x51, 0x00, 0x2F]]);
        assert_eq!(decoder.bytes_read(), raw.len() as u64);
    }

    #[test]
    fn empty_fragments_make_one_empty_frame() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0,     // Item (basic offset table)
                0x00, 0x00, 0x00, 0x00, // Length: 0
            0xFE, 0xFF, 0x00, 0xE0,     // Item (fragment)
                0x00, 0x00, 0x00, 0x00, // Length: 0
            0xFE, 0xFF, 0xDD, 0xE0,     // Sequence Delimiter
                0x00, 0x00, 0x00, 0x00, // Length: 0
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert_eq!(decoder.reassemble_fragments().unwrap(), vec![Vec::<u8>::new()]);
        assert_eq!(decoder.bytes_read(), raw.len() as u64);

        // offset table directly followed by the delimiter
        let mut no_fragments = raw[..8].to_vec();
        no_fragments.extend_from_slice(&raw[16..]);
        let mut decoder = StatefulDecoder::new(Cursor::new(no_fragments), VrMode::Explicit);
        assert_eq!(decoder.reassemble_fragments().unwrap(), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn nonzero_offset_table_yields_no_frames() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0,     // Item (basic offset table)
                0x04, 0x00, 0x00, 0x00, // Length: 4
                0x00, 0x00, 0x00, 0x00, // offset of frame #1
            0xFE, 0xFF, 0x00, 0xE0,     // Item (fragment)
                0x02, 0x00, 0x00, 0x00, // Length: 2
                0xAA, 0xBB,
            0xFE, 0xFF, 0xDD, 0xE0,     // Sequence Delimiter
                0x00, 0x00, 0x00, 0x00, // Length: 0
            0x08, 0x00, 0x60, 0x00,     // whatever follows
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert!(matches!(
            decoder.read_fragments(),
            Err(Error::UnsupportedOffsetTable { len: 4, .. })
        ));
        // the stream stays aligned on the next element
        assert_eq!(decoder.read_tag().unwrap(), Tag(0x0008, 0x0060));

        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert_eq!(decoder.reassemble_fragments().unwrap(), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn sequence_delimiter_in_place_of_offset_table() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0xDD, 0xE0,     // Sequence Delimiter
                0x00, 0x00, 0x00, 0x00, // Length: 0
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert!(decoder.reassemble_fragments().unwrap().is_empty());
    }

    #[test]
    fn nonzero_delimiter_length_fails() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0,     // Item (basic offset table)
                0x00, 0x00, 0x00, 0x00, // Length: 0
            0xFE, 0xFF, 0xDD, 0xE0,     // Sequence Delimiter
                0x02, 0x00, 0x00, 0x00, // Length: 2, illegal
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert!(matches!(
            decoder.reassemble_fragments(),
            Err(Error::StructuralError {
                tag: Tag::SEQUENCE_DELIMITER,
                offset: 8,
                len: 2,
                ..
            })
        ));
    }

    #[test]
    fn undefined_fragment_length_fails() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0,     // Item (basic offset table)
                0x00, 0x00, 0x00, 0x00, // Length: 0
            0xFE, 0xFF, 0x00, 0xE0,     // Item (fragment)
                0xFF, 0xFF, 0xFF, 0xFF, // Undefined length
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert!(matches!(
            decoder.reassemble_fragments(),
            Err(Error::StructuralError { tag: Tag::ITEM, .. })
        ));
    }

    #[test]
    fn data_element_among_fragments_fails() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0,     // Item (basic offset table)
                0x00, 0x00, 0x00, 0x00, // Length: 0
            0x08, 0x00, 0x60, 0x00,     // (0008,0060) Modality
                0x02, 0x00, 0x00, 0x00,
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert!(matches!(
            decoder.reassemble_fragments(),
            Err(Error::UnexpectedStructuralTag {
                tag: Tag(0x0008, 0x0060),
                ..
            })
        ));
    }

    #[test]
    fn truncated_fragment_fails() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0,     // Item (basic offset table)
                0x00, 0x00, 0x00, 0x00, // Length: 0
            0xFE, 0xFF, 0x00, 0xE0,     // Item (fragment)
                0x08, 0x00, 0x00, 0x00, // Length: 8
                0x01, 0x02,             // only 2 bytes follow
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(raw), VrMode::Explicit);
        assert!(matches!(
            decoder.reassemble_fragments(),
            Err(Error::TruncatedStream { offset: 16, .. })
        ));
    }
}
