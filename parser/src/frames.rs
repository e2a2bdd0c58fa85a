//! Retrieval of pixel data frames.
//!
//! Frames are first looked up in the decoded data set.
//! When the data set holds no usable pixel data,
//! the remaining stream is scanned for the _Pixel Data_ element instead.

use crate::error::{MissingPixelDataSnafu, Result};
use crate::stateful::StatefulDecoder;
use crate::transfer_syntax::VrMode;
use dcmframes_core::dictionary::DataDictionary;
use dcmframes_core::header::{HasLength, Header, Tag};
use dcmframes_core::value::{FrameBuffer, Value};
use dcmframes_core::DataSet;
use dcmframes_dictionary_std::tags;
use snafu::OptionExt;
use std::io::Read;
use tracing::{debug, warn};

/// Retrieve the frames of the _Pixel Data_ element in the data set.
///
/// Native pixel data is split into _Number of Frames_ equal parts
/// when its length allows it, otherwise it makes a single frame,
/// which is empty for an empty value.
/// Encapsulated pixel data reassembled on decoding makes a single frame.
///
/// Fails with [`MissingPixelData`](crate::Error::MissingPixelData)
/// if the element is absent or carries no value.
pub fn frames_from_data_set(data_set: &DataSet) -> Result<Vec<FrameBuffer>> {
    let element = data_set
        .get(Tag::PIXEL_DATA)
        .context(MissingPixelDataSnafu)?;
    let data = match element.value() {
        Value::Binary(data) => data,
        _ => return MissingPixelDataSnafu.fail(),
    };
    if element.length().is_undefined() {
        return Ok(vec![data.clone()]);
    }

    let number_of_frames = data_set
        .get(tags::NUMBER_OF_FRAMES)
        .and_then(|e| e.value().to_int().ok())
        .unwrap_or(1);
    Ok(split_frames(data, number_of_frames))
}

fn split_frames(data: &[u8], number_of_frames: i64) -> Vec<FrameBuffer> {
    if number_of_frames <= 1 || data.is_empty() {
        return vec![data.to_vec()];
    }
    let n = number_of_frames as usize;
    if data.len() % n != 0 {
        warn!(
            "Pixel data of {} bytes does not split into {} frames, keeping a single frame",
            data.len(),
            n
        );
        return vec![data.to_vec()];
    }
    data.chunks(data.len() / n).map(|c| c.to_vec()).collect()
}

/// Retrieve the frames of a DICOM object.
///
/// The frames are first taken from the given data set.
/// Failing that, `source` is scanned from its current position
/// for the _Pixel Data_ element,
/// in the VR mode declared by the _Transfer Syntax UID_
/// of the file meta group `meta`.
pub fn extract_frames<S>(data_set: &DataSet, meta: &DataSet, source: S) -> Result<Vec<FrameBuffer>>
where
    S: Read,
{
    if let Some(frames) = primary_frames(data_set) {
        return Ok(frames);
    }
    let mut decoder = StatefulDecoder::new(source, meta_vr_mode(meta));
    decoder.scan_frames()
}

fn primary_frames(data_set: &DataSet) -> Option<Vec<FrameBuffer>> {
    match frames_from_data_set(data_set) {
        Ok(frames) => Some(frames),
        Err(e) => {
            debug!("{}, scanning the stream", e);
            None
        }
    }
}

fn meta_vr_mode(meta: &DataSet) -> VrMode {
    meta.string(tags::TRANSFER_SYNTAX_UID)
        .map(|uid| VrMode::from_transfer_syntax(&uid))
        .unwrap_or_default()
}

impl<S, D> StatefulDecoder<S, D>
where
    S: Read,
    D: DataDictionary,
{
    /// Retrieve the frames of a DICOM object
    /// whose metadata was read by this decoder.
    ///
    /// Behaves as [`extract_frames`],
    /// scanning the rest of this decoder's source on fallback,
    /// starting with the pending _Pixel Data_ tag if there is one.
    pub fn extract_frames(&mut self, data_set: &DataSet, meta: &DataSet) -> Result<Vec<FrameBuffer>> {
        if let Some(frames) = primary_frames(data_set) {
            return Ok(frames);
        }
        if meta.contains(tags::TRANSFER_SYNTAX_UID) {
            self.set_mode(meta_vr_mode(meta));
        }
        self.scan_frames()
    }

    /// Decode and discard elements until the _Pixel Data_ element,
    /// then retrieve its frames.
    ///
    /// Pixel data of defined length makes a single frame, even if empty.
    /// Encapsulated pixel data goes through fragment reassembly.
    pub fn scan_frames(&mut self) -> Result<Vec<FrameBuffer>> {
        while let Some(tag) = self.try_read_tag()? {
            if tag != Tag::PIXEL_DATA {
                let element = self.decode_element(tag)?;
                debug!("Skipping {} while looking for pixel data", element.tag());
                continue;
            }

            let header = self.read_header(tag)?;
            let len = match header.length().get() {
                Some(len) => len,
                None => return self.reassemble_fragments(),
            };
            let data = self.read_value_bytes(len, tag)?;
            debug!("Read native pixel data of {} bytes", data.len());
            return Ok(vec![data]);
        }
        MissingPixelDataSnafu.fail()
    }
}
