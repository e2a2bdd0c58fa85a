//! Reading of DICOM files:
//! the optional preamble, the `DICM` magic code,
//! the file meta group and the main data set.
//!
//! The main data set is read up to the _Pixel Data_ element,
//! whose frames are retrieved on demand with [`DicomFile::frames`].

use crate::error::Error as DecodeError;
use crate::options::DecodeOptions;
use crate::stateful::StatefulDecoder;
use crate::transfer_syntax::VrMode;
use dcmframes_core::header::Tag;
use dcmframes_core::value::FrameBuffer;
use dcmframes_core::DataSet;
use dcmframes_dictionary_std::tags;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// The size of the file preamble, in bytes.
const PREAMBLE_LENGTH: usize = 128;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The file could not be opened.
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// The 128-byte preamble could not be read.
    #[snafu(display("Could not read preamble bytes"))]
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// The magic code `DICM` could not be read from the source.
    #[snafu(display("Could not start reading DICOM data"))]
    ReadMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data"))]
    NotDicom { backtrace: Backtrace },
    /// A data element with an unexpected tag was retrieved:
    /// the file meta group must start with its group length.
    #[snafu(display("Unexpected data element tagged {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// A required file meta data element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },
    /// The file meta group could not be decoded.
    #[snafu(display("Could not decode file meta group"))]
    DecodeMeta {
        #[snafu(backtrace)]
        source: DecodeError,
    },
    /// The main data set could not be decoded.
    #[snafu(display("Could not decode data set"))]
    DecodeDataSet {
        #[snafu(backtrace)]
        source: DecodeError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An enumerate of supported options for
/// whether to read the 128-byte DICOM file preamble.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Read the preamble only if the source does not start
    /// with the magic code.
    Auto,
    /// Never read the preamble,
    /// thus assuming that the original source does not have it.
    Never,
    /// Always read the preamble first,
    /// thus assuming that the original source always has it.
    Always,
}

impl Default for ReadPreamble {
    fn default() -> Self {
        ReadPreamble::Auto
    }
}

/// A builder type for opening a DICOM file with additional options.
///
/// # Example
///
/// ```no_run
/// # use dcmframes_parser::{DecodeOptions, OpenFileOptions, ReadPreamble};
/// let file = OpenFileOptions::new()
///     .read_preamble(ReadPreamble::Always)
///     .decode_options(DecodeOptions::new().max_depth(16))
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Copy, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions {
    read_preamble: ReadPreamble,
    decode_options: DecodeOptions,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Set whether to read the 128-byte DICOM file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set the options for decoding the file content.
    pub fn decode_options(mut self, options: DecodeOptions) -> Self {
        self.decode_options = options;
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<DicomFile<BufReader<File>>>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        self.from_reader(BufReader::new(file))
    }

    /// Obtain a DICOM file by reading from a byte source.
    pub fn from_reader<R>(self, mut from: R) -> Result<DicomFile<R>>
    where
        R: Read,
    {
        let offset = read_magic(&mut from, self.read_preamble)?;

        let (meta, offset) = read_meta_group(&mut from, offset, self.decode_options)?;
        let transfer_syntax = meta
            .string(tags::TRANSFER_SYNTAX_UID)
            .ok()
            .context(MissingElementSnafu {
                alias: "TransferSyntaxUID",
            })?;
        let mode = VrMode::from_transfer_syntax(&transfer_syntax);
        debug!("Transfer syntax {} ({:?} VR)", transfer_syntax, mode);

        let mut decoder = StatefulDecoder::new(from, mode)
            .with_options(self.decode_options)
            .with_base_offset(offset);
        let data_set = decoder.read_metadata().context(DecodeDataSetSnafu)?;

        Ok(DicomFile {
            meta,
            data_set,
            decoder,
        })
    }
}

/// Read the preamble as requested and the magic code,
/// returning the number of bytes read.
fn read_magic<R: Read>(from: &mut R, read_preamble: ReadPreamble) -> Result<u64> {
    let mut buf = [0u8; 4];
    match read_preamble {
        ReadPreamble::Never => {
            from.read_exact(&mut buf).context(ReadMagicCodeSnafu)?;
            ensure!(buf == DICM_MAGIC_CODE, NotDicomSnafu);
            Ok(4)
        }
        ReadPreamble::Always => {
            let mut preamble = [0u8; PREAMBLE_LENGTH];
            from.read_exact(&mut preamble)
                .context(ReadPreambleBytesSnafu)?;
            from.read_exact(&mut buf).context(ReadMagicCodeSnafu)?;
            ensure!(buf == DICM_MAGIC_CODE, NotDicomSnafu);
            Ok(PREAMBLE_LENGTH as u64 + 4)
        }
        ReadPreamble::Auto => {
            from.read_exact(&mut buf).context(ReadMagicCodeSnafu)?;
            if buf == DICM_MAGIC_CODE {
                return Ok(4);
            }
            let mut rest = [0u8; PREAMBLE_LENGTH - 4];
            from.read_exact(&mut rest)
                .context(ReadPreambleBytesSnafu)?;
            from.read_exact(&mut buf).context(ReadMagicCodeSnafu)?;
            ensure!(buf == DICM_MAGIC_CODE, NotDicomSnafu);
            Ok(PREAMBLE_LENGTH as u64 + 4)
        }
    }
}

/// Decode the file meta group, bounded by its group length,
/// returning it with the position of the source after it.
fn read_meta_group<R: Read>(
    from: &mut R,
    offset: u64,
    options: DecodeOptions,
) -> Result<(DataSet, u64)> {
    let mut decoder = StatefulDecoder::file_header_decoder(from)
        .with_options(options)
        .with_base_offset(offset);
    let mut meta = DataSet::new();

    let tag = decoder.read_tag().context(DecodeMetaSnafu)?;
    ensure!(
        tag == tags::FILE_META_INFORMATION_GROUP_LENGTH,
        UnexpectedTagSnafu { tag }
    );
    let group_length = decoder.decode_element(tag).context(DecodeMetaSnafu)?;
    let len = group_length
        .value()
        .to_int()
        .ok()
        .context(MissingElementSnafu {
            alias: "FileMetaInformationGroupLength",
        })?;
    meta.put(group_length);

    let end = decoder.bytes_read() + len as u64;
    while decoder.bytes_read() < end {
        let tag = decoder.read_tag().context(DecodeMetaSnafu)?;
        ensure!(tag.group() == 0x0002, UnexpectedTagSnafu { tag });
        let element = decoder.decode_element(tag).context(DecodeMetaSnafu)?;
        meta.put(element);
    }

    Ok((meta, decoder.bytes_read()))
}

/// A DICOM file read up to its pixel data.
#[derive(Debug)]
pub struct DicomFile<S> {
    meta: DataSet,
    data_set: DataSet,
    decoder: StatefulDecoder<S>,
}

impl<S> DicomFile<S>
where
    S: Read,
{
    /// Retrieve the file meta group.
    pub fn meta(&self) -> &DataSet {
        &self.meta
    }

    /// Retrieve the main data set, without the pixel data.
    pub fn data_set(&self) -> &DataSet {
        &self.data_set
    }

    /// Retrieve the transfer syntax UID, without padding.
    pub fn transfer_syntax(&self) -> Option<String> {
        self.meta.string(tags::TRANSFER_SYNTAX_UID).ok()
    }

    /// Retrieve the pixel data frames from the rest of the file.
    ///
    /// The remaining stream is consumed,
    /// so this method is meant to be called once.
    pub fn frames(&mut self) -> Result<Vec<FrameBuffer>> {
        self.decoder
            .extract_frames(&self.data_set, &self.meta)
            .context(DecodeDataSetSnafu)
    }

    /// Unwrap the file, returning the meta group and the data set.
    pub fn into_parts(self) -> (DataSet, DataSet) {
        (self.meta, self.data_set)
    }
}
