//! A CLI tool for inspecting a DICOM file
//! and extracting its pixel data frames.
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use dcmframes_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmframes_core::{DataElement, DataSet, Header, Tag, Value};
use dcmframes_dictionary_std::{tags, StandardDataDictionary};
use dcmframes_parser::options::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use dcmframes_parser::{is_encapsulated_transfer_syntax, DecodeOptions, OpenFileOptions, ReadPreamble};
use snafu::{Report, ResultExt, Snafu, Whatever};
use tracing::{error, info, Level};

/// Inspect a DICOM file and extract its pixel data frames
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// Path to the DICOM file to inspect
    file: PathBuf,

    /// Directory to write the frames into
    /// (frames are not written if omitted)
    #[arg(short = 'o', long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Print every decoded data element
    #[arg(long = "dump")]
    dump: bool,

    /// Maximum nesting depth of sequence items
    #[arg(
        long = "max-depth",
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser(clap::value_parser!(u32).range(1..=MAX_DEPTH_LIMIT as i64))
    )]
    max_depth: u32,

    /// Maximum number of bytes to read from the file
    #[arg(long = "byte-budget")]
    byte_budget: Option<u64>,

    /// Do not look for the 128-byte preamble
    #[arg(long = "no-preamble")]
    no_preamble: bool,

    /// Print more information about the decoding process
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Snafu)]
enum WriteError {
    #[snafu(display("Could not create directory {}", path.display()))]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Could not write frame to {}", path.display()))]
    WriteFrame {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The maximum number of characters of a text value in the dump.
const MAX_TEXT_WIDTH: usize = 64;

fn main() {
    let App {
        file,
        out_dir,
        dump,
        max_depth,
        byte_budget,
        no_preamble,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let mut decode_options = DecodeOptions::new().max_depth(max_depth);
    if let Some(budget) = byte_budget {
        decode_options = decode_options.byte_budget(budget);
    }
    let read_preamble = if no_preamble {
        ReadPreamble::Never
    } else {
        ReadPreamble::Auto
    };

    let mut obj = OpenFileOptions::new()
        .read_preamble(read_preamble)
        .decode_options(decode_options)
        .open_file(&file)
        .unwrap_or_else(|e| {
            error!("{}", Report::from_error(e));
            std::process::exit(-1);
        });

    println!("File: {}", file.display());
    print_header(obj.meta(), obj.data_set());

    if dump {
        println!();
        for element in obj.meta().iter().chain(obj.data_set().iter()) {
            print_element(element, 0);
        }
    }

    // the header above is already out even if this fails
    let frames = match obj.frames() {
        Ok(frames) => frames,
        Err(e) => {
            error!("{}", Report::from_error(e));
            return;
        }
    };
    info!("Retrieved {} frame(s)", frames.len());

    if let Some(out_dir) = out_dir {
        let encapsulated = obj
            .transfer_syntax()
            .map(|ts| is_encapsulated_transfer_syntax(&ts))
            .unwrap_or(false);
        write_frames(&out_dir, &frames, encapsulated).unwrap_or_else(|e| {
            error!("{}", Report::from_error(e));
            std::process::exit(-2);
        });
    }
}

fn print_header(meta: &DataSet, data_set: &DataSet) {
    let field = |set: &DataSet, tag: Tag| set.string(tag).unwrap_or_default();

    println!("Patient name: {}", field(data_set, tags::PATIENT_NAME));
    println!("Series description: {}", field(data_set, tags::SERIES_DESCRIPTION));
    println!("Modality: {}", field(data_set, tags::MODALITY));
    println!("Transfer syntax: {}", field(meta, tags::TRANSFER_SYNTAX_UID));
    println!("Rows: {}", field(data_set, tags::ROWS));
    println!("Columns: {}", field(data_set, tags::COLUMNS));
    println!("Bits allocated: {}", field(data_set, tags::BITS_ALLOCATED));
    println!(
        "Photometric interpretation: {}",
        field(data_set, tags::PHOTOMETRIC_INTERPRETATION)
    );
    println!("Number of frames: {}", data_set.int(tags::NUMBER_OF_FRAMES).unwrap_or(1));
}

fn print_element(element: &DataElement, depth: usize) {
    let indent = "  ".repeat(depth);
    let dict = StandardDataDictionary;
    let alias = dict
        .by_tag(element.tag())
        .map(|entry| entry.alias())
        .unwrap_or("«Unknown Attribute»");

    match element.value() {
        Value::Sequence(items) => {
            println!(
                "{}{} {} {} ({} items)",
                indent,
                element.tag(),
                element.vr(),
                alias,
                items.len()
            );
            for (i, item) in items.iter().enumerate() {
                println!("{}  Item #{}", indent, i);
                for element in item.iter() {
                    print_element(element, depth + 2);
                }
            }
        }
        value => println!(
            "{}{} {} {} {}",
            indent,
            element.tag(),
            element.vr(),
            alias,
            value_summary(value)
        ),
    }
}

fn value_summary(value: &Value) -> String {
    match value {
        Value::Empty => "(no value)".to_string(),
        Value::Binary(data) => format!("[{} bytes]", data.len()),
        Value::Sequence(items) => format!("({} items)", items.len()),
        value => {
            let text = value.to_str().unwrap_or_default();
            if text.chars().count() > MAX_TEXT_WIDTH {
                let cut: String = text.chars().take(MAX_TEXT_WIDTH - 1).collect();
                format!("[{}…]", cut)
            } else {
                format!("[{}]", text)
            }
        }
    }
}

/// Pick a file extension from the leading bytes of a frame.
fn frame_extension(frame: &[u8], encapsulated: bool) -> &'static str {
    if !encapsulated {
        return "raw";
    }
    if frame.starts_with(&[0xFF, 0x4F, 0xFF, 0x51]) {
        "j2k"
    } else if frame.starts_with(&[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20]) {
        "jp2"
    } else if frame.starts_with(&[0xFF, 0xD8]) {
        "jpg"
    } else {
        "raw"
    }
}

fn write_frames(out_dir: &Path, frames: &[Vec<u8>], encapsulated: bool) -> Result<(), WriteError> {
    fs::create_dir_all(out_dir).context(CreateDirSnafu { path: out_dir })?;
    for (i, frame) in frames.iter().enumerate() {
        let path = out_dir.join(format!(
            "frame-{:04}.{}",
            i,
            frame_extension(frame, encapsulated)
        ));
        fs::write(&path, frame).context(WriteFrameSnafu { path: &path })?;
        info!("Frame #{} saved to {}", i, path.display());
    }
    Ok(())
}
