//! Transcript input

pub mod csv_parser;

pub use csv_parser::{parse_transcript_csv, parse_transcript_str, TranscriptMetadata};
