//! jparse: a self-contained JSON document parser
//!
//! Documents are read through a [`Cursor`], a single-byte lookahead with
//! pushback, and parsed by a recursive-descent [`Parser`] into a move-only
//! [`Value`] tree. Three byte sources ship with the crate: an in-memory
//! [`BufferReader`], a buffered [`FileReader`] and a memory-mapped
//! [`MmapReader`].
//!
//! # Quick Start
//!
//! ```
//! use jparse::from_str;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = from_str(r#"{"name": "Bugs Bunny", "age": 10}"#)?;
//! let name = value.object()?["name"].string()?;
//! assert_eq!(name, "Bugs Bunny");
//! # Ok(())
//! # }
//! ```
//!
//! Parsing with an explicit cursor keeps the error state around:
//!
//! ```
//! use jparse::{BufferReader, ErrorCode, Parser};
//!
//! let mut reader = BufferReader::from_str("[1, 2");
//! let mut parser = Parser::new(&mut reader);
//! assert!(parser.parse().is_err());
//! assert_eq!(parser.error_code(), ErrorCode::Syntax);
//! ```

use std::path::Path;

use tracing::instrument;

pub mod cursor;
pub use cursor::Cursor;

pub mod error;
pub use error::{Error, ErrorCode, ErrorKind, LoadError, Result, TypeError};

pub mod parser;
pub use parser::{Config, Parser};

pub mod reader;
pub use reader::{BufferReader, FileReader, MmapReader};

pub mod unicode;

pub mod value;
pub use value::{Array, Object, Value, ValueKind};

/// Parse JSON from string
pub fn from_str(s: &str) -> Result<Value> {
    from_bytes(s.as_bytes())
}

/// Parse JSON from bytes
pub fn from_bytes(bytes: &[u8]) -> Result<Value> {
    let mut reader = BufferReader::new(bytes);
    Parser::new(&mut reader).parse()
}

/// Parse with custom configuration
pub fn from_str_with_config(s: &str, config: Config) -> Result<Value> {
    let mut reader = BufferReader::from_str(s);
    Parser::with_config(&mut reader, config).parse()
}

/// Parse a file read sequentially through a buffer
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn from_file(path: impl AsRef<Path>, config: Config) -> std::result::Result<Value, LoadError> {
    let mut reader = FileReader::open(path)?;
    let value = Parser::with_config(&mut reader, config).parse();
    if let Some(e) = reader.take_io_error() {
        return Err(e.into());
    }
    Ok(value?)
}

/// Parse a file through a read-only memory mapping
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn from_mmap(path: impl AsRef<Path>, config: Config) -> std::result::Result<Value, LoadError> {
    let mut reader = MmapReader::open(path);
    if let Some(e) = reader.take_error() {
        return Err(e.into());
    }
    Ok(Parser::with_config(&mut reader, config).parse()?)
}
