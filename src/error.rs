//! Error types for jparse

use std::fmt;
use std::io;
use thiserror::Error;

use crate::value::ValueKind;

/// Coarse error classification, readable from a parser after a call to
/// [`Parser::parse`](crate::Parser::parse)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No error occurred
    #[default]
    None,
    /// Malformed input
    Syntax,
    /// A value accessor was called on the wrong kind of value
    InvalidType,
    /// A configured parser limit was exceeded
    LimitExceeded,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Syntax => write!(f, "syntax"),
            Self::InvalidType => write!(f, "invalid type"),
            Self::LimitExceeded => write!(f, "limit exceeded"),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    UnexpectedEof,
    UnexpectedChar { found: u8, expected: &'static str },
    InvalidRoot { found: u8 },
    InvalidEscape { found: u8 },
    InvalidUnicodeEscape,
    UnpairedSurrogate,
    ControlCharacter { found: u8 },
    InvalidUtf8,
    InvalidNumber { token: String },
    InvalidLiteral { token: String },
    TrailingCharacters,
    MaxDepthExceeded { max: u16 },
    MaxSizeExceeded { max: usize },
}

impl ErrorKind {
    /// The error code this kind is reported under
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MaxDepthExceeded { .. } | Self::MaxSizeExceeded { .. } => ErrorCode::LimitExceeded,
            _ => ErrorCode::Syntax,
        }
    }
}

/// Renders a raw input byte for messages
struct Byte(u8);

impl fmt::Display for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "'{}'", char::from(self.0))
        } else {
            write!(f, "byte {:#04x}", self.0)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::UnexpectedChar { found, expected } => {
                write!(f, "expected {expected}, found {}", Byte(*found))
            }
            Self::InvalidRoot { found } => {
                write!(f, "document must start with '{{' or '[', found {}", Byte(*found))
            }
            Self::InvalidEscape { found } => write!(f, "invalid escape sequence \\{}", Byte(*found)),
            Self::InvalidUnicodeEscape => write!(f, "invalid unicode escape"),
            Self::UnpairedSurrogate => write!(f, "invalid utf-16 surrogate pair"),
            Self::ControlCharacter { found } => {
                write!(f, "unescaped control character {} in string", Byte(*found))
            }
            Self::InvalidUtf8 => write!(f, "string is not valid utf-8"),
            Self::InvalidNumber { token } => write!(f, "invalid number: {token}"),
            Self::InvalidLiteral { token } => write!(f, "invalid literal: {token}"),
            Self::TrailingCharacters => write!(f, "trailing characters after document"),
            Self::MaxDepthExceeded { max } => write!(f, "max depth exceeded: {max}"),
            Self::MaxSizeExceeded { max } => write!(f, "max size exceeded: {max}"),
        }
    }
}

/// Parse error: the first fault met while reading a document
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    offset: usize,
    message: String,
}

impl Error {
    /// Create error at a byte offset
    pub fn at(kind: ErrorKind, offset: usize) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            offset,
            message,
        }
    }

    pub fn with_message(kind: ErrorKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Byte offset of the fault, counted from the start of the cursor
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at byte {}: {}", self.offset, self.message)
    }
}

/// Accessor misuse: a [`Value`](crate::Value) was asked for a kind it does not hold
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("invalid type: expected {expected}, found {found}")]
pub struct TypeError {
    pub expected: ValueKind,
    pub found: ValueKind,
}

impl TypeError {
    pub const fn new(expected: ValueKind, found: ValueKind) -> Self {
        Self { expected, found }
    }

    pub const fn code(&self) -> ErrorCode {
        ErrorCode::InvalidType
    }
}

/// Failure of the path-based loaders
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] Error),
}

impl LoadError {
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Io(_) => None,
            Self::Parse(e) => Some(e.code()),
        }
    }
}

/// Result type alias for jparse
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::at(ErrorKind::UnexpectedEof, 7);
        assert_eq!(err.kind(), &ErrorKind::UnexpectedEof);
        assert_eq!(err.offset(), 7);
        assert_eq!(err.code(), ErrorCode::Syntax);
    }

    #[test]
    fn test_error_display() {
        let err = Error::at(
            ErrorKind::UnexpectedChar {
                found: b'x',
                expected: "',' or ']'",
            },
            10,
        );
        let display = err.to_string();
        assert!(display.contains("error at byte 10"));
        assert!(display.contains("expected ',' or ']', found 'x'"));
    }

    #[test]
    fn test_limit_codes() {
        assert_eq!(
            ErrorKind::MaxDepthExceeded { max: 4 }.code(),
            ErrorCode::LimitExceeded
        );
        assert_eq!(
            ErrorKind::MaxSizeExceeded { max: 4 }.code(),
            ErrorCode::LimitExceeded
        );
    }

    #[test]
    fn test_non_printable_byte() {
        let kind = ErrorKind::ControlCharacter { found: 0x07 };
        assert_eq!(kind.to_string(), "unescaped control character byte 0x07 in string");
    }

    #[test]
    fn test_type_error() {
        let err = TypeError::new(ValueKind::Number, ValueKind::String);
        assert_eq!(err.code(), ErrorCode::InvalidType);
        assert_eq!(err.to_string(), "invalid type: expected number, found string");
    }

    #[test]
    fn test_load_error_from_parse() {
        let err: LoadError = Error::at(ErrorKind::TrailingCharacters, 3).into();
        assert_eq!(err.code(), Some(ErrorCode::Syntax));
    }
}
