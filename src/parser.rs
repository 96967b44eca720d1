//! Recursive-descent JSON parser
//!
//! One procedure per grammar production (document, value, object, array,
//! string, number, boolean, null), driven by a single byte of lookahead from a
//! [`Cursor`]. The first fault aborts the parse; the parser keeps it so callers
//! can read [`Parser::error_code`] and [`Parser::error_message`] afterwards.

pub mod config;

pub use config::Config;

use tracing::{debug, instrument, trace, warn};

use crate::cursor::Cursor;
use crate::error::{Error, ErrorCode, ErrorKind, Result};
use crate::unicode;
use crate::value::{Array, Object, Value};

const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes that end a number, boolean or null token
const fn ends_token(b: u8) -> bool {
    matches!(b, b'}' | b']' | b',') || is_whitespace(b)
}

/// Checks `token` against `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
fn is_number_token(token: &[u8]) -> bool {
    let mut bytes = token.iter().copied().peekable();

    bytes.next_if_eq(&b'-');

    // Integer part
    match bytes.next() {
        Some(b'0') => {}
        Some(b'1'..=b'9') => while bytes.next_if(u8::is_ascii_digit).is_some() {},
        _ => return false,
    }

    // Fraction
    if bytes.next_if_eq(&b'.').is_some() {
        if bytes.next_if(u8::is_ascii_digit).is_none() {
            return false;
        }
        while bytes.next_if(u8::is_ascii_digit).is_some() {}
    }

    // Exponent
    if bytes.next_if(|b| matches!(b, b'e' | b'E')).is_some() {
        bytes.next_if(|b| matches!(b, b'+' | b'-'));
        if bytes.next_if(u8::is_ascii_digit).is_none() {
            return false;
        }
        while bytes.next_if(u8::is_ascii_digit).is_some() {}
    }

    bytes.next().is_none()
}

/// JSON parser borrowing a cursor for its whole lifetime
pub struct Parser<'r, C: Cursor + ?Sized> {
    cursor: &'r mut C,
    config: Config,
    depth: u16,
    /// Bytes consumed from the cursor, net of putbacks
    consumed: usize,
    /// Scratch text of the current number/boolean/null token
    token: Vec<u8>,
    error: Option<Error>,
}

impl<'r, C: Cursor + ?Sized> Parser<'r, C> {
    pub fn new(cursor: &'r mut C) -> Self {
        Self::with_config(cursor, Config::default())
    }

    pub fn with_config(cursor: &'r mut C, config: Config) -> Self {
        Self {
            cursor,
            config,
            depth: 0,
            consumed: 0,
            token: Vec::new(),
            error: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Code of the last fault, `ErrorCode::None` after a successful call
    pub fn error_code(&self) -> ErrorCode {
        self.error.as_ref().map_or(ErrorCode::None, Error::code)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(Error::message)
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Bytes consumed from the cursor so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Parses one document whose root is an object or an array
    #[instrument(level = "debug", skip_all)]
    pub fn parse(&mut self) -> Result<Value> {
        self.depth = 0;
        let result = self.parse_document();
        if let Ok(root) = &result {
            debug!(kind = %root.kind(), consumed = self.consumed, "parsed document");
        }
        self.record(result)
    }

    /// Reads four hex digits of a `\u` escape into a UTF-16 code unit
    pub fn read_codepoint(&mut self) -> Result<u16> {
        let result = self.read_code_unit();
        self.record(result)
    }

    fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        match &result {
            Ok(_) => self.error = None,
            Err(e) => {
                warn!(code = %e.code(), offset = e.offset(), "{}", e.message());
                self.error = Some(e.clone());
            }
        }
        result
    }

    fn peek(&mut self) -> Option<u8> {
        self.cursor.peek()
    }

    fn pop(&mut self) -> Result<Option<u8>> {
        let b = self.cursor.pop();
        if b.is_some() {
            self.consumed += 1;
            if self.config.size_exceeded(self.consumed) {
                return Err(self.fault_at_last(ErrorKind::MaxSizeExceeded {
                    max: self.config.max_size,
                }));
            }
        }
        Ok(b)
    }

    /// Pops a byte; end of input is a fault
    fn next_byte(&mut self) -> Result<u8> {
        self.pop()?
            .ok_or_else(|| Error::at(ErrorKind::UnexpectedEof, self.consumed))
    }

    fn putback(&mut self) {
        self.cursor.putback();
        self.consumed = self.consumed.saturating_sub(1);
    }

    /// Error located at the byte just consumed
    fn fault_at_last(&self, kind: ErrorKind) -> Error {
        Error::at(kind, self.consumed.saturating_sub(1))
    }

    fn unexpected(&self, found: u8, expected: &'static str) -> Error {
        self.fault_at_last(ErrorKind::UnexpectedChar { found, expected })
    }

    fn expect(&mut self, expected: u8, what: &'static str) -> Result<()> {
        let found = self.next_byte()?;
        if found == expected {
            Ok(())
        } else {
            Err(self.unexpected(found, what))
        }
    }

    /// Consumes a run of whitespace and pushes back the first other byte
    fn skip_whitespace(&mut self) -> Result<()> {
        while let Some(b) = self.pop()? {
            if !is_whitespace(b) {
                self.putback();
                break;
            }
        }
        Ok(())
    }

    fn parse_document(&mut self) -> Result<Value> {
        self.skip_whitespace()?;
        let root = match self.peek() {
            Some(b'{' | b'[') => self.parse_value()?,
            Some(found) => return Err(Error::at(ErrorKind::InvalidRoot { found }, self.consumed)),
            None => return Err(Error::at(ErrorKind::UnexpectedEof, self.consumed)),
        };

        self.skip_whitespace()?;
        if self.peek().is_some() {
            return Err(Error::at(ErrorKind::TrailingCharacters, self.consumed));
        }
        Ok(root)
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace()?;
        match self.peek() {
            Some(b'"') => self.parse_string(),
            Some(b'{') => self.nested(Self::parse_object),
            Some(b'[') => self.nested(Self::parse_array),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b't' | b'f') => self.parse_bool(),
            Some(b'n') => self.parse_null(),
            Some(found) => Err(Error::at(
                ErrorKind::UnexpectedChar {
                    found,
                    expected: "a value",
                },
                self.consumed,
            )),
            None => Err(Error::at(ErrorKind::UnexpectedEof, self.consumed)),
        }
    }

    /// Runs a container production one level deeper
    fn nested(&mut self, production: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        self.depth = self.depth.saturating_add(1);
        if self.config.depth_exceeded(self.depth) {
            return Err(Error::at(
                ErrorKind::MaxDepthExceeded {
                    max: self.config.max_depth,
                },
                self.consumed,
            ));
        }
        trace!(depth = self.depth, "entering container");
        let value = production(self);
        self.depth = self.depth.saturating_sub(1);
        value
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.expect(b'{', "'{'")?;
        let mut object = Object::new();

        self.skip_whitespace()?;
        if self.peek() == Some(b'}') {
            self.pop()?;
            return Ok(Value::Object(object));
        }

        loop {
            self.skip_whitespace()?;
            let key = self.read_quoted_string()?;
            self.skip_whitespace()?;
            self.expect(b':', "':'")?;

            let value = self.parse_value()?;
            if object.insert(key, value).is_some() {
                trace!("duplicate object key, keeping first value");
            }

            self.skip_whitespace()?;
            match self.next_byte()? {
                b',' => continue,
                b'}' => break,
                found => return Err(self.unexpected(found, "',' or '}'")),
            }
        }

        Ok(Value::Object(object))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.expect(b'[', "'['")?;
        let mut array = Array::new();

        self.skip_whitespace()?;
        if self.peek() == Some(b']') {
            self.pop()?;
            return Ok(Value::Array(array));
        }

        loop {
            array.push(self.parse_value()?);

            self.skip_whitespace()?;
            match self.next_byte()? {
                b',' => continue,
                b']' => break,
                found => return Err(self.unexpected(found, "',' or ']'")),
            }
        }

        Ok(Value::Array(array))
    }

    fn parse_string(&mut self) -> Result<Value> {
        self.read_quoted_string().map(Value::String)
    }

    /// Reads a quoted string, opening and closing quotes included
    fn read_quoted_string(&mut self) -> Result<String> {
        self.expect(b'"', "'\"'")?;
        let start = self.consumed;
        let mut bytes = Vec::new();

        loop {
            match self.next_byte()? {
                b'"' => break,
                b'\\' => self.read_escape(&mut bytes)?,
                found if found < 0x20 => {
                    return Err(self.fault_at_last(ErrorKind::ControlCharacter { found }));
                }
                b => bytes.push(b),
            }
        }

        String::from_utf8(bytes).map_err(|_| Error::at(ErrorKind::InvalidUtf8, start))
    }

    /// Decodes the escape following a backslash into `out`
    fn read_escape(&mut self, out: &mut Vec<u8>) -> Result<()> {
        let unescaped = match self.next_byte()? {
            b'"' => b'"',
            b'\\' => b'\\',
            b'/' => b'/',
            b'b' => 0x08,
            b'f' => 0x0C,
            b'n' => b'\n',
            b'r' => b'\r',
            b't' => b'\t',
            b'u' => {
                let code_point = self.read_escaped_code_point()?;
                unicode::push_utf8(code_point, out);
                return Ok(());
            }
            found => return Err(self.fault_at_last(ErrorKind::InvalidEscape { found })),
        };
        out.push(unescaped);
        Ok(())
    }

    /// Reads the digits after `\u`, joining a surrogate pair when one starts
    fn read_escaped_code_point(&mut self) -> Result<u32> {
        let start = self.consumed;
        let first = self.read_code_unit()?;

        if unicode::is_low_surrogate(first) {
            return Err(Error::at(ErrorKind::UnpairedSurrogate, start));
        }
        if !unicode::is_high_surrogate(first) {
            return Ok(u32::from(first));
        }

        if self.next_byte()? != b'\\' || self.next_byte()? != b'u' {
            return Err(Error::at(ErrorKind::UnpairedSurrogate, start));
        }
        let second = self.read_code_unit()?;

        unicode::decode_surrogate_pair(first, second)
            .ok_or_else(|| Error::at(ErrorKind::UnpairedSurrogate, start))
    }

    fn read_code_unit(&mut self) -> Result<u16> {
        let start = self.consumed;
        let mut digits = [0u8; 4];
        for digit in &mut digits {
            *digit = self.next_byte()?;
        }
        unicode::parse_hex4(digits).ok_or_else(|| Error::at(ErrorKind::InvalidUnicodeEscape, start))
    }

    /// Reads bytes up to the next delimiter, whitespace or end of input
    fn read_value_token(&mut self) -> Result<()> {
        self.token.clear();
        while let Some(b) = self.peek() {
            if ends_token(b) {
                break;
            }
            self.pop()?;
            self.token.push(b);
        }
        Ok(())
    }

    fn token_text(&self) -> String {
        String::from_utf8_lossy(&self.token).into_owned()
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.consumed;
        self.read_value_token()?;

        let number = if is_number_token(&self.token) {
            std::str::from_utf8(&self.token)
                .ok()
                .and_then(|text| text.parse::<f64>().ok())
        } else {
            None
        };

        match number {
            Some(n) => Ok(Value::Number(n)),
            None => Err(Error::at(
                ErrorKind::InvalidNumber {
                    token: self.token_text(),
                },
                start,
            )),
        }
    }

    fn parse_bool(&mut self) -> Result<Value> {
        let start = self.consumed;
        self.read_value_token()?;
        match self.token.as_slice() {
            b"true" => Ok(Value::Boolean(true)),
            b"false" => Ok(Value::Boolean(false)),
            _ => Err(self.invalid_literal(start)),
        }
    }

    fn parse_null(&mut self) -> Result<Value> {
        let start = self.consumed;
        self.read_value_token()?;
        match self.token.as_slice() {
            b"null" => Ok(Value::Null),
            _ => Err(self.invalid_literal(start)),
        }
    }

    fn invalid_literal(&self, start: usize) -> Error {
        Error::at(
            ErrorKind::InvalidLiteral {
                token: self.token_text(),
            },
            start,
        )
    }
}
