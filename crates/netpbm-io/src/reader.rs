//! Whitespace-delimited token reader
//!
//! Netpbm headers and ASCII bodies are sequences of tokens separated by
//! whitespace. A `#` at the start of a token opens a comment running to the
//! end of the line; comments are skipped and never returned.

use crate::{IoError, IoResult};
use std::io::{self, BufRead};

/// Token reader over a buffered byte stream
pub struct TokenReader<R> {
    inner: R,
    token: Vec<u8>,
}

impl<R: BufRead> TokenReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            token: Vec::with_capacity(16),
        }
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    fn skip_comment(&mut self) -> io::Result<()> {
        while let Some(b) = self.peek_byte()? {
            self.inner.consume(1);
            if b == b'\n' || b == b'\r' {
                break;
            }
        }
        Ok(())
    }

    /// Skip whitespace and comments. Returns `false` at end of stream.
    fn skip_separators(&mut self) -> io::Result<bool> {
        loop {
            match self.peek_byte()? {
                None => return Ok(false),
                Some(b) if b.is_ascii_whitespace() => self.inner.consume(1),
                Some(b'#') => self.skip_comment()?,
                Some(_) => return Ok(true),
            }
        }
    }

    /// Read the next token, or `None` at end of stream.
    ///
    /// The whitespace byte terminating the token is left unread.
    pub(crate) fn next_token(&mut self) -> io::Result<Option<&[u8]>> {
        self.token.clear();
        if !self.skip_separators()? {
            return Ok(None);
        }
        while let Some(b) = self.peek_byte()? {
            if b.is_ascii_whitespace() {
                break;
            }
            self.token.push(b);
            self.inner.consume(1);
        }
        Ok(Some(self.token.as_slice()))
    }

    /// Read the next token as an unsigned decimal number.
    ///
    /// `missing` names the field for [`IoError::TruncatedHeader`].
    pub(crate) fn header_number(&mut self, missing: &'static str) -> IoResult<u32> {
        match self.next_token()? {
            Some(token) => parse_number(token),
            None => Err(IoError::TruncatedHeader(missing)),
        }
    }

    /// Consume the single whitespace byte that separates the header from
    /// the body, if present.
    pub(crate) fn end_header(&mut self) -> io::Result<()> {
        if let Some(b) = self.peek_byte()?
            && b.is_ascii_whitespace()
        {
            self.inner.consume(1);
        }
        Ok(())
    }

    /// Access the underlying reader for raw body bytes.
    pub(crate) fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }
}

/// Parse a token of ASCII digits as `u32`.
///
/// Signs, empty tokens and values above `u32::MAX` are rejected.
pub(crate) fn parse_number(token: &[u8]) -> IoResult<u32> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return Err(IoError::MalformedNumber(format!(
            "{:?} is not a decimal number",
            String::from_utf8_lossy(token)
        )));
    }
    token
        .iter()
        .try_fold(0u32, |acc, &d| {
            acc.checked_mul(10)?.checked_add((d - b'0') as u32)
        })
        .ok_or_else(|| {
            IoError::MalformedNumber(format!(
                "{} is out of range",
                String::from_utf8_lossy(token)
            ))
        })
}
