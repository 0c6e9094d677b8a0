//! Tokenizing reader for query batches
//!
//! Input is whitespace-separated: a count `Q` followed by `Q` pairs of
//! `code string`. Line breaks carry no meaning. Input is read as raw bytes;
//! a token that is not valid UTF-8 is decoded lossily, so its replacement
//! characters surface later as invalid alphabet symbols.

use super::{Operation, Query};
use crate::{Error, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// Lazily reads queries from a buffered source
///
/// Yields nothing for input with no count token at all. Once an error is
/// yielded the iterator is exhausted.
pub struct QueryReader<R> {
    input: R,
    pending: VecDeque<String>,
    expected: Option<usize>,
    read: usize,
    failed: bool,
}

impl<R: BufRead> QueryReader<R> {
    pub fn new(input: R) -> Self {
        QueryReader {
            input,
            pending: VecDeque::new(),
            expected: None,
            read: 0,
            failed: false,
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|token| !token.is_empty())
                    .map(|token| String::from_utf8_lossy(token).into_owned()),
            );
        }
    }

    fn read_header(&mut self) -> Result<Option<usize>> {
        match self.next_token()? {
            Some(token) => token
                .parse()
                .map(Some)
                .map_err(|_| Error::Parse(format!("Invalid query count: {:?}", token))),
            None => Ok(None),
        }
    }

    fn read_query(&mut self, expected: usize) -> Result<Query> {
        let truncated = |read: usize| {
            Error::Parse(format!(
                "Expected {} queries, input ended after {}",
                expected, read
            ))
        };

        let code = self.next_token()?.ok_or_else(|| truncated(self.read))?;
        let code: i64 = code
            .parse()
            .map_err(|_| Error::Parse(format!("Invalid operation code: {:?}", code)))?;
        let op = Operation::from_code(code)?;
        let text = self.next_token()?.ok_or_else(|| truncated(self.read))?;

        self.read += 1;
        Ok(Query::new(op, text))
    }

    fn advance(&mut self) -> Result<Option<Query>> {
        let expected = match self.expected {
            Some(expected) => expected,
            None => match self.read_header()? {
                Some(expected) => {
                    tracing::debug!(expected, "read query count");
                    self.expected = Some(expected);
                    expected
                }
                None => return Ok(None),
            },
        };

        if self.read >= expected {
            return Ok(None);
        }
        self.read_query(expected).map(Some)
    }
}

impl<R: BufRead> Iterator for QueryReader<R> {
    type Item = Result<Query>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.advance() {
            Ok(query) => query.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
