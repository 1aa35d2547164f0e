//! Per-line candidate scanning.
//!
//! The scanner walks one line left to right and yields a token stream that
//! covers every byte of the line exactly once: runs of verbatim text and
//! matched values (with the span their original bytes occupied), plus
//! zero-byte diagnostic tokens for malformed candidates. It produces tokens
//! only; writing them out, and deciding what `json_only` suppresses, belongs
//! to the emitter. Keeping emission out of here makes token ordering easy to
//! test.

use std::{collections::VecDeque, ops::Range};

use serde_json::Value;

use crate::{
    error::MalformedCandidate,
    resolver::{Resolution, resolve},
};

/// One token of a scanned line.
#[derive(Debug)]
pub enum Token<'line> {
    /// A run of bytes that belong to no matched value, emitted unchanged.
    Text(&'line [u8]),
    /// A matched value and the span of the line its original bytes occupied.
    Json {
        /// The parsed value tree.
        value: Value,
        /// Original byte span within the line.
        span: Range<usize>,
    },
    /// A candidate that had a structural end but failed strict parsing.
    ///
    /// Carries no line bytes; the trigger byte follows in its own `Text`
    /// token so no input byte is ever dropped.
    Malformed(MalformedCandidate),
}

/// Greedy single-pass token iterator over one line.
///
/// The cursor never moves backwards and each byte starts at most one parse
/// attempt. State is scoped to the line: a fresh `Tokens` is built per line
/// and nothing carries over.
#[derive(Debug)]
pub struct Tokens<'line> {
    line: &'line [u8],
    cursor: usize,
    pending: VecDeque<Token<'line>>,
}

impl<'line> Tokens<'line> {
    /// Starts a scan at the beginning of `line`.
    #[must_use]
    pub fn new(line: &'line [u8]) -> Self {
        Tokens {
            line,
            cursor: 0,
            pending: VecDeque::new(),
        }
    }
}

fn is_trigger(byte: u8) -> bool {
    byte == b'{' || byte == b'['
}

impl<'line> Iterator for Tokens<'line> {
    type Item = Token<'line>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        if self.cursor >= self.line.len() {
            return None;
        }
        let start = self.cursor;
        while self.cursor < self.line.len() {
            if !is_trigger(self.line[self.cursor]) {
                self.cursor += 1;
                continue;
            }
            match resolve(&self.line[self.cursor..]) {
                Resolution::Matched { len, value } => {
                    let span = self.cursor..self.cursor + len;
                    self.cursor = span.end;
                    let text = &self.line[start..span.start];
                    self.pending.push_back(Token::Json { value, span });
                    if text.is_empty() {
                        return self.pending.pop_front();
                    }
                    return Some(Token::Text(text));
                }
                Resolution::Malformed { error } => {
                    // Report the incident, then fall back to emitting the
                    // trigger byte verbatim and rescanning after it.
                    let incident = MalformedCandidate {
                        offset: self.cursor,
                        source: error,
                    };
                    let text = &self.line[start..self.cursor];
                    let trigger = &self.line[self.cursor..=self.cursor];
                    self.cursor += 1;
                    self.pending.push_back(Token::Malformed(incident));
                    self.pending.push_back(Token::Text(trigger));
                    if text.is_empty() {
                        return self.pending.pop_front();
                    }
                    return Some(Token::Text(text));
                }
                Resolution::NoMatch => {
                    self.cursor += 1;
                }
            }
        }
        Some(Token::Text(&self.line[start..]))
    }
}
