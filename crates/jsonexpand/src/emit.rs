//! Emission: stitching scanned tokens back into an output stream.
//!
//! Default mode frames each reformatted value with a newline on both sides
//! and passes all other bytes through untouched. In `json_only` mode the
//! leading newline and all pass-through text are suppressed and every value
//! is terminated with `,\n`, producing a stream of comma-terminated
//! fragments. Serialization always uses 2-space indentation; the value tree
//! is never mutated after parsing.

use std::io::{self, BufRead, Write};

use bstr::io::BufReadExt;
use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::{
    error::FatalError,
    options::Options,
    scanner::{Token, Tokens},
};

/// Serializes one value with the canonical 2-space indentation.
fn write_pretty<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    let mut ser = Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(b"  "));
    value.serialize(&mut ser).map_err(io::Error::from)
}

/// Scans one line and writes its expansion.
///
/// Verbatim text goes to `out` unchanged (suppressed entirely in json-only
/// mode); matched values are re-serialized in place; each malformed
/// candidate produces one line on `diag` naming its byte offset and the
/// parser's rejection.
///
/// # Errors
///
/// Returns the first I/O error from `out` or `diag`.
pub fn expand_line<W, D>(line: &[u8], opts: &Options, out: &mut W, diag: &mut D) -> io::Result<()>
where
    W: Write,
    D: Write,
{
    for token in Tokens::new(line) {
        match token {
            Token::Text(text) => {
                if !opts.json_only {
                    out.write_all(text)?;
                }
            }
            Token::Json { value, .. } => {
                if !opts.json_only {
                    out.write_all(b"\n")?;
                }
                write_pretty(out, &value)?;
                out.write_all(if opts.json_only { b",\n" } else { b"\n" })?;
            }
            Token::Malformed(incident) => {
                writeln!(diag, "{incident}")?;
            }
        }
    }
    Ok(())
}

/// Drives a whole stream: reads `input` line by line (terminators included
/// in the scan, so pass-through is byte-exact), expands each line to `out`,
/// and flushes on completion.
///
/// Scanner state and diagnostics are scoped to one line; nothing carries
/// across lines. Malformed candidates never end the run.
///
/// # Errors
///
/// `FatalError::Read` if the input stream fails, `FatalError::Write` if the
/// output or diagnostic stream does. Either ends the run early.
pub fn run<R, W, D>(mut input: R, mut out: W, mut diag: D, opts: &Options) -> Result<(), FatalError>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let mut write_failure = None;
    input
        .for_byte_line_with_terminator(|line| {
            match expand_line(line, opts, &mut out, &mut diag) {
                Ok(()) => Ok(true),
                Err(err) => {
                    write_failure = Some(err);
                    Ok(false)
                }
            }
        })
        .map_err(FatalError::Read)?;
    if let Some(err) = write_failure {
        return Err(FatalError::Write(err));
    }
    out.flush().map_err(FatalError::Write)
}
