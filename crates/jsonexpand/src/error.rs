use std::io;

use thiserror::Error;

/// A candidate whose structural scan found a plausible end, but whose bytes
/// were rejected by the strict JSON parse.
///
/// Recoverable: reported once on the diagnostic channel while the rest of
/// the line continues scanning normally.
#[derive(Debug, Error)]
#[error("malformed candidate at offset {offset}: {source}")]
pub struct MalformedCandidate {
    /// Byte offset of the candidate trigger within its line.
    pub offset: usize,
    /// The strict parser's rejection, positioned within the candidate
    /// substring.
    #[source]
    pub source: serde_json::Error,
}

/// An unrecoverable stream failure. Ends the run with a non-zero status;
/// everything else is contained within one line's processing.
#[derive(Debug, Error)]
pub enum FatalError {
    /// The input stream could not be read further.
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    /// The output or diagnostic stream rejected a write or flush.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}
