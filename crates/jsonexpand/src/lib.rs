//! Find JSON values embedded in free-form text and pretty-print them in
//! place.
//!
//! `jsonexpand` reads a stream line by line, detects substrings that are
//! complete JSON objects or arrays (anywhere in a line, surrounded by
//! arbitrary text), and re-emits the stream with each detected value
//! re-serialized with 2-space indentation. Every byte that is not part of a
//! matched value passes through unchanged, so log lines carrying inline JSON
//! payloads become readable without disturbing the surrounding text.
//!
//! The scan is greedy and single-pass: at each `{` or `[` the longest valid
//! JSON value starting there is matched, the cursor jumps past it, and
//! scanning resumes. Candidates that look structurally complete but fail
//! strict parsing are reported on a diagnostic channel and fall back to
//! verbatim output; nothing aborts the stream short of an I/O failure.
//!
//! ```rust
//! use jsonexpand::{Options, expand_line};
//!
//! let mut out = Vec::new();
//! let mut diag = Vec::new();
//! expand_line(br#"request {"id":7} ok"#, &Options::default(), &mut out, &mut diag).unwrap();
//! assert_eq!(out, b"request \n{\n  \"id\": 7\n}\n ok");
//! assert!(diag.is_empty());
//! ```

mod emit;
mod error;
mod options;
mod resolver;
mod scanner;

pub use emit::{expand_line, run};
pub use error::{FatalError, MalformedCandidate};
pub use options::Options;
pub use resolver::{Resolution, resolve};
pub use scanner::{Token, Tokens};
