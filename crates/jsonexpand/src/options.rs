/// Runtime options for the expander.
///
/// Resolved once from the process arguments at startup and passed by
/// reference into the scanner and emitter; never mutated afterwards.
///
/// # Examples
///
/// ```rust
/// use jsonexpand::Options;
///
/// let opts = Options::from_args(["--json-only"]);
/// assert!(opts.json_only);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Whether to emit only reformatted JSON values and suppress all
    /// pass-through text.
    ///
    /// Each emitted value is followed by a comma and a newline instead of
    /// being framed by blank lines, producing a stream of comma-terminated
    /// fragments that can be wrapped into a JSON array.
    ///
    /// # Default
    ///
    /// `false`
    pub json_only: bool,
}

impl Options {
    /// Builds options from command-line arguments (program name excluded).
    ///
    /// `--json-only` is the only recognized flag; unrecognized arguments are
    /// ignored.
    #[must_use]
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Options::default();
        for arg in args {
            if arg.as_ref() == "--json-only" {
                opts.json_only = true;
            }
        }
        opts
    }
}
