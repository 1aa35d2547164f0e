//! `jsonexpand` binary: stdin → stdout filter.

use std::{
    env,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use jsonexpand::{Options, run};

fn main() -> ExitCode {
    let opts = Options::from_args(env::args().skip(1));
    let input = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut diag = io::stderr().lock();
    match run(input, &mut out, &mut diag, &opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Flush whatever made it out before reporting the failure.
            let _ = out.flush();
            let _ = writeln!(diag, "jsonexpand: {err}");
            ExitCode::FAILURE
        }
    }
}
