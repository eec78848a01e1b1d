use std::io::{self, Write};

use strtohex_core::convert;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes one line per token with its length, then the hex list line.
pub fn run(input: &str, out: &mut impl Write) -> Result<(), RunError> {
    let conversion = convert(input);
    for len in conversion.lengths() {
        writeln!(out, "{len}")?;
    }
    writeln!(out, "{}", conversion.hex())?;
    out.flush()?;
    Ok(())
}
