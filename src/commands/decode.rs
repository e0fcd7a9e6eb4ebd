use std::io::{self, Write};

use anyhow::Result;
use lawcite::{DecodeStyle, decode_identifier_with};

use crate::cli::DecodeArgs;

pub fn run(args: DecodeArgs) -> Result<()> {
    let style = if args.roman_subparagraphs {
        DecodeStyle::RomanSubparagraphs
    } else {
        DecodeStyle::Plain
    };

    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(output, "{}", decode_identifier_with(&args.identifier, style))?;
    output.flush()?;
    Ok(())
}
