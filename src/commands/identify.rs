use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::IdentifyArgs;
use crate::commands::build_parser;

pub fn run(args: IdentifyArgs) -> Result<()> {
    let parser = build_parser(args.no_bare_numeric)?;
    let identifier = parser.citation_to_identifier(&args.citation);

    let mut output = io::BufWriter::new(io::stdout().lock());
    match (identifier, args.json) {
        (identifier, true) => {
            serde_json::to_writer(&mut output, &identifier)
                .context("failed to serialize identifier json output")?;
            writeln!(output)?;
        }
        (Some(identifier), false) => writeln!(output, "{identifier}")?,
        (None, false) => info!(citation = %args.citation, "no citation recognized"),
    }

    output.flush()?;
    Ok(())
}
