pub mod annotate;
pub mod decode;
pub mod identify;
pub mod parse;
pub mod scan;

use std::fs;

use anyhow::{Context, Result, bail};
use lawcite::{CitationParser, ParseOptions};

use crate::cli::TextSource;

pub(crate) fn read_text_source(source: &TextSource) -> Result<String> {
    match (&source.text, &source.input) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input text: {}", path.display())),
        (None, None) => bail!("either --text or --input is required"),
    }
}

pub(crate) fn build_parser(no_bare_numeric: bool) -> Result<CitationParser> {
    CitationParser::with_options(ParseOptions {
        bare_numeric: !no_bare_numeric,
    })
    .context("failed to build citation parser")
}
