use std::io::{self, Write};

use anyhow::Result;
use lawcite::{CitationParser, ParsedCitation};
use tracing::info;

use crate::cli::AnnotateArgs;
use crate::commands::{build_parser, read_text_source};

pub fn run(args: AnnotateArgs) -> Result<()> {
    let text = read_text_source(&args.source)?;
    let parser = build_parser(args.no_bare_numeric)?;

    let mut linked = 0_usize;
    let annotated = annotate_text(&parser, &text, &args.anchor_prefix, &mut linked);
    info!(citation_count = linked, "annotated citations");

    let mut output = io::BufWriter::new(io::stdout().lock());
    output.write_all(annotated.as_bytes())?;
    if !annotated.ends_with('\n') {
        writeln!(output)?;
    }
    output.flush()?;
    Ok(())
}

/// Wraps each citation as a markdown link to its in-document anchor.
fn annotate_text(
    parser: &CitationParser,
    text: &str,
    anchor_prefix: &str,
    linked: &mut usize,
) -> String {
    parser.link_citations(text, |citation: &ParsedCitation| {
        *linked += 1;
        format!("[{}](#{}{})", citation.text, anchor_prefix, citation.identifier)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotate_text_links_each_citation_with_prefix() {
        let parser = CitationParser::new().expect("pattern table should compile");
        let mut linked = 0;
        let annotated = annotate_text(
            &parser,
            "Read Part IV with s. 3(1)(a).",
            "act-",
            &mut linked,
        );

        assert_eq!(linked, 2);
        assert_eq!(
            annotated,
            "Read [Part IV](#act-part_4) with [s. 3(1)(a)](#act-sec_3__subsec_1__para_a)."
        );
    }
}
