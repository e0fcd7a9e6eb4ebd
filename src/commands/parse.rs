use std::io::{self, Write};

use anyhow::{Context, Result};
use lawcite::ParsedCitation;
use tracing::info;

use crate::cli::ParseArgs;
use crate::commands::{build_parser, read_text_source};

pub fn run(args: ParseArgs) -> Result<()> {
    let text = read_text_source(&args.source)?;
    let parser = build_parser(args.no_bare_numeric)?;

    let citations = parser.parse(&text);
    info!(
        chars = text.chars().count(),
        citation_count = citations.len(),
        "parsed citations"
    );

    if args.json {
        write_json_response(&citations)
    } else {
        write_text_response(&citations)
    }
}

fn write_json_response(citations: &[ParsedCitation]) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, citations)
        .context("failed to serialize citation json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

fn write_text_response(citations: &[ParsedCitation]) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    for citation in citations {
        writeln!(output, "{}", format_citation_line(citation))?;
    }

    output.flush()?;
    Ok(())
}

pub(crate) fn format_citation_line(citation: &ParsedCitation) -> String {
    format!(
        "{}..{}\t{}\t{}\t{}",
        citation.start,
        citation.end,
        citation.kind.as_str(),
        citation.identifier,
        citation.text
    )
}

#[cfg(test)]
mod tests {
    use super::format_citation_line;

    #[test]
    fn citation_line_lists_span_kind_identifier_and_text() {
        let citations = lawcite::parse_citations("See Art. 14(2)");
        assert_eq!(
            format_citation_line(&citations[0]),
            "4..14\tarticle\tart_14__subsec_2\tArt. 14(2)"
        );
    }
}
