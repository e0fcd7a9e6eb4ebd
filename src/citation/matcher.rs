use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Captures;
use tracing::{debug, trace};

use super::encode::encode_identifier;
use super::patterns::{CitationPattern, PatternShape, build_pattern_table};
use super::ParsedCitation;

static DEFAULT_PARSER: LazyLock<CitationParser> = LazyLock::new(|| {
    CitationParser::new().expect("built-in citation patterns are valid regexes")
});

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    /// Recognize keyword-less references such as `19(2)(a)` as sections.
    pub bare_numeric: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { bare_numeric: true }
    }
}

/// Compiled pattern table. Holds no per-call state, so one instance can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct CitationParser {
    options: ParseOptions,
    patterns: Vec<CitationPattern>,
}

impl CitationParser {
    pub fn new() -> Result<Self> {
        Self::with_options(ParseOptions::default())
    }

    pub fn with_options(options: ParseOptions) -> Result<Self> {
        let patterns = build_pattern_table(options.bare_numeric)?;
        debug!(
            pattern_count = patterns.len(),
            bare_numeric = options.bare_numeric,
            "compiled citation pattern table"
        );

        Ok(Self { options, patterns })
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Returns every citation in `text`, ordered by start offset. Higher
    /// priority patterns claim their spans first; any later candidate that
    /// overlaps an accepted span is dropped.
    pub fn parse(&self, text: &str) -> Vec<ParsedCitation> {
        let mut accepted = Vec::<ParsedCitation>::new();

        for pattern in &self.patterns {
            for captures in pattern.regex.captures_iter(text) {
                let Some(whole) = captures.get(0) else {
                    continue;
                };
                if whole.start() == whole.end() {
                    continue;
                }

                if accepted
                    .iter()
                    .any(|citation| citation.overlaps(whole.start(), whole.end()))
                {
                    trace!(
                        family = pattern.family,
                        shape = ?pattern.shape,
                        start = whole.start(),
                        end = whole.end(),
                        "dropped overlapping citation candidate"
                    );
                    continue;
                }

                if let Some(citation) = build_citation(pattern, &captures) {
                    accepted.push(citation);
                }
            }
        }

        accepted.sort_by(|left, right| left.start.cmp(&right.start));
        accepted
    }

    pub fn has_citations(&self, text: &str) -> bool {
        !self.parse(text).is_empty()
    }

    /// Distinct identifiers in first-occurrence order.
    pub fn extract_unique_identifiers(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::<String>::new();
        self.parse(text)
            .into_iter()
            .filter_map(|citation| {
                seen.insert(citation.identifier.clone())
                    .then_some(citation.identifier)
            })
            .collect()
    }

    pub fn citation_to_identifier(&self, citation: &str) -> Option<String> {
        self.parse(citation)
            .into_iter()
            .next()
            .map(|parsed| parsed.identifier)
    }

    /// Rewrites `text`, replacing each citation with `render(citation)` and
    /// copying everything between citations unchanged.
    pub fn link_citations<F>(&self, text: &str, mut render: F) -> String
    where
        F: FnMut(&ParsedCitation) -> String,
    {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;

        for citation in self.parse(text) {
            out.push_str(&text[cursor..citation.start]);
            out.push_str(&render(&citation));
            cursor = citation.end;
        }
        out.push_str(&text[cursor..]);

        out
    }
}

fn build_citation(pattern: &CitationPattern, captures: &Captures<'_>) -> Option<ParsedCitation> {
    let whole = captures.get(0)?;
    let number = captures.name("number")?.as_str().to_string();

    let group = |name: &str| captures.name(name).map(|value| value.as_str().to_string());
    let (subsection, paragraph, subparagraph) = match pattern.shape {
        PatternShape::Bare => (None, None, None),
        PatternShape::Subsection => (group("subsection"), None, None),
        PatternShape::Paragraph => (group("subsection"), group("paragraph"), None),
        PatternShape::Subparagraph => (
            group("subsection"),
            group("paragraph"),
            group("subparagraph"),
        ),
    };

    let identifier = encode_identifier(
        pattern.kind,
        &number,
        subsection.as_deref(),
        paragraph.as_deref(),
        subparagraph.as_deref(),
    );

    Some(ParsedCitation {
        text: whole.as_str().to_string(),
        kind: pattern.kind,
        number,
        subsection,
        paragraph,
        subparagraph,
        identifier,
        start: whole.start(),
        end: whole.end(),
    })
}

pub fn parse_citations(text: &str) -> Vec<ParsedCitation> {
    DEFAULT_PARSER.parse(text)
}

pub fn has_citations(text: &str) -> bool {
    DEFAULT_PARSER.has_citations(text)
}

pub fn extract_unique_identifiers(text: &str) -> Vec<String> {
    DEFAULT_PARSER.extract_unique_identifiers(text)
}

/// Identifier of the first citation in `citation`, or `None` when nothing
/// recognizable is present.
pub fn citation_to_identifier(citation: &str) -> Option<String> {
    DEFAULT_PARSER.citation_to_identifier(citation)
}
