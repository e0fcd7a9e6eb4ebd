use anyhow::{Context, Result};
use regex::Regex;

use super::CitationKind;

const SECTION_KEYWORD: &str = r"\b(?i:section|sec\.|s\.)\s*";
const ARTICLE_KEYWORD: &str = r"\b(?i:article|art\.)\s*";
const REGULATION_KEYWORD: &str = r"\b(?i:regulation|reg\.)\s*";

const DECIMAL_NUMBER: &str = r"(?P<number>\d+)";
const STRUCTURAL_NUMBER: &str = r"(?P<number>\d+|[IVXLCDM]+)\b";

const SUBSECTION: &str = r"\((?P<subsection>\d+)\)";
const PARAGRAPH: &str = r"\((?P<paragraph>[a-z])\)";
const SUBPARAGRAPH: &str = r"\((?P<subparagraph>[ivxlcdm]+)\)";

/// Which nested designators a pattern captures.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum PatternShape {
    Bare,
    Subsection,
    Paragraph,
    Subparagraph,
}

impl PatternShape {
    const MOST_SPECIFIC_FIRST: [PatternShape; 4] = [
        Self::Subparagraph,
        Self::Paragraph,
        Self::Subsection,
        Self::Bare,
    ];

    fn designators(self, subsection_lead: &str) -> String {
        match self {
            Self::Bare => String::new(),
            Self::Subsection => format!("{subsection_lead}{SUBSECTION}"),
            Self::Paragraph => format!("{subsection_lead}{SUBSECTION}{PARAGRAPH}"),
            Self::Subparagraph => {
                format!("{subsection_lead}{SUBSECTION}{PARAGRAPH}{SUBPARAGRAPH}")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(super) struct CitationPattern {
    pub(super) family: &'static str,
    pub(super) kind: CitationKind,
    pub(super) shape: PatternShape,
    pub(super) regex: Regex,
}

impl CitationPattern {
    fn compile(
        family: &'static str,
        kind: CitationKind,
        shape: PatternShape,
        source: &str,
    ) -> Result<Self> {
        let regex = Regex::new(source).with_context(|| {
            format!("failed to compile {family} citation pattern ({shape:?}): {source}")
        })?;

        Ok(Self {
            family,
            kind,
            shape,
            regex,
        })
    }
}

/// Builds the ordered pattern table. Earlier entries win when spans overlap,
/// so each family lists its most specific shape first. Every keyword family
/// comes before the bare numeric family so `Article 21(1)` is never claimed
/// as a keyword-less section reference.
pub(super) fn build_pattern_table(bare_numeric: bool) -> Result<Vec<CitationPattern>> {
    let mut patterns = Vec::new();

    push_keyword_family(&mut patterns, "section", CitationKind::Section, SECTION_KEYWORD)?;
    push_keyword_family(&mut patterns, "article", CitationKind::Article, ARTICLE_KEYWORD)?;
    push_keyword_family(
        &mut patterns,
        "regulation",
        CitationKind::Regulation,
        REGULATION_KEYWORD,
    )?;

    for (keyword, kind) in [
        ("part", CitationKind::Part),
        ("chapter", CitationKind::Chapter),
        ("schedule", CitationKind::Schedule),
    ] {
        let source = format!(r"\b(?i:{keyword})\s+{STRUCTURAL_NUMBER}");
        patterns.push(CitationPattern::compile(
            "structural",
            kind,
            PatternShape::Bare,
            &source,
        )?);
    }

    if bare_numeric {
        for shape in PatternShape::MOST_SPECIFIC_FIRST {
            if shape == PatternShape::Bare {
                continue;
            }
            let source = format!(r"\b{DECIMAL_NUMBER}{}", shape.designators(""));
            patterns.push(CitationPattern::compile(
                "bare_numeric",
                CitationKind::Section,
                shape,
                &source,
            )?);
        }
    }

    Ok(patterns)
}

fn push_keyword_family(
    patterns: &mut Vec<CitationPattern>,
    family: &'static str,
    kind: CitationKind,
    keyword: &str,
) -> Result<()> {
    for shape in PatternShape::MOST_SPECIFIC_FIRST {
        let source = format!(r"{keyword}{DECIMAL_NUMBER}{}", shape.designators(r"\s*"));
        patterns.push(CitationPattern::compile(family, kind, shape, &source)?);
    }

    Ok(())
}
