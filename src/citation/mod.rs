//! Legal citation parsing and structural identifier (eId) encoding.
//!
//! Free text such as `"See Section 19(2)(a)(i)"` is scanned against an ordered
//! pattern table; every accepted match becomes a [`ParsedCitation`] carrying an
//! identifier like `sec_19__subsec_2__para_a__subpara_1`. Identifiers decode
//! back to a canonical display citation.

mod decode;
mod encode;
mod matcher;
mod patterns;
mod roman;

use serde::Serialize;

pub use decode::{DecodeStyle, decode_identifier, decode_identifier_with};
pub use encode::encode_identifier;
pub use matcher::{
    CitationParser, ParseOptions, citation_to_identifier, extract_unique_identifiers,
    has_citations, parse_citations,
};
pub use roman::{arabic_to_roman, is_roman_numeral, roman_to_arabic};

pub(crate) const SEGMENT_DELIMITER: &str = "__";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    Section,
    Article,
    Regulation,
    Part,
    Chapter,
    Schedule,
}

impl CitationKind {
    pub const ALL: [CitationKind; 6] = [
        Self::Section,
        Self::Article,
        Self::Regulation,
        Self::Part,
        Self::Chapter,
        Self::Schedule,
    ];

    /// Identifier prefix token for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Section => "sec",
            Self::Article => "art",
            Self::Regulation => "reg",
            Self::Part => "part",
            Self::Chapter => "chp",
            Self::Schedule => "schedule",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Section => "Section",
            Self::Article => "Article",
            Self::Regulation => "Regulation",
            Self::Part => "Part",
            Self::Chapter => "Chapter",
            Self::Schedule => "Schedule",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Article => "article",
            Self::Regulation => "regulation",
            Self::Part => "part",
            Self::Chapter => "chapter",
            Self::Schedule => "schedule",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.prefix() == prefix)
    }
}

/// A citation found in source text.
///
/// `start` and `end` are half-open byte offsets, so `&input[start..end]`
/// always equals `text`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ParsedCitation {
    pub text: String,
    pub kind: CitationKind,
    pub number: String,
    pub subsection: Option<String>,
    pub paragraph: Option<String>,
    pub subparagraph: Option<String>,
    pub identifier: String,
    pub start: usize,
    pub end: usize,
}

impl ParsedCitation {
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }
}
