pub mod citation;

pub use citation::{
    CitationKind, CitationParser, DecodeStyle, ParseOptions, ParsedCitation, arabic_to_roman,
    citation_to_identifier, decode_identifier, decode_identifier_with, encode_identifier,
    extract_unique_identifiers, has_citations, is_roman_numeral, parse_citations,
    roman_to_arabic,
};
