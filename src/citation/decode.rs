use super::roman::arabic_to_roman;
use super::{CitationKind, SEGMENT_DELIMITER};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DecodeStyle {
    /// Bracket values are rendered exactly as stored.
    #[default]
    Plain,
    /// Numeric `subpara` values are rendered as lowercase Roman numerals.
    RomanSubparagraphs,
}

/// Renders an identifier as a display citation, e.g. `sec_19__subsec_2__para_a`
/// becomes `Section 19(2)(a)`. Segments with an unknown tag are copied through.
pub fn decode_identifier(identifier: &str) -> String {
    decode_identifier_with(identifier, DecodeStyle::Plain)
}

pub fn decode_identifier_with(identifier: &str, style: DecodeStyle) -> String {
    let mut out = String::with_capacity(identifier.len() + 8);

    for segment in identifier.split(SEGMENT_DELIMITER) {
        match decode_segment(segment, style) {
            DecodedSegment::Primary(text) | DecodedSegment::Verbatim(text) => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(&text);
            }
            DecodedSegment::Bracket(text) => out.push_str(&text),
        }
    }

    out
}

enum DecodedSegment {
    Primary(String),
    Bracket(String),
    Verbatim(String),
}

fn decode_segment(segment: &str, style: DecodeStyle) -> DecodedSegment {
    let Some((tag, value)) = segment.split_once('_') else {
        return DecodedSegment::Verbatim(segment.to_string());
    };

    if let Some(kind) = CitationKind::from_prefix(tag) {
        return DecodedSegment::Primary(format!("{} {}", kind.label(), value));
    }

    match tag {
        "subsec" | "para" => DecodedSegment::Bracket(format!("({value})")),
        "subpara" => {
            let rendered = match style {
                DecodeStyle::Plain => value.to_string(),
                DecodeStyle::RomanSubparagraphs => value
                    .parse::<u32>()
                    .ok()
                    .and_then(arabic_to_roman)
                    .unwrap_or_else(|| value.to_string()),
            };
            DecodedSegment::Bracket(format!("({rendered})"))
        }
        _ => DecodedSegment::Verbatim(segment.to_string()),
    }
}
