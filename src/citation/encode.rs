use super::roman::roman_to_arabic;
use super::{CitationKind, SEGMENT_DELIMITER};

/// Builds the structural identifier for a citation.
///
/// Segments are `<prefix>_<number>`, then `subsec_`, `para_` and `subpara_`
/// for whichever designators are present, joined by `__`. Roman numerals in
/// `number` and `subparagraph` are normalized to decimal, so `Part IV` and
/// `Part 4` share an identifier.
pub fn encode_identifier(
    kind: CitationKind,
    number: &str,
    subsection: Option<&str>,
    paragraph: Option<&str>,
    subparagraph: Option<&str>,
) -> String {
    let mut segments = vec![format!("{}_{}", kind.prefix(), normalize_designator(number))];

    if let Some(subsection) = subsection {
        segments.push(format!("subsec_{subsection}"));
    }
    if let Some(paragraph) = paragraph {
        segments.push(format!("para_{paragraph}"));
    }
    if let Some(subparagraph) = subparagraph {
        segments.push(format!("subpara_{}", normalize_designator(subparagraph)));
    }

    segments.join(SEGMENT_DELIMITER)
}

fn normalize_designator(token: &str) -> String {
    roman_to_arabic(token)
        .map(|value| value.to_string())
        .unwrap_or_else(|| token.to_string())
}
