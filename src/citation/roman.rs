const ROMAN_DIGITS: &[(u32, &str)] = &[
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

fn roman_digit_value(ch: char) -> Option<u32> {
    match ch.to_ascii_lowercase() {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        _ => None,
    }
}

/// True when every character of a non-empty token is a Roman numeral symbol,
/// in either case. Well-formedness ("IIII", "VX") is not checked.
pub fn is_roman_numeral(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| roman_digit_value(ch).is_some())
}

/// Subtractive left-to-right conversion: a symbol smaller than its successor
/// is subtracted, otherwise added.
pub fn roman_to_arabic(token: &str) -> Option<u32> {
    if !is_roman_numeral(token) {
        return None;
    }

    let values = token
        .chars()
        .filter_map(roman_digit_value)
        .collect::<Vec<u32>>();

    let mut total: i64 = 0;
    for (idx, value) in values.iter().enumerate() {
        let value = i64::from(*value);
        match values.get(idx + 1) {
            Some(next) if value < i64::from(*next) => total -= value,
            _ => total += value,
        }
    }

    u32::try_from(total.max(0)).ok()
}

/// Lowercase Roman rendering for 1..=3999.
pub fn arabic_to_roman(value: u32) -> Option<String> {
    if value == 0 || value > 3999 {
        return None;
    }

    let mut remaining = value;
    let mut out = String::new();
    for (digit_value, symbol) in ROMAN_DIGITS {
        while remaining >= *digit_value {
            out.push_str(symbol);
            remaining -= digit_value;
        }
    }

    Some(out)
}
