//! Shared utility functions.

/// Shorten `s` to at most `max_chars` characters, ending with `…` when
/// anything was cut.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Group the integer part of a decimal number string with commas.
///
/// Non-numeric input is returned unchanged.
pub fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rest, None),
    };
    if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
        return s.to_string();
    }

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsize_short_is_unchanged() {
        assert_eq!(ellipsize("Wakad", 10), "Wakad");
        assert_eq!(ellipsize("Wakad", 5), "Wakad");
    }

    #[test]
    fn ellipsize_cuts_on_char_boundary() {
        assert_eq!(ellipsize("Ambegaon Budruk", 8), "Ambegao…");
        assert_eq!(ellipsize("₹₹₹₹", 3), "₹₹…");
        assert_eq!(ellipsize("abc", 0), "");
    }

    #[test]
    fn group_thousands_integers() {
        assert_eq!(group_thousands("125000000"), "125,000,000");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("-45000"), "-45,000");
    }

    #[test]
    fn group_thousands_keeps_fraction() {
        assert_eq!(group_thousands("5234.5"), "5,234.5");
    }

    #[test]
    fn group_thousands_passes_text_through() {
        assert_eq!(group_thousands("Akurdi"), "Akurdi");
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("₹2.50 Cr"), "₹2.50 Cr");
    }
}
