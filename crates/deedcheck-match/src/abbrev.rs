//! Abbreviation forms of reference names.
//!
//! Two shapes are recognised:
//!
//! - initials: `SC`, `S.C.`, `S C` for `Santa Clara`, `L.A.` for `Los Angeles`
//! - shortened words: `S. Clara`, `San Fran`, where each word is a prefix

/// First letter of each whitespace-separated word, uppercased.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Input with periods and spaces removed, uppercased.
pub(crate) fn compact(raw: &str) -> String {
    raw.chars()
        .filter(|&c| c != '.' && c != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}

/// True when `raw` spells `name` with one or more words shortened.
///
/// Word counts must agree, each input word (split on whitespace and periods)
/// must be a prefix of the matching reference word, and at least one must be
/// strictly shorter. Identical spellings are not abbreviations, and a
/// single-word name only counts when the input carries a period (`Alam.`).
pub(crate) fn is_shortened_form(raw: &str, name: &str) -> bool {
    let raw_words: Vec<String> = raw
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|w| !w.is_empty())
        .map(str::to_uppercase)
        .collect();
    let name_words: Vec<String> = name.split_whitespace().map(str::to_uppercase).collect();

    if raw_words.is_empty() || raw_words.len() != name_words.len() {
        return false;
    }
    if name_words.len() == 1 && !raw.contains('.') {
        return false;
    }

    let mut shortened = false;
    for (short, full) in raw_words.iter().zip(&name_words) {
        if !full.starts_with(short.as_str()) {
            return false;
        }
        if short.len() < full.len() {
            shortened = true;
        }
    }
    shortened
}

/// Either abbreviation shape.
pub(crate) fn is_abbreviation(raw: &str, name: &str) -> bool {
    compact(raw) == initials(name) || is_shortened_form(raw, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_of_multi_word_names() {
        assert_eq!(initials("Santa Clara"), "SC");
        assert_eq!(initials("San Luis Obispo"), "SLO");
        assert_eq!(initials("  los   angeles "), "LA");
        assert_eq!(initials("Alameda"), "A");
    }

    #[test]
    fn compact_strips_periods_and_spaces() {
        assert_eq!(compact("S. C."), "SC");
        assert_eq!(compact("l.a."), "LA");
        assert_eq!(compact("S. Clara"), "SCLARA");
    }

    #[test]
    fn shortened_words() {
        assert!(is_shortened_form("S. Clara", "Santa Clara"));
        assert!(is_shortened_form("S.Clara", "Santa Clara"));
        assert!(is_shortened_form("san fran", "San Francisco"));
    }

    #[test]
    fn contractions_are_not_prefixes() {
        // STA drops letters from the middle of SANTA.
        assert!(!is_shortened_form("Sta Clara", "Santa Clara"));
        assert!(!is_abbreviation("Sta Clara", "Santa Clara"));
    }

    #[test]
    fn shortened_form_rejects_mismatches() {
        // Same spelling is not an abbreviation.
        assert!(!is_shortened_form("Santa Clara", "Santa Clara"));
        // Word count differs.
        assert!(!is_shortened_form("Santa", "Santa Clara"));
        // Second word is not a prefix.
        assert!(!is_shortened_form("S. Clara", "Santa Cruz"));
        assert!(!is_shortened_form("...", "Santa Clara"));
    }

    #[test]
    fn single_word_needs_period() {
        assert!(!is_shortened_form("Alam", "Alameda"));
        assert!(is_shortened_form("Alam.", "Alameda"));
    }

    #[test]
    fn either_shape_counts() {
        assert!(is_abbreviation("SC", "Santa Clara"));
        assert!(is_abbreviation("L.A.", "Los Angeles"));
        assert!(is_abbreviation("S. Clara", "Santa Clara"));
        assert!(!is_abbreviation("Zzyzx County", "Santa Clara"));
    }
}
