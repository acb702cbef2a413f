//! Parse spelled-out deed amounts such as `One Million Five Hundred Thousand`.
//!
//! Only the `Million` and `Thousand` components are read. Each is either a
//! decimal numeral (`1.5 Million`) or a run of English number words directly
//! before the scale token (`Twenty-Five Thousand`). Scale tokens are
//! case-sensitive; number words are not.

use once_cell::sync::Lazy;
use regex::Regex;

const NUMBER_WORDS: &str = "zero|one|two|three|four|five|six|seven|eight|nine|ten|eleven|twelve|\
thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|fifty|sixty|\
seventy|eighty|ninety|hundred|and";

static MILLION: Lazy<Regex> = Lazy::new(|| scale_pattern("Million"));
static THOUSAND: Lazy<Regex> = Lazy::new(|| scale_pattern("Thousand"));

fn scale_pattern(token: &str) -> Regex {
    Regex::new(&format!(
        r"(?:(\d+(?:\.\d+)?)\s*|\b((?i:(?:{NUMBER_WORDS})[\s-]+)+)){token}"
    ))
    .unwrap()
}

/// Parse a written amount into dollars.
///
/// Million and Thousand components are found independently and summed.
/// Returns `None` when neither component parses or the total is zero.
pub fn parse_written_amount(text: &str) -> Option<f64> {
    let millions = component(&MILLION, text).unwrap_or(0.0);
    let thousands = component(&THOUSAND, text).unwrap_or(0.0);
    let total = millions * 1_000_000.0 + thousands * 1_000.0;
    if total > 0.0 { Some(total) } else { None }
}

fn component(pattern: &Regex, text: &str) -> Option<f64> {
    let caps = pattern.captures(text)?;
    if let Some(numeral) = caps.get(1) {
        return numeral.as_str().parse().ok();
    }
    words_to_number(caps.get(2)?.as_str())
}

/// `"Five Hundred"` → 500, `"Twenty-Five"` → 25, `"One Hundred and Ten"` → 110.
///
/// Runs that overflow `u64` (garbled repeats of `Hundred`) are unparseable.
fn words_to_number(words: &str) -> Option<f64> {
    let mut value = 0u64;
    let mut seen = false;

    for word in words.split(|c: char| c.is_whitespace() || c == '-') {
        let word = word.to_ascii_lowercase();
        match word.as_str() {
            "" | "and" => continue,
            "hundred" => value = value.max(1).checked_mul(100)?,
            other => value = value.checked_add(small_number(other)?)?,
        }
        seen = true;
    }

    if seen { Some(value as f64) } else { None }
}

fn small_number(word: &str) -> Option<u64> {
    let n = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn million_and_thousand_words() {
        assert_eq!(
            parse_written_amount("One Million Five Hundred Thousand"),
            Some(1_500_000.0)
        );
        assert_eq!(
            parse_written_amount("One Million Two Hundred Thousand Dollars"),
            Some(1_200_000.0)
        );
    }

    #[test]
    fn single_component() {
        assert_eq!(parse_written_amount("Two Million"), Some(2_000_000.0));
        assert_eq!(parse_written_amount("Seven Hundred Fifty Thousand"), Some(750_000.0));
    }

    #[test]
    fn numerals() {
        assert_eq!(parse_written_amount("1.5 Million"), Some(1_500_000.0));
        assert_eq!(parse_written_amount("2 Million 250 Thousand"), Some(2_250_000.0));
        assert_eq!(parse_written_amount("750Thousand"), Some(750_000.0));
    }

    #[test]
    fn hyphenated_and_connector_words() {
        assert_eq!(parse_written_amount("Twenty-Five Thousand"), Some(25_000.0));
        assert_eq!(
            parse_written_amount("One Hundred and Twenty Thousand"),
            Some(120_000.0)
        );
        assert_eq!(
            parse_written_amount("Three Million and Five Hundred Thousand"),
            Some(3_500_000.0)
        );
    }

    #[test]
    fn number_words_are_case_insensitive() {
        assert_eq!(parse_written_amount("TWO Million"), Some(2_000_000.0));
    }

    #[test]
    fn scale_tokens_are_case_sensitive() {
        assert_eq!(parse_written_amount("two million"), None);
    }

    #[test]
    fn unparseable_amounts() {
        assert_eq!(parse_written_amount("Several Million"), None);
        assert_eq!(parse_written_amount("Million"), None);
        assert_eq!(parse_written_amount("Zero Million"), None);
        assert_eq!(parse_written_amount(""), None);
    }

    #[test]
    fn words_to_number_basics() {
        assert_eq!(words_to_number("Five Hundred "), Some(500.0));
        assert_eq!(words_to_number("hundred"), Some(100.0));
        assert_eq!(words_to_number("and "), None);
        assert_eq!(words_to_number("ninety nine"), Some(99.0));
    }

    #[test]
    fn repeated_hundreds_overflow_to_unparseable() {
        let garbled = format!("{}Thousand", "Hundred ".repeat(11));
        assert_eq!(parse_written_amount(&garbled), None);
        assert_eq!(words_to_number(&"hundred ".repeat(40)), None);
        // Nine repeats still fit.
        assert_eq!(words_to_number(&"hundred ".repeat(9)), Some(1e18));
    }
}
