//! Vietnamese-aware string collation
//!
//! Venue names and districts are Vietnamese. Plain code-point ordering puts
//! "Đà Lạt" after "Zen" and "ăn" after "z", so sorting goes through a
//! three-level key instead:
//!
//! 1. Primary: letters by the Vietnamese alphabet
//!    (a ă â b c d đ e ê g h i k l m n o ô ơ p q r s t u ư v x y, plus the
//!    remaining Latin letters in place), digits before letters, spaces and
//!    punctuation before digits.
//! 2. Secondary: tone marks (none, huyền, hỏi, ngã, sắc, nặng).
//! 3. Tertiary: lowercase before uppercase.
//!
//! Strings equal on all three levels fall back to code-point order so the
//! comparison stays total.

use std::cmp::Ordering;

/// Base letters in Vietnamese alphabetical order, interleaved with the
/// Latin letters Vietnamese does not use (f, j, w, z)
const ALPHABET: &str = "aăâbcdđeêfghijklmnoôơpqrstuưvwxyz";

/// Toned forms per base vowel: huyền, hỏi, ngã, sắc, nặng
const TONED_VOWELS: [(char, &str); 12] = [
    ('a', "àảãáạ"),
    ('ă', "ằẳẵắặ"),
    ('â', "ầẩẫấậ"),
    ('e', "èẻẽéẹ"),
    ('ê', "ềểễếệ"),
    ('i', "ìỉĩíị"),
    ('o', "òỏõóọ"),
    ('ô', "ồổỗốộ"),
    ('ơ', "ờởỡớợ"),
    ('u', "ùủũúụ"),
    ('ư', "ừửữứự"),
    ('y', "ỳỷỹýỵ"),
];

const TIER_SEPARATOR: u64 = 0;
const TIER_DIGIT: u64 = 1;
const TIER_ALPHABET: u64 = 2;
const TIER_OTHER_LETTER: u64 = 3;

/// Sort key for one string; derived `Ord` compares the levels in order
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u64>,
    tones: Vec<u8>,
    upper: Vec<bool>,
    raw: String,
}

/// Build the collation key for `s`
pub fn collation_key(s: &str) -> CollationKey {
    let mut primary = Vec::with_capacity(s.len());
    let mut tones = Vec::with_capacity(s.len());
    let mut upper = Vec::with_capacity(s.len());

    for c in s.chars() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        let (base, tone) = split_tone(lower);
        primary.push(primary_weight(base));
        tones.push(tone);
        upper.push(lower != c);
    }

    CollationKey {
        primary,
        tones,
        upper,
        raw: s.to_string(),
    }
}

/// Compare two strings with Vietnamese collation rules
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use foodpick_common::collation::compare;
///
/// assert_eq!(compare("Đà Lạt", "Dân"), Ordering::Greater);
/// assert_eq!(compare("bánh mì", "bắp xào"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn split_tone(c: char) -> (char, u8) {
    for (base, toned) in TONED_VOWELS {
        if c == base {
            return (base, 0);
        }
        if let Some(pos) = toned.chars().position(|t| t == c) {
            return (base, pos as u8 + 1);
        }
    }
    (c, 0)
}

fn primary_weight(c: char) -> u64 {
    if let Some(pos) = ALPHABET.chars().position(|a| a == c) {
        return (TIER_ALPHABET << 32) | pos as u64;
    }
    if let Some(d) = c.to_digit(10) {
        return (TIER_DIGIT << 32) | d as u64;
    }
    if c.is_alphanumeric() {
        return (TIER_OTHER_LETTER << 32) | c as u64;
    }
    (TIER_SEPARATOR << 32) | c as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        out.sort_by(|a, b| compare(a, b));
        out
    }

    #[test]
    fn test_vietnamese_letter_order() {
        assert_eq!(sorted(&["ân", "ăn", "an"]), vec!["an", "ăn", "ân"]);
        assert_eq!(sorted(&["đi", "di", "e"]), vec!["di", "đi", "e"]);
        assert_eq!(sorted(&["ư", "u", "v"]), vec!["u", "ư", "v"]);
    }

    #[test]
    fn test_tone_is_secondary() {
        assert_eq!(
            sorted(&["mạ", "má", "mã", "mả", "mà", "ma"]),
            vec!["ma", "mà", "mả", "mã", "má", "mạ"]
        );
        // Letter difference later in the word outranks an earlier tone difference
        assert_eq!(compare("bà b", "ba c"), Ordering::Less);
    }

    #[test]
    fn test_case_is_tertiary() {
        assert_eq!(compare("phở", "Phở"), Ordering::Less);
        assert_eq!(compare("Phở", "phởa"), Ordering::Less);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(compare("Quận 1", "Quận Bình Thạnh"), Ordering::Less);
        assert_eq!(compare("Quận 10", "Quận 2"), Ordering::Less);
    }

    #[test]
    fn test_uppercase_toned_vowels_fold() {
        assert_eq!(compare("Ắ", "ắ"), Ordering::Greater);
        assert_eq!(compare("Ắb", "ac"), Ordering::Greater);
        assert_eq!(compare("Ắb", "âa"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(compare("Bún bò Huế", "Bún bò Huế"), Ordering::Equal);
    }
}
