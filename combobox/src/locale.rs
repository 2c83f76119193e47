//! Locale tags and locale-aware label comparison.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};
use std::sync::LazyLock;

use nucleo_matcher::chars;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

static LOCALE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{1,8})*$").expect("Invalid regex pattern")
});

/// A BCP 47 style locale tag such as `en`, `en-US` or `sv_SE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse and validate a locale tag.
    pub fn new(tag: impl Into<String>) -> Result<Self, ConfigError> {
        let tag = tag.into();
        if LOCALE_TAG.is_match(&tag) {
            Ok(Self(tag))
        } else {
            Err(ConfigError::InvalidLocale(tag))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, lowercased (`"sv"` for `"sv-SE"`).
    pub fn language(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl TryFrom<String> for Locale {
    type Error = ConfigError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// -----------------------------------------------------------------------------
// Comparison
// -----------------------------------------------------------------------------

/// Compare two labels the way a human reading `locale` expects.
///
/// - runs of ASCII digits compare by numeric value (`"Item 2" < "Item 10"`)
/// - base letters first, ignoring case and diacritics
/// - then diacritics (`"resume" < "résumé"`)
/// - then case, lowercase first (`"apple" < "Apple"`)
/// - finally raw code points, so distinct strings never compare equal
///
/// Nordic languages (`sv`, `fi`, `da`, `nb`, `nn`, `no`) sort `å ä ö æ ø`
/// as separate letters after `z`.
pub fn locale_compare(a: &str, b: &str, locale: &Locale) -> Ordering {
    Collator::new(locale).compare(a, b)
}

/// Letter tailoring applied on top of the root ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tailoring {
    Root,
    /// Swedish and Finnish: `å ä ö`.
    SwedishFinnish,
    /// Danish and Norwegian: `æ ø å`.
    DanishNorwegian,
}

impl Tailoring {
    fn for_locale(locale: &Locale) -> Self {
        let language = locale.0.split(['-', '_']).next().unwrap_or_default();
        let is = |tag: &str| language.eq_ignore_ascii_case(tag);
        if is("sv") || is("fi") {
            Tailoring::SwedishFinnish
        } else if is("da") || is("nb") || is("nn") || is("no") {
            Tailoring::DanishNorwegian
        } else {
            Tailoring::Root
        }
    }
}

/// A comparator bound to one locale.
///
/// Resolves the locale once; [`Collator::compare`] does not allocate.
#[derive(Debug, Clone, Copy)]
pub struct Collator {
    tailoring: Tailoring,
}

impl Collator {
    pub fn new(locale: &Locale) -> Self {
        Self {
            tailoring: Tailoring::for_locale(locale),
        }
    }

    /// Total order over labels, see [`locale_compare`].
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_tokens(a, b, |l, r| self.compare_primary(l, r))
            .then_with(|| compare_tokens(a, b, compare_accent))
            .then_with(|| compare_tokens(a, b, compare_case))
            .then_with(|| a.cmp(b))
    }

    // A digit run sorts before a lone non-ASCII numeral; the two never tie.
    fn compare_primary(&self, left: Token<'_>, right: Token<'_>) -> Ordering {
        match (left, right) {
            (Token::Digits(a), Token::Digits(b)) => compare_digits(a, b),
            (Token::Digits(_), Token::Char(c)) => CharClass::Digit
                .cmp(&CharClass::of(c))
                .then(Ordering::Less),
            (Token::Char(c), Token::Digits(_)) => CharClass::of(c)
                .cmp(&CharClass::Digit)
                .then(Ordering::Greater),
            (Token::Char(a), Token::Char(b)) => (CharClass::of(a), self.base_letter(a))
                .cmp(&(CharClass::of(b), self.base_letter(b))),
        }
    }

    fn base_letter(&self, c: char) -> char {
        if let Some(tailored) = self.nordic_letter(c) {
            return tailored;
        }
        chars::to_lower_case(chars::normalize(chars::to_lower_case(c)))
    }

    // Maps to the code points just past 'z' so these letters sort after it.
    fn nordic_letter(&self, c: char) -> Option<char> {
        let lower = c.to_lowercase().next().unwrap_or(c);
        match self.tailoring {
            Tailoring::SwedishFinnish => match lower {
                'å' => Some('{'),
                'ä' | 'æ' => Some('|'),
                'ö' | 'ø' => Some('}'),
                _ => None,
            },
            Tailoring::DanishNorwegian => match lower {
                'æ' | 'ä' => Some('{'),
                'ø' | 'ö' => Some('|'),
                'å' => Some('}'),
                _ => None,
            },
            Tailoring::Root => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Punct,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphanumeric() {
            CharClass::Letter
        } else {
            CharClass::Punct
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Token<'a> {
    Digits(&'a str),
    Char(char),
}

/// Splits a label into ASCII digit runs and single chars.
struct Tokens<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, c) = self.chars.next()?;
        if !c.is_ascii_digit() {
            return Some(Token::Char(c));
        }
        let mut end = start + 1;
        while let Some(&(i, d)) = self.chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            end = i + 1;
            self.chars.next();
        }
        Some(Token::Digits(&self.source[start..end]))
    }
}

/// Lexicographic comparison of the token streams, shorter prefix first.
fn compare_tokens<'a>(
    a: &'a str,
    b: &'a str,
    mut compare: impl FnMut(Token<'a>, Token<'a>) -> Ordering,
) -> Ordering {
    let mut left = Tokens::new(a);
    let mut right = Tokens::new(b);
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) => {
                let ordering = compare(l, r);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_accent(left: Token<'_>, right: Token<'_>) -> Ordering {
    match (left, right) {
        (Token::Char(a), Token::Char(b)) => chars::to_lower_case(a).cmp(&chars::to_lower_case(b)),
        _ => Ordering::Equal,
    }
}

fn compare_case(left: Token<'_>, right: Token<'_>) -> Ordering {
    match (left, right) {
        (Token::Char(a), Token::Char(b)) => match (a.is_uppercase(), b.is_uppercase()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}
