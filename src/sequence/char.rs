//! Single-character cells.
//!
//! [`Char`] wraps exactly one character. An `Array<Char>` is the toolbox's
//! representation of text: every combinator treats its cells like any other
//! element, while rendering prints the cells back as a quoted string.
//!
//! `Char` intentionally has no `Display` implementation; its textual form is
//! [`Char::to_text`], and `Display` for `Array<Char>` is the string
//! rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::Array;

/// A single character.
///
/// Equality and ordering are those of the underlying `char`.
///
/// # Examples
///
/// ```rust
/// use fpbox::sequence::Char;
///
/// let cell = Char::new("h").unwrap();
/// assert_eq!(cell.as_char(), 'h');
/// assert_eq!(format!("{cell:?}"), "'h'");
///
/// assert!(Char::new("").is_err());
/// assert!(Char::new("hi").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Char(char);

impl Char {
    /// Builds a cell from text holding exactly one character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChar`] if `text` is empty or holds more than
    /// one character.
    pub fn new(text: &str) -> Result<Self> {
        let mut characters = text.chars();
        match (characters.next(), characters.next()) {
            (Some(character), None) => Ok(Self(character)),
            _ => {
                let error = Error::InvalidChar {
                    text: text.to_owned(),
                    length: text.chars().count(),
                };
                tracing::debug!(%error, "rejected char input");
                Err(error)
            }
        }
    }

    /// The wrapped character.
    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// The wrapped character as owned text.
    pub fn to_text(self) -> String {
        self.0.to_string()
    }
}

impl From<char> for Char {
    #[inline]
    fn from(character: char) -> Self {
        Self(character)
    }
}

impl From<Char> for char {
    #[inline]
    fn from(cell: Char) -> Self {
        cell.0
    }
}

impl TryFrom<&str> for Char {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

impl FromStr for Char {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

impl fmt::Debug for Char {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}", self.0)
    }
}

/// Splits `text` into an [`Array`] of [`Char`], one cell per character.
///
/// # Examples
///
/// ```rust
/// use fpbox::sequence::chars_of;
///
/// let text = chars_of("hello");
/// assert_eq!(text.len(), 5);
/// assert_eq!(text.to_string(), "\"hello\"");
/// assert_eq!(text.to_text(), "hello");
/// ```
pub fn chars_of(text: &str) -> Array<Char> {
    text.chars().map(Char).collect()
}

impl Array<Char> {
    /// Joins the cells back into a `String`, without quoting.
    pub fn to_text(&self) -> String {
        self.iter().map(|cell| cell.as_char()).collect()
    }
}

impl From<&str> for Array<Char> {
    fn from(text: &str) -> Self {
        chars_of(text)
    }
}

impl fmt::Display for Array<Char> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "\"{}\"", self.to_text())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Char {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buffer = [0; 4];
        serializer.serialize_str(self.0.encode_utf8(&mut buffer))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Char {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", 'a')]
    #[case("é", 'é')]
    #[case("🦀", '🦀')]
    #[case(" ", ' ')]
    fn new_accepts_one_character(#[case] text: &str, #[case] expected: char) {
        assert_eq!(Char::new(text).map(Char::as_char), Ok(expected));
    }

    #[rstest]
    #[case("", 0)]
    #[case("ab", 2)]
    #[case("e\u{301}", 2)]
    fn new_rejects_other_lengths(#[case] text: &str, #[case] length: usize) {
        assert_eq!(
            Char::new(text),
            Err(Error::InvalidChar {
                text: text.to_owned(),
                length,
            })
        );
    }

    #[test]
    fn parse_goes_through_validation() {
        assert_eq!("x".parse::<Char>(), Ok(Char::from('x')));
        assert!("xy".parse::<Char>().is_err());
        assert!(Char::try_from("").is_err());
    }

    #[test]
    fn ordering_follows_char() {
        assert!(Char::from('a') < Char::from('b'));
        assert_eq!(char::from(Char::from('z')), 'z');
    }

    #[rstest]
    #[case("hello")]
    #[case("")]
    #[case("a \"quoted\" word")]
    fn chars_of_round_trips_text(#[case] text: &str) {
        assert_eq!(chars_of(text).to_text(), text);
    }

    #[test]
    fn char_array_renders_as_a_quoted_string() {
        assert_eq!(chars_of("hello").to_string(), "\"hello\"");
        assert_eq!(Array::<Char>::new().to_string(), "\"\"");
    }

    #[rstest]
    #[case("say \"hi\"")]
    #[case("back\\slash")]
    #[case("tab\tand\nnewline")]
    fn char_array_rendering_does_not_escape(#[case] text: &str) {
        let rendered = chars_of(text).to_string();
        let unquoted = rendered.strip_prefix('"').and_then(|rest| rest.strip_suffix('"'));
        assert_eq!(unquoted, Some(text));
    }

    #[test]
    fn char_array_debug_lists_cells() {
        assert_eq!(format!("{:?}", chars_of("hi")), "['h', 'i']");
    }
}
