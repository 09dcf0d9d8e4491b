//! Mastermind code representation
//!
//! A `CodeWord` is an ordered sequence of colour ids. It is used both for the
//! hidden secret and for guesses.

use super::GameConfig;
use std::fmt;
use thiserror::Error;

/// Error type for codes that do not fit a configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must have exactly {expected} pegs, got {found}")]
    WrongLength { expected: u8, found: usize },

    #[error("colour {colour} is outside 1..={colours}")]
    ColourOutOfRange { colour: u8, colours: u8 },

    #[error("colour {0} is repeated but repeats are not allowed")]
    RepeatedColour(u8),

    #[error("cannot read \"{0}\" as a code")]
    Unparseable(String),
}

/// An ordered sequence of colour ids
///
/// Codes order lexicographically by their colour ids, which gives the
/// stable total order used for deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeWord(Vec<u8>);

impl CodeWord {
    /// Create a code and check it against a configuration
    ///
    /// # Errors
    /// Returns `CodeError` if the length is wrong, a colour is outside
    /// `1..=colours`, or a colour repeats when repeats are disallowed.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeWord, GameConfig};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let code = CodeWord::new(vec![1, 2, 3, 4], &config).unwrap();
    /// assert_eq!(code.pegs(), &[1, 2, 3, 4]);
    ///
    /// assert!(CodeWord::new(vec![1, 2, 3], &config).is_err());
    /// assert!(CodeWord::new(vec![1, 2, 3, 7], &config).is_err());
    /// ```
    pub fn new(pegs: impl Into<Vec<u8>>, config: &GameConfig) -> Result<Self, CodeError> {
        let code = Self(pegs.into());
        code.check(config)?;
        Ok(code)
    }

    /// Parse a code from text such as `1234`, `1,2,3,4` or `1 2 3 4`
    ///
    /// Without separators every character is one colour digit; with commas or
    /// whitespace each field is a full colour id, which allows ids above 9.
    ///
    /// # Errors
    /// Returns `CodeError::Unparseable` for non-numeric input, otherwise the
    /// same errors as [`CodeWord::new`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeWord, GameConfig};
    ///
    /// let config = GameConfig::CLASSIC;
    /// let a = CodeWord::parse("1122", &config).unwrap();
    /// let b = CodeWord::parse("1, 1, 2, 2", &config).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, CodeError> {
        let text = text.trim();
        let unparseable = || CodeError::Unparseable(text.to_string());

        let pegs: Vec<u8> = if text.contains(|c: char| c == ',' || c.is_whitespace()) {
            text.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|field| !field.is_empty())
                .map(|field| field.parse::<u8>().map_err(|_| unparseable()))
                .collect::<Result<_, _>>()?
        } else {
            text.chars()
                .map(|c| {
                    c.to_digit(10)
                        .and_then(|d| u8::try_from(d).ok())
                        .ok_or_else(unparseable)
                })
                .collect::<Result<_, _>>()?
        };

        if pegs.is_empty() {
            return Err(unparseable());
        }

        Self::new(pegs, config)
    }

    /// Check this code against a configuration
    ///
    /// # Errors
    /// See [`CodeWord::new`].
    pub fn check(&self, config: &GameConfig) -> Result<(), CodeError> {
        if self.0.len() != usize::from(config.length()) {
            return Err(CodeError::WrongLength {
                expected: config.length(),
                found: self.0.len(),
            });
        }

        if let Some(&colour) = self.0.iter().find(|&&c| c == 0 || c > config.colours()) {
            return Err(CodeError::ColourOutOfRange {
                colour,
                colours: config.colours(),
            });
        }

        if !config.duplicates_allowed()
            && let Some(colour) = self.first_repeat()
        {
            return Err(CodeError::RepeatedColour(colour));
        }

        Ok(())
    }

    /// Get the colour ids
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.0
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code has no pegs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any colour appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.first_repeat().is_some()
    }

    fn first_repeat(&self) -> Option<u8> {
        let mut seen = [false; 256];
        self.0.iter().copied().find(|&colour| {
            let slot = &mut seen[usize::from(colour)];
            std::mem::replace(slot, true)
        })
    }
}

impl From<Vec<u8>> for CodeWord {
    fn from(pegs: Vec<u8>) -> Self {
        Self(pegs)
    }
}

impl<const N: usize> From<[u8; N]> for CodeWord {
    fn from(pegs: [u8; N]) -> Self {
        Self(pegs.to_vec())
    }
}

impl FromIterator<u8> for CodeWord {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for CodeWord {
    /// Single-digit colours print packed (`1122`); larger ids are comma separated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let packed = self.0.iter().all(|&c| c < 10);
        for (i, colour) in self.0.iter().enumerate() {
            if i > 0 && !packed {
                f.write_str(",")?;
            }
            write!(f, "{colour}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = CodeWord::new(vec![1, 2, 3, 4], &GameConfig::CLASSIC).unwrap();
        assert_eq!(code.pegs(), &[1, 2, 3, 4]);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(
            CodeWord::new(vec![1, 2, 3], &GameConfig::CLASSIC),
            Err(CodeError::WrongLength {
                expected: 4,
                found: 3
            })
        );
        assert!(matches!(
            CodeWord::new(vec![1, 2, 3, 4, 5], &GameConfig::CLASSIC),
            Err(CodeError::WrongLength { found: 5, .. })
        ));
    }

    #[test]
    fn code_creation_colour_out_of_range() {
        assert_eq!(
            CodeWord::new(vec![1, 2, 3, 7], &GameConfig::CLASSIC),
            Err(CodeError::ColourOutOfRange {
                colour: 7,
                colours: 6
            })
        );
        // Colour ids start at 1
        assert!(matches!(
            CodeWord::new(vec![0, 2, 3, 4], &GameConfig::CLASSIC),
            Err(CodeError::ColourOutOfRange { colour: 0, .. })
        ));
    }

    #[test]
    fn code_creation_repeats() {
        let unique = GameConfig::new(4, 6, false).unwrap();
        assert_eq!(
            CodeWord::new(vec![1, 2, 2, 4], &unique),
            Err(CodeError::RepeatedColour(2))
        );
        // The same code is fine when repeats are allowed
        assert!(CodeWord::new(vec![1, 2, 2, 4], &GameConfig::CLASSIC).is_ok());
    }

    #[test]
    fn parse_packed_and_separated() {
        let config = GameConfig::CLASSIC;
        let packed = CodeWord::parse("1234", &config).unwrap();
        let commas = CodeWord::parse("1,2,3,4", &config).unwrap();
        let spaces = CodeWord::parse(" 1 2 3 4 ", &config).unwrap();

        assert_eq!(packed, commas);
        assert_eq!(packed, spaces);
        assert_eq!(packed.pegs(), &[1, 2, 3, 4]);
    }

    #[test]
    fn parse_large_colour_ids() {
        let config = GameConfig::new(3, 12, true).unwrap();
        let code = CodeWord::parse("10,11,12", &config).unwrap();
        assert_eq!(code.pegs(), &[10, 11, 12]);
    }

    #[test]
    fn parse_rejects_garbage() {
        let config = GameConfig::CLASSIC;
        assert!(matches!(
            CodeWord::parse("12a4", &config),
            Err(CodeError::Unparseable(_))
        ));
        assert!(matches!(
            CodeWord::parse("1,x,3,4", &config),
            Err(CodeError::Unparseable(_))
        ));
        assert!(matches!(
            CodeWord::parse("", &config),
            Err(CodeError::Unparseable(_))
        ));
        assert!(matches!(
            CodeWord::parse("123", &config),
            Err(CodeError::WrongLength { .. })
        ));
    }

    #[test]
    fn has_repeats() {
        assert!(CodeWord::from([1, 1, 2, 2]).has_repeats());
        assert!(CodeWord::from([1, 2, 3, 1]).has_repeats());
        assert!(!CodeWord::from([1, 2, 3, 4]).has_repeats());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut codes = vec![
            CodeWord::from([2, 1, 1, 1]),
            CodeWord::from([1, 1, 2, 2]),
            CodeWord::from([1, 1, 1, 6]),
            CodeWord::from([1, 2, 1, 1]),
        ];
        codes.sort();

        assert_eq!(codes[0].pegs(), &[1, 1, 1, 6]);
        assert_eq!(codes[1].pegs(), &[1, 1, 2, 2]);
        assert_eq!(codes[2].pegs(), &[1, 2, 1, 1]);
        assert_eq!(codes[3].pegs(), &[2, 1, 1, 1]);
    }

    #[test]
    fn display_packed() {
        assert_eq!(CodeWord::from([1, 1, 2, 2]).to_string(), "1122");
    }

    #[test]
    fn display_round_trips_large_ids() {
        let config = GameConfig::new(3, 12, true).unwrap();
        let code = CodeWord::from([1, 10, 12]);
        assert_eq!(code.to_string(), "1,10,12");
        assert_eq!(CodeWord::parse(&code.to_string(), &config).unwrap(), code);
    }

    #[test]
    fn collect_from_iterator() {
        let code: CodeWord = (1..=4).collect();
        assert_eq!(code.pegs(), &[1, 2, 3, 4]);
    }
}
