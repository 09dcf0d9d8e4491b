//! Game configuration
//!
//! A `GameConfig` fixes the code length, the number of colours and whether a
//! code may repeat a colour. Every value of this type has been validated.

use std::fmt;
use thiserror::Error;

/// Reasons a configuration cannot be played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("code length must be at least 1")]
    ZeroLength,

    #[error("at least one colour is required")]
    ZeroColours,

    #[error("{colours} colours cannot fill {length} pegs without repeating a colour")]
    TooFewColours { length: u8, colours: u8 },

    #[error("{length} pegs with {colours} colours exceed the code space limit of {limit}")]
    SpaceTooLarge { length: u8, colours: u8, limit: usize },
}

/// Validated Mastermind configuration
///
/// Colours are identified by the integers `1..=colours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    length: u8,
    colours: u8,
    duplicates_allowed: bool,
}

impl GameConfig {
    /// The classic board: 4 pegs, 6 colours, repeats allowed (1296 codes)
    pub const CLASSIC: Self = Self {
        length: 4,
        colours: 6,
        duplicates_allowed: true,
    };

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the length or colour count is zero, or if
    /// duplicates are disallowed and there are fewer colours than pegs.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(4, 6, true).unwrap();
    /// assert_eq!(config.space_size(), Some(1296));
    ///
    /// assert!(GameConfig::new(5, 4, false).is_err());
    /// ```
    pub const fn new(
        length: u8,
        colours: u8,
        duplicates_allowed: bool,
    ) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if colours == 0 {
            return Err(ConfigError::ZeroColours);
        }
        if !duplicates_allowed && colours < length {
            return Err(ConfigError::TooFewColours { length, colours });
        }

        Ok(Self {
            length,
            colours,
            duplicates_allowed,
        })
    }

    /// Number of pegs in a code
    #[inline]
    #[must_use]
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// Number of available colours
    #[inline]
    #[must_use]
    pub const fn colours(&self) -> u8 {
        self.colours
    }

    /// Whether a code may use the same colour more than once
    #[inline]
    #[must_use]
    pub const fn duplicates_allowed(&self) -> bool {
        self.duplicates_allowed
    }

    /// Number of legal codes, or `None` if it does not fit in `usize`
    ///
    /// `colours^length` with repeats, otherwise the number of ordered
    /// arrangements `colours! / (colours - length)!`.
    #[must_use]
    pub fn space_size(&self) -> Option<usize> {
        let colours = usize::from(self.colours);
        if self.duplicates_allowed {
            colours.checked_pow(u32::from(self.length))
        } else {
            (0..usize::from(self.length)).try_fold(1usize, |acc, i| acc.checked_mul(colours - i))
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pegs, {} colours, {}",
            self.length,
            self.colours,
            if self.duplicates_allowed {
                "repeats allowed"
            } else {
                "no repeats"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_is_default() {
        let config = GameConfig::default();
        assert_eq!(config, GameConfig::CLASSIC);
        assert_eq!(config.length(), 4);
        assert_eq!(config.colours(), 6);
        assert!(config.duplicates_allowed());
    }

    #[test]
    fn rejects_zero_length() {
        assert_eq!(GameConfig::new(0, 6, true), Err(ConfigError::ZeroLength));
    }

    #[test]
    fn rejects_zero_colours() {
        assert_eq!(GameConfig::new(4, 0, true), Err(ConfigError::ZeroColours));
    }

    #[test]
    fn rejects_too_few_colours_without_repeats() {
        assert_eq!(
            GameConfig::new(5, 4, false),
            Err(ConfigError::TooFewColours {
                length: 5,
                colours: 4
            })
        );
        // Repeats make the same sizes legal
        assert!(GameConfig::new(5, 4, true).is_ok());
        // Exactly enough colours is fine
        assert!(GameConfig::new(4, 4, false).is_ok());
    }

    #[test]
    fn space_size_with_repeats() {
        let config = GameConfig::new(4, 6, true).unwrap();
        assert_eq!(config.space_size(), Some(1296));

        let config = GameConfig::new(1, 1, true).unwrap();
        assert_eq!(config.space_size(), Some(1));
    }

    #[test]
    fn space_size_without_repeats() {
        // 6 * 5 * 4 * 3
        let config = GameConfig::new(4, 6, false).unwrap();
        assert_eq!(config.space_size(), Some(360));

        // 4!
        let config = GameConfig::new(4, 4, false).unwrap();
        assert_eq!(config.space_size(), Some(24));
    }

    #[test]
    fn space_size_overflow_is_none() {
        let config = GameConfig::new(200, 200, true).unwrap();
        assert_eq!(config.space_size(), None);
    }

    #[test]
    fn display_mentions_repeat_policy() {
        assert_eq!(
            GameConfig::CLASSIC.to_string(),
            "4 pegs, 6 colours, repeats allowed"
        );
        assert_eq!(
            GameConfig::new(3, 5, false).unwrap().to_string(),
            "3 pegs, 5 colours, no repeats"
        );
    }
}
