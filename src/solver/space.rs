//! The universe of legal codes
//!
//! Enumerated once per configuration and shared, read-only, by every strategy
//! that needs it.

use crate::core::{CodeWord, ConfigError, GameConfig};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Every legal code for a configuration, in lexicographic order
///
/// Never empty: a validated `GameConfig` always has at least one legal code.
/// Cloning is cheap: the codes live behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CodeSpace {
    config: GameConfig,
    codes: Arc<[CodeWord]>,
}

impl CodeSpace {
    /// Largest space that will be materialised
    pub const MAX_SIZE: usize = 1 << 22;

    /// Enumerate all codes for `config`
    ///
    /// All `colours^length` sequences when repeats are allowed, otherwise all
    /// arrangements of distinct colours.
    ///
    /// # Errors
    /// Returns `ConfigError::SpaceTooLarge` if the space exceeds
    /// [`CodeSpace::MAX_SIZE`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    /// use mastermind_solver::solver::CodeSpace;
    ///
    /// let space = CodeSpace::enumerate(GameConfig::CLASSIC).unwrap();
    /// assert_eq!(space.len(), 1296);
    /// assert_eq!(space.codes()[0].pegs(), &[1, 1, 1, 1]);
    /// ```
    pub fn enumerate(config: GameConfig) -> Result<Self, ConfigError> {
        let size = config
            .space_size()
            .filter(|&size| size <= Self::MAX_SIZE)
            .ok_or(ConfigError::SpaceTooLarge {
                length: config.length(),
                colours: config.colours(),
                limit: Self::MAX_SIZE,
            })?;

        let mut codes = Vec::with_capacity(size);
        let mut prefix = Vec::with_capacity(usize::from(config.length()));
        let mut used = vec![false; usize::from(config.colours()) + 1];
        extend(config, &mut prefix, &mut used, &mut codes);

        log::debug!("enumerated {} codes for {config}", codes.len());

        Ok(Self {
            config,
            codes: codes.into(),
        })
    }

    /// Configuration this space was built for
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All codes, sorted
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[CodeWord] {
        &self.codes
    }

    /// Number of codes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false, see [`CodeSpace`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Check if `code` is a legal code of this space
    #[must_use]
    pub fn contains(&self, code: &CodeWord) -> bool {
        self.codes.binary_search(code).is_ok()
    }
}

/// Depth-first enumeration in lexicographic order
fn extend(config: GameConfig, prefix: &mut Vec<u8>, used: &mut [bool], out: &mut Vec<CodeWord>) {
    if prefix.len() == usize::from(config.length()) {
        out.push(CodeWord::from(prefix.clone()));
        return;
    }

    for colour in 1..=config.colours() {
        let slot = usize::from(colour);
        if !config.duplicates_allowed() && used[slot] {
            continue;
        }
        used[slot] = true;
        prefix.push(colour);
        extend(config, prefix, used, out);
        prefix.pop();
        used[slot] = false;
    }
}

/// Draw a uniformly random legal code without enumerating the space
///
/// # Examples
/// ```
/// use mastermind_solver::core::GameConfig;
/// use mastermind_solver::solver::random_code;
///
/// let config = GameConfig::new(4, 6, false).unwrap();
/// let code = random_code(&config, &mut rand::rng());
/// assert!(code.check(&config).is_ok());
/// ```
pub fn random_code<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> CodeWord {
    let length = usize::from(config.length());

    if config.duplicates_allowed() {
        (0..length)
            .map(|_| rng.random_range(1..=config.colours()))
            .collect()
    } else {
        let mut palette: Vec<u8> = (1..=config.colours()).collect();
        let (picked, _) = palette.partial_shuffle(rng, length);
        picked.iter().copied().collect()
    }
}
