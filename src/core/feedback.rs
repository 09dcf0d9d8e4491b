//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair of peg counts a board returns for a guess:
//! - exact: right colour in the right position (black peg)
//! - colour-only: right colour in the wrong position (white peg)

use super::CodeWord;
use std::fmt;

/// Peg feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Feedback {
    exact: u8,
    colour_only: u8,
}

impl Feedback {
    /// Peg value for an exact match in the board's peg-list form
    pub const EXACT_PEG: u8 = 1;
    /// Peg value for a colour-only match in the board's peg-list form
    pub const COLOUR_PEG: u8 = 2;

    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, colour_only: u8) -> Self {
        Self { exact, colour_only }
    }

    /// Feedback for a guess that equals the secret
    #[inline]
    #[must_use]
    pub const fn perfect(length: u8) -> Self {
        Self::new(length, 0)
    }

    /// Right colour, right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Right colour, wrong position
    #[inline]
    #[must_use]
    pub const fn colour_only(self) -> u8 {
        self.colour_only
    }

    /// Check if every peg is an exact match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: u8) -> bool {
        self.exact == length
    }

    /// Check the counts could come from a code of `length` pegs
    #[inline]
    #[must_use]
    pub const fn fits(self, length: u8) -> bool {
        self.exact as u16 + self.colour_only as u16 <= length as u16
    }

    /// Dense index of this feedback among all feedback for `length` pegs
    ///
    /// Indices are unique and below [`Feedback::slots`]`(length)`.
    #[inline]
    #[must_use]
    pub const fn index(self, length: usize) -> usize {
        self.exact as usize * (length + 1) + self.colour_only as usize
    }

    /// Size of the dense index range for `length` pegs
    #[inline]
    #[must_use]
    pub const fn slots(length: usize) -> usize {
        (length + 1) * (length + 1)
    }

    /// Calculate the feedback when `guess` is played against `code`
    ///
    /// Handles repeated colours correctly:
    /// 1. First pass: count exact matches and remove them from both sides
    /// 2. Second pass: for each remaining guess peg, take one matching peg
    ///    from the remaining code pegs if any is left
    ///
    /// The result is symmetric in its two arguments.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{CodeWord, Feedback};
    ///
    /// let secret = CodeWord::from([1, 2, 3, 4]);
    /// let guess = CodeWord::from([1, 1, 2, 2]);
    ///
    /// // One exact (first peg), one colour-only (a single 2)
    /// assert_eq!(Feedback::score(&guess, &secret), Feedback::new(1, 1));
    /// ```
    #[must_use]
    pub fn score(guess: &CodeWord, code: &CodeWord) -> Self {
        Self::score_pegs(guess.pegs(), code.pegs())
    }

    /// Slice form of [`Feedback::score`]
    #[must_use]
    pub fn score_pegs(guess: &[u8], code: &[u8]) -> Self {
        debug_assert_eq!(guess.len(), code.len(), "codes must have equal length");

        let mut exact = 0u8;
        let mut code_remaining = [0u8; 256];

        // First pass: exact matches are consumed, the rest of the code is pooled
        for (&g, &c) in guess.iter().zip(code) {
            if g == c {
                exact += 1;
            } else {
                code_remaining[usize::from(c)] += 1;
            }
        }

        // Second pass: unconsumed guess pegs draw from the pool
        let mut colour_only = 0u8;
        for (&g, &c) in guess.iter().zip(code) {
            if g != c {
                let count = &mut code_remaining[usize::from(g)];
                if *count > 0 {
                    *count -= 1;
                    colour_only += 1;
                }
            }
        }

        Self { exact, colour_only }
    }

    /// Build feedback from the board's peg list (`1` exact, `2` colour-only)
    ///
    /// Returns `None` if the list contains any other value.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// let feedback = Feedback::from_pegs(&[1, 1, 2]).unwrap();
    /// assert_eq!(feedback, Feedback::new(2, 1));
    /// assert_eq!(feedback.to_pegs(), vec![1, 1, 2]);
    /// ```
    #[must_use]
    pub fn from_pegs(pegs: &[u8]) -> Option<Self> {
        let mut feedback = Self::default();
        for &peg in pegs {
            match peg {
                Self::EXACT_PEG => feedback.exact = feedback.exact.checked_add(1)?,
                Self::COLOUR_PEG => feedback.colour_only = feedback.colour_only.checked_add(1)?,
                _ => return None,
            }
        }
        Some(feedback)
    }

    /// Convert to the board's peg list, exact pegs first
    #[must_use]
    pub fn to_pegs(self) -> Vec<u8> {
        let exact = std::iter::repeat_n(Self::EXACT_PEG, usize::from(self.exact));
        let colour = std::iter::repeat_n(Self::COLOUR_PEG, usize::from(self.colour_only));
        exact.chain(colour).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.exact, self.colour_only)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse `exact,colour_only`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid feedback string: {s}");
        let (exact, colour_only) = s.split_once(',').ok_or_else(invalid)?;
        let exact = exact.trim().parse().map_err(|_| invalid())?;
        let colour_only = colour_only.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(exact, colour_only))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(guess: &[u8], code: &[u8]) -> Feedback {
        Feedback::score_pegs(guess, code)
    }

    #[test]
    fn worked_example() {
        // Secret 1234, guess 1122: the first 1 is exact, the leftover 1 is
        // absent, one 2 matches and the second 2 finds nothing left.
        assert_eq!(score(&[1, 1, 2, 2], &[1, 2, 3, 4]), Feedback::new(1, 1));
    }

    #[test]
    fn all_exact() {
        let code = CodeWord::from([3, 1, 4, 1]);
        assert_eq!(Feedback::score(&code, &code), Feedback::perfect(4));
        assert!(Feedback::score(&code, &code).is_perfect(4));
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(score(&[1, 1, 2, 2], &[3, 4, 5, 6]), Feedback::new(0, 0));
    }

    #[test]
    fn all_colour_only() {
        assert_eq!(score(&[1, 2, 3, 4], &[4, 3, 2, 1]), Feedback::new(0, 4));
    }

    #[test]
    fn repeated_guess_colour_not_over_counted() {
        // A naive "is this colour anywhere in the code" test would give 0,4
        assert_eq!(score(&[1, 1, 1, 1], &[1, 2, 3, 4]), Feedback::new(1, 0));
        assert_eq!(score(&[2, 2, 1, 1], &[1, 2, 3, 4]), Feedback::new(1, 1));
    }

    #[test]
    fn repeated_code_colour_not_over_counted() {
        assert_eq!(score(&[1, 2, 3, 4], &[4, 4, 4, 4]), Feedback::new(1, 0));
        assert_eq!(score(&[5, 5, 6, 6], &[6, 6, 5, 1]), Feedback::new(0, 3));
    }

    #[test]
    fn exact_match_takes_priority() {
        // The 2 in position 1 is exact and must not also feed the other 2
        assert_eq!(score(&[2, 2, 3, 3], &[1, 2, 1, 1]), Feedback::new(1, 0));
    }

    #[test]
    fn peg_list_conversion() {
        assert_eq!(Feedback::from_pegs(&[]), Some(Feedback::new(0, 0)));
        assert_eq!(Feedback::from_pegs(&[2, 1, 2]), Some(Feedback::new(1, 2)));
        assert_eq!(Feedback::from_pegs(&[1, 3]), None);
        assert_eq!(Feedback::from_pegs(&[1; 256]), None);
        assert_eq!(Feedback::new(2, 1).to_pegs(), vec![1, 1, 2]);
        assert!(Feedback::new(0, 0).to_pegs().is_empty());
    }

    #[test]
    fn fits_length() {
        assert!(Feedback::new(2, 2).fits(4));
        assert!(Feedback::new(4, 0).fits(4));
        assert!(!Feedback::new(3, 2).fits(4));
        assert!(!Feedback::new(255, 255).fits(255));
    }

    #[test]
    fn dense_index_is_unique() {
        let length = 4;
        let mut seen = vec![false; Feedback::slots(length)];
        for exact in 0..=4u8 {
            for colour_only in 0..=(4 - exact) {
                let index = Feedback::new(exact, colour_only).index(length);
                assert!(!seen[index], "index {index} used twice");
                seen[index] = true;
            }
        }
    }

    #[test]
    fn display_and_parse() {
        let feedback = Feedback::new(2, 1);
        assert_eq!(feedback.to_string(), "2,1");
        assert_eq!("2,1".parse::<Feedback>(), Ok(feedback));
        assert_eq!(" 2 , 1 ".parse::<Feedback>(), Ok(feedback));
        assert!("21".parse::<Feedback>().is_err());
        assert!("a,1".parse::<Feedback>().is_err());
    }

    fn code_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
        (1usize..=6).prop_flat_map(|len| {
            (
                prop::collection::vec(1u8..=8, len),
                prop::collection::vec(1u8..=8, len),
            )
        })
    }

    proptest! {
        #[test]
        fn counts_are_bounded((guess, code) in code_pair()) {
            let feedback = score(&guess, &code);
            let length = guess.len() as u8;
            prop_assert!(feedback.exact() <= length);
            prop_assert!(feedback.fits(length));
        }

        #[test]
        fn self_score_is_perfect((code, _) in code_pair()) {
            let length = code.len() as u8;
            prop_assert_eq!(score(&code, &code), Feedback::perfect(length));
        }

        #[test]
        fn score_is_symmetric((a, b) in code_pair()) {
            prop_assert_eq!(score(&a, &b), score(&b, &a));
        }

        #[test]
        fn matches_multiset_definition((guess, code) in code_pair()) {
            let exact = guess.iter().zip(&code).filter(|(g, c)| g == c).count();
            let common: usize = (1u8..=8)
                .map(|colour| {
                    let in_guess = guess.iter().filter(|&&g| g == colour).count();
                    let in_code = code.iter().filter(|&&c| c == colour).count();
                    in_guess.min(in_code)
                })
                .sum();

            let feedback = score(&guess, &code);
            prop_assert_eq!(usize::from(feedback.exact()), exact);
            prop_assert_eq!(usize::from(feedback.colour_only()), common - exact);
        }
    }
}
