//! Feedback tiles and the feedback simulator
//!
//! Feedback is the per-position coloring the game shows for a guess:
//! gray (letter absent), yellow (present elsewhere), green (correct
//! position). It is written as a 5-character string over `x`/`y`/`g`.

use super::word::{WORD_LEN, Word};

/// Color of a single feedback tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Letter absent (after greens/yellows for it are consumed)
    Gray,
    /// Letter present at a different position
    Yellow,
    /// Letter correct at this position
    Green,
}

impl Tile {
    /// The symbol used in textual feedback
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Gray => 'x',
            Self::Yellow => 'y',
            Self::Green => 'g',
        }
    }
}

/// Error type for malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl std::fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LEN} tiles, got {len}")
            }
            Self::InvalidSymbol(c) => {
                write!(f, "Unrecognized tile symbol '{c}' (expected x, y, or g)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for one guess: five tiles, positionally aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Tile; WORD_LEN]);

impl Feedback {
    /// All greens (solved)
    pub const WIN: Self = Self([Tile::Green; WORD_LEN]);

    /// Create feedback from a tile array
    #[must_use]
    pub const fn from_tiles(tiles: [Tile; WORD_LEN]) -> Self {
        Self(tiles)
    }

    /// Get the tiles
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.0
    }

    /// Check whether every tile is green
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&t| t == Tile::Green)
    }

    /// Count the green tiles
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Green).count()
    }

    /// Count the yellow tiles
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&t| t == Tile::Yellow).count()
    }

    /// Simulate the feedback the game would show for `guess` if the
    /// solution were `solution`
    ///
    /// Implements the game's exact rules, including duplicate letters:
    ///
    /// 1. Green pass: exact position matches, each consuming one
    ///    occurrence of the letter from the solution's letter counts.
    /// 2. Yellow pass: non-green positions whose letter still has an
    ///    unconsumed occurrence become yellow and consume it; the rest
    ///    stay gray.
    ///
    /// Each letter occurrence in the solution is attributed to at most
    /// one tile, so a guess never earns more colored tiles for a letter
    /// than the solution holds.
    ///
    /// # Examples
    /// ```
    /// use wordle_expectation::core::{Feedback, Word};
    ///
    /// let guess = Word::new("raise").unwrap();
    /// let solution = Word::new("arise").unwrap();
    /// let feedback = Feedback::simulate(&guess, &solution);
    /// assert_eq!(feedback.to_string(), "yyggg");
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, solution: &Word) -> Self {
        let mut tiles = [Tile::Gray; WORD_LEN];
        let mut available = solution.letter_counts();

        // First pass: greens consume their occurrence so it cannot also
        // satisfy a yellow elsewhere
        for i in 0..WORD_LEN {
            if guess.letter_at(i) == solution.letter_at(i) {
                tiles[i] = Tile::Green;
                if let Some(count) = available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from whatever occurrences remain
        for i in 0..WORD_LEN {
            if tiles[i] == Tile::Gray {
                let letter = guess.letter_at(i);
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    tiles[i] = Tile::Yellow;
                    *count -= 1;
                }
            }
        }

        Self(tiles)
    }

    /// Parse feedback from a 5-character string over `x`/`y`/`g`
    ///
    /// Case-insensitive. Malformed input is rejected here, before any
    /// filtering can see it.
    ///
    /// # Errors
    /// `FeedbackError::InvalidLength` if the string is not exactly 5
    /// characters, `FeedbackError::InvalidSymbol` on any character
    /// outside the three tile symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_expectation::core::Feedback;
    ///
    /// let feedback: Feedback = "xygxg".parse().unwrap();
    /// assert_eq!(feedback.to_string(), "xygxg");
    /// assert!("xyg".parse::<Feedback>().is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut tiles = [Tile::Gray; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            tiles[i] = match ch {
                'x' | 'X' => Tile::Gray,
                'y' | 'Y' => Tile::Yellow,
                'g' | 'G' => Tile::Green,
                other => return Err(FeedbackError::InvalidSymbol(other)),
            };
        }

        Ok(Self(tiles))
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.symbol())?;
        }
        Ok(())
    }
}
