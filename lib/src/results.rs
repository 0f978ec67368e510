use std::error::Error;
use std::fmt;
use std::iter::zip;
use std::sync::Arc;

/// The classification of a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkColor {
    /// The right letter in the right position.
    Exact,
    /// The letter occurs somewhere in the secret, but not at this position.
    Present,
    /// The letter does not occur anywhere in the secret.
    Absent,
}

/// One letter of a guess along with where it was and how it was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedbackMark {
    pub letter: char,
    /// The zero-based position (i.e. index) of this letter in the guess.
    pub position: u8,
    pub color: MarkColor,
}

/// A guessed word together with the feedback it earned, one mark per position in guess
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guess {
    pub word: Arc<str>,
    pub feedback: Vec<FeedbackMark>,
}

/// The final state of a single game. Produced once, when the game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOutcome {
    pub secret: Arc<str>,
    pub won: bool,
    pub turns_used: u32,
    /// Every guess of the game, in the order they were played.
    pub guesses: Vec<Guess>,
}

/// Indicates that an error occurred while choosing or recording a guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameError {
    /// Indicates that no word is consistent with the accumulated feedback.
    NoCandidate,
    /// Indicates that a textual feedback mask had the wrong length or a character outside
    /// `b`, `y` and `g`.
    InvalidMask,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NoCandidate => {
                write!(f, "no candidate word is consistent with the accumulated feedback")
            }
            GameError::InvalidMask => {
                write!(
                    f,
                    "feedback masks must use only the letters 'b', 'y' and 'g', one per position"
                )
            }
        }
    }
}

impl Error for GameError {}

/// Determines the feedback for the given `guess` when played against `secret`.
///
/// A letter is marked `Present` whenever it occurs anywhere in the secret, with no
/// budgeting of repeated letters: a guess that repeats one of the secret's letters can
/// earn more `Present`/`Exact` marks for it than the secret has copies. Candidate
/// filtering assumes exactly this rule, so the two must only ever change together.
///
/// `secret` and `guess` must have the same length.
pub fn get_feedback_for_guess(secret: &str, guess: &str) -> Vec<FeedbackMark> {
    debug_assert_eq!(secret.len(), guess.len());
    guess
        .char_indices()
        .map(|(position, letter)| {
            let color = if secret.chars().nth(position) == Some(letter) {
                MarkColor::Exact
            } else if secret.contains(letter) {
                MarkColor::Present
            } else {
                MarkColor::Absent
            };
            FeedbackMark {
                letter,
                position: position as u8,
                color,
            }
        })
        .collect()
}

/// Builds the feedback marks encoded by a textual mask, for manual entry.
///
/// The mask pairs positionally with `guess`: `b` marks the letter absent, `y` present and
/// `g` exact, so `"bygbb"` grades the second letter present and the third exact.
pub fn parse_feedback_mask(guess: &str, mask: &str) -> Result<Vec<FeedbackMark>, GameError> {
    if mask.len() != guess.len() {
        return Err(GameError::InvalidMask);
    }
    zip(guess.char_indices(), mask.chars())
        .map(|((position, letter), mask_char)| {
            let color = match mask_char {
                'b' => MarkColor::Absent,
                'y' => MarkColor::Present,
                'g' => MarkColor::Exact,
                _ => return Err(GameError::InvalidMask),
            };
            Ok(FeedbackMark {
                letter,
                position: position as u8,
                color,
            })
        })
        .collect()
}

/// Renders feedback marks back into the textual `b`/`y`/`g` mask alphabet.
pub fn feedback_to_mask(marks: &[FeedbackMark]) -> String {
    marks
        .iter()
        .map(|mark| match mark.color {
            MarkColor::Absent => 'b',
            MarkColor::Present => 'y',
            MarkColor::Exact => 'g',
        })
        .collect()
}
