//! Word scoring and ranking.
//!
//! A corpus is scored and ranked exactly once, up front; strategies then borrow the
//! resulting [`RankedCorpus`] instead of each rebuilding their own ordering.

use crate::data::LetterCounts;
use crate::data::WordCorpus;
use std::sync::Arc;

/// Gives words a score, where the maximum score indicates the best guess.
pub trait WordScorer {
    /// Determines a score for the given word. The higher the score, the better the guess.
    fn score_word(&self, word: &str) -> i64;
}

/// Scores a word by summing, over its distinct letters, the number of corpus words that
/// contain that letter. A repeated letter contributes only once.
#[derive(Clone, Debug)]
pub struct LetterFrequencyScorer {
    counts: LetterCounts,
}

impl LetterFrequencyScorer {
    /// Constructs a `LetterFrequencyScorer` by tallying the given word list.
    pub fn new<S: AsRef<str>>(words: &[S]) -> LetterFrequencyScorer {
        LetterFrequencyScorer {
            counts: LetterCounts::from_words(words),
        }
    }

    /// Constructs a `LetterFrequencyScorer` from counts that were already tallied.
    pub fn from_counts(counts: LetterCounts) -> LetterFrequencyScorer {
        LetterFrequencyScorer { counts }
    }
}

impl WordScorer for LetterFrequencyScorer {
    fn score_word(&self, word: &str) -> i64 {
        let mut sum = 0;
        for (index, letter) in word.char_indices() {
            if index > 0
                && word
                    .chars()
                    .take(index)
                    .any(|other_letter| other_letter == letter)
            {
                continue;
            }
            sum += self.counts.num_words_with_letter(letter) as i64;
        }
        sum
    }
}

/// Sorts the given words by descending score, breaking ties by ascending lexicographic
/// order.
///
/// The comparison is a total order, so ranking the same words under the same scorer
/// yields the same sequence no matter how the input was ordered.
pub fn rank_words<S: WordScorer>(words: &[Arc<str>], scorer: &S) -> Vec<Arc<str>> {
    let mut ranked: Vec<Arc<str>> = words.iter().map(Arc::clone).collect();
    ranked.sort_unstable_by(|a, b| {
        scorer
            .score_word(b)
            .cmp(&scorer.score_word(a))
            .then_with(|| a.cmp(b))
    });
    ranked
}

/// A corpus ranked by [`LetterFrequencyScorer`], together with the letter counts that
/// ranked it.
///
/// This is immutable once built. Every strategy instance in an evaluation borrows the
/// same ranking, so games can run in parallel against shared read-only data.
#[derive(Clone, Debug)]
pub struct RankedCorpus {
    words: Vec<Arc<str>>,
    letter_counts: LetterCounts,
}

impl RankedCorpus {
    pub fn new(corpus: &WordCorpus) -> RankedCorpus {
        let letter_counts = LetterCounts::from_words(&**corpus);
        let scorer = LetterFrequencyScorer::from_counts(letter_counts.clone());
        RankedCorpus {
            words: rank_words(corpus, &scorer),
            letter_counts,
        }
    }

    /// The corpus in rank order, best guess first.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    pub fn letter_counts(&self) -> &LetterCounts {
        &self.letter_counts
    }
}
