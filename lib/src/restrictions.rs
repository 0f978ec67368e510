use crate::results::FeedbackMark;
use crate::results::MarkColor;
use std::collections::HashSet;
use std::sync::Arc;

/// A letter along with its position in a guess.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionedLetter {
    pub letter: char,
    /// The zero-based position (i.e. index) for this letter in a word.
    pub position: u8,
}

impl PositionedLetter {
    pub fn new(letter: char, position: u8) -> PositionedLetter {
        PositionedLetter { letter, position }
    }
}

/// Constraints that a candidate word must satisfy, accumulated from feedback marks.
///
/// An `Absent` mark excludes its letter from the whole word, not just from the marked
/// position. A guess that reuses one of the secret's repeated letters can therefore mark
/// the same letter both absent and present, leaving the constraints jointly
/// unsatisfiable; filtering then yields no candidates, which is a legitimate result
/// rather than an error.
#[derive(Clone, Debug, Default)]
pub struct WordConstraints {
    /// Letters that must occur at specific positions.
    must_be_at: HashSet<PositionedLetter>,
    /// Letters that must occur somewhere in the word, but not at the marked position.
    present_elsewhere: HashSet<PositionedLetter>,
    /// Letters that must not occur anywhere in the word.
    excluded: HashSet<char>,
}

impl WordConstraints {
    /// Creates a new empty `WordConstraints` struct.
    pub fn new() -> WordConstraints {
        WordConstraints::default()
    }

    /// Collects the constraints imposed by every mark in the given sequence.
    pub fn from_marks<'a, I>(marks: I) -> WordConstraints
    where
        I: IntoIterator<Item = &'a FeedbackMark>,
    {
        let mut constraints = WordConstraints::new();
        for mark in marks {
            constraints.add_mark(mark);
        }
        constraints
    }

    /// Adds the constraint imposed by a single mark.
    pub fn add_mark(&mut self, mark: &FeedbackMark) {
        match mark.color {
            MarkColor::Exact => {
                self.must_be_at
                    .insert(PositionedLetter::new(mark.letter, mark.position));
            }
            MarkColor::Present => {
                self.present_elsewhere
                    .insert(PositionedLetter::new(mark.letter, mark.position));
            }
            MarkColor::Absent => {
                self.excluded.insert(mark.letter);
            }
        }
    }

    /// Returns `true` iff the given word satisfies these constraints.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        self.must_be_at
            .iter()
            .all(|pl| word.chars().nth(pl.position as usize) == Some(pl.letter))
            && self.present_elsewhere.iter().all(|pl| {
                word.chars().nth(pl.position as usize) != Some(pl.letter)
                    && word.contains(pl.letter)
            })
            && !self
                .excluded
                .iter()
                .any(|letter| word.contains(*letter))
    }
}

/// Narrows the given words down to those satisfying the constraints, preserving their
/// relative order.
///
/// With no constraints this is the identity, so filtering a pre-ranked list keeps its
/// ranking. The result is recomputed from scratch on every call.
pub fn filter_candidates(words: &[Arc<str>], constraints: &WordConstraints) -> Vec<Arc<str>> {
    words
        .iter()
        .filter_map(|word| {
            if constraints.is_satisfied_by(word) {
                return Some(Arc::clone(word));
            }
            None
        })
        .collect()
}

#[cfg(test)]
mod tests {

    use super::*;

    fn arc_vec(words: Vec<&str>) -> Vec<Arc<str>> {
        words.iter().map(|word| Arc::from(*word)).collect()
    }

    fn mark(letter: char, position: u8, color: MarkColor) -> FeedbackMark {
        FeedbackMark {
            letter,
            position,
            color,
        }
    }

    #[test]
    fn filter_candidates_no_marks_is_identity() {
        let words = arc_vec(vec!["worda", "wordb", "other", "smore"]);

        let still_possible = filter_candidates(&words, &WordConstraints::new());

        assert_eq!(still_possible, words);
    }

    #[test]
    fn filter_candidates_exact() {
        let words = arc_vec(vec!["worda", "wordb", "other", "smore"]);
        let constraints = WordConstraints::from_marks(&[
            mark('o', 1, MarkColor::Exact),
            mark('b', 4, MarkColor::Exact),
        ]);

        let still_possible = filter_candidates(&words, &constraints);

        assert_eq!(still_possible, arc_vec(vec!["wordb"]));
    }

    #[test]
    fn filter_candidates_present_not_at_marked_position() {
        let words = arc_vec(vec!["worda", "wordb", "other", "smore"]);
        let constraints = WordConstraints::from_marks(&[mark('o', 0, MarkColor::Present)]);

        let still_possible = filter_candidates(&words, &constraints);

        assert_eq!(still_possible, arc_vec(vec!["worda", "wordb", "smore"]));
    }

    #[test]
    fn filter_candidates_absent_excludes_whole_word() {
        let words = arc_vec(vec!["worda", "wordb", "other", "smore"]);
        let constraints = WordConstraints::from_marks(&[mark('w', 3, MarkColor::Absent)]);

        let still_possible = filter_candidates(&words, &constraints);

        assert_eq!(still_possible, arc_vec(vec!["other", "smore"]));
    }

    #[test]
    fn filter_candidates_extra_mark_never_grows_result() {
        let words = arc_vec(vec!["worda", "wordb", "other", "smore"]);
        let mut constraints = WordConstraints::from_marks(&[mark('o', 0, MarkColor::Present)]);
        let before = filter_candidates(&words, &constraints);

        constraints.add_mark(&mark('b', 4, MarkColor::Absent));
        let after = filter_candidates(&words, &constraints);

        assert!(after.len() <= before.len());
        assert_eq!(after, arc_vec(vec!["worda", "smore"]));
    }

    #[test]
    fn filter_candidates_contradictory_marks_empty_result() {
        let words = arc_vec(vec!["worda", "wordb", "other", "smore"]);
        // The same letter marked absent and present cannot be satisfied by any word.
        let constraints = WordConstraints::from_marks(&[
            mark('o', 0, MarkColor::Absent),
            mark('o', 2, MarkColor::Present),
        ]);

        assert!(filter_candidates(&words, &constraints).is_empty());
    }

    #[test]
    fn filter_candidates_preserves_input_order() {
        let words = arc_vec(vec!["smore", "other", "wordb", "worda"]);
        let constraints = WordConstraints::from_marks(&[mark('b', 4, MarkColor::Absent)]);

        let still_possible = filter_candidates(&words, &constraints);

        assert_eq!(still_possible, arc_vec(vec!["smore", "other", "worda"]));
    }
}
