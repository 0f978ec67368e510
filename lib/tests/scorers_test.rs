use word_gauntlet::scorers::*;
use word_gauntlet::*;

use std::sync::Arc;

fn arc_vec(words: Vec<&str>) -> Vec<Arc<str>> {
    words.iter().map(|word| Arc::from(*word)).collect()
}

#[test]
fn letter_frequency_scorer_sums_document_frequencies() {
    let scorer = LetterFrequencyScorer::new(&["arose", "proxy", "abide"]);

    // a=2, r=2, o=2, s=1, e=2.
    assert_eq!(scorer.score_word("arose"), 9);
    // p=1, r=2, o=2, x=1, y=1.
    assert_eq!(scorer.score_word("proxy"), 7);
    // a=2, b=1, i=1, d=1, e=2.
    assert_eq!(scorer.score_word("abide"), 7);
}

#[test]
fn letter_frequency_scorer_counts_repeated_letters_once() {
    let scorer = LetterFrequencyScorer::new(&["llama", "lzzzz"]);

    // l=2, a=1, m=1; the second and third 'l' and 'a' add nothing.
    assert_eq!(scorer.score_word("llama"), 4);
}

#[test]
fn rank_words_descending_score_with_lexicographic_ties() {
    let words = arc_vec(vec!["proxy", "arose", "abide"]);
    let scorer = LetterFrequencyScorer::new(&words);

    let ranked = rank_words(&words, &scorer);

    // "proxy" and "abide" tie at 7, so "abide" sorts first.
    assert_eq!(ranked, arc_vec(vec!["arose", "abide", "proxy"]));
}

#[test]
fn rank_words_is_independent_of_input_order() {
    let words = arc_vec(vec!["proxy", "arose", "abide"]);
    let reversed = arc_vec(vec!["abide", "arose", "proxy"]);
    let scorer = LetterFrequencyScorer::new(&words);

    assert_eq!(rank_words(&words, &scorer), rank_words(&reversed, &scorer));
}

#[test]
fn rank_words_applied_twice_is_identical() {
    let words = arc_vec(vec!["proxy", "arose", "abide"]);
    let scorer = LetterFrequencyScorer::new(&words);

    let once = rank_words(&words, &scorer);
    let twice = rank_words(&once, &scorer);

    assert_eq!(once, twice);
}

#[test]
fn ranked_corpus_precomputes_order_and_counts() {
    let corpus = WordCorpus::from_iterator(vec!["proxy", "arose", "abide"], 5);

    let ranking = RankedCorpus::new(&corpus);

    assert_eq!(
        ranking.words(),
        &arc_vec(vec!["arose", "abide", "proxy"])[..]
    );
    assert_eq!(ranking.letter_counts().num_words_with_letter('a'), 2);
    assert_eq!(ranking.letter_counts().num_words_with_letter('x'), 1);
}
