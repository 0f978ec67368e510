use word_gauntlet::*;

use std::io::Cursor;
use std::io::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

#[test]
fn word_corpus_from_reader_keeps_only_words_of_the_given_length() -> Result<()> {
    let cursor = Cursor::new(String::from("\n\narose\n proxy\nabide\nan\ntoolong\n"));

    let corpus = WordCorpus::from_reader(cursor, 5)?;

    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.word_length(), 5);
    assert_arc_eq!(&corpus, &["arose", "proxy", "abide"]);
    Ok(())
}

#[test]
fn word_corpus_from_reader_lowercases() -> Result<()> {
    let cursor = Cursor::new(String::from("AROSE\nProxy\n"));

    let corpus = WordCorpus::from_reader(cursor, 5)?;

    assert_arc_eq!(&corpus, &["arose", "proxy"]);
    Ok(())
}

#[test]
fn word_corpus_from_iterator_applies_the_same_normalization() {
    let corpus = WordCorpus::from_iterator(vec!["", "arose", " Proxy ", "an"], 5);

    assert_eq!(corpus.len(), 2);
    assert_arc_eq!(&corpus, &["arose", "proxy"]);
}

#[test]
fn word_corpus_empty() {
    let corpus = WordCorpus::from_iterator(Vec::<&str>::new(), 5);

    assert!(corpus.is_empty());
    assert_eq!(corpus.len(), 0);
}

#[test]
fn letter_counts_are_document_frequencies() {
    let counts = LetterCounts::from_words(&["arose", "proxy", "abide"]);

    // 'a' appears in two words, 'o' in two, 'x' in one.
    assert_eq!(counts.num_words_with_letter('a'), 2);
    assert_eq!(counts.num_words_with_letter('o'), 2);
    assert_eq!(counts.num_words_with_letter('x'), 1);
    assert_eq!(counts.num_words_with_letter('z'), 0);
}
