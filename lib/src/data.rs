use std::collections::HashMap;
use std::io::BufRead;
use std::io::Result;
use std::ops::Deref;
use std::sync::Arc;

/// The candidate words for a game, all lower case and all of the same length.
pub struct WordCorpus {
    words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordCorpus {
    /// Constructs a new `WordCorpus` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to
    /// lower case; lines whose length differs from `word_length` are skipped. Any further
    /// normalization is the word-list provider's responsibility.
    pub fn from_reader<R: BufRead>(word_reader: R, word_length: usize) -> Result<Self> {
        Ok(WordCorpus {
            words: word_reader
                .lines()
                .map(|maybe_line| maybe_line.map(|line| line.trim().to_lowercase()))
                .filter(|maybe_word| {
                    maybe_word
                        .as_ref()
                        .map_or(true, |word| word.len() == word_length)
                })
                .map(|maybe_word| maybe_word.map(|word| Arc::from(word.as_str())))
                .collect::<Result<Vec<Arc<str>>>>()?,
            word_length,
        })
    }

    /// Constructs a new `WordCorpus` from the given words, applying the same normalization
    /// as [`WordCorpus::from_reader`].
    pub fn from_iterator<S, I>(words: I, word_length: usize) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordCorpus {
            words: words
                .into_iter()
                .filter_map(|word| {
                    let word = word.as_ref().trim().to_lowercase();
                    if word.len() != word_length {
                        return None;
                    }
                    Some(Arc::from(word.as_str()))
                })
                .collect(),
            word_length,
        }
    }

    /// The length every word in this corpus has.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Deref for WordCorpus {
    type Target = [Arc<str>];

    fn deref(&self) -> &[Arc<str>] {
        &self.words
    }
}

/// Counts, per letter, how many words contain that letter.
///
/// A letter that repeats within one word still counts that word once, so the count is a
/// document frequency rather than an occurrence count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterCounts {
    num_words_by_letter: HashMap<char, u32>,
}

impl LetterCounts {
    /// Tallies the letters of the given word list.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> LetterCounts {
        let mut num_words_by_letter: HashMap<char, u32> = HashMap::new();
        for word in words {
            let word = word.as_ref();
            for (index, letter) in word.char_indices() {
                if index == 0
                    || word
                        .chars()
                        .take(index)
                        .all(|other_letter| other_letter != letter)
                {
                    *num_words_by_letter.entry(letter).or_insert(0) += 1;
                }
            }
        }
        LetterCounts { num_words_by_letter }
    }

    /// Retrieves the count of words that contain the given letter.
    pub fn num_words_with_letter(&self, letter: char) -> u32 {
        *self.num_words_by_letter.get(&letter).unwrap_or(&0)
    }
}
