use std::collections::HashSet;

use tracing::info;

use crate::wordnet::WordNet;

/// Every lemma known to the database. Built once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words : HashSet<String>,
    // (lowercased, original), sorted for prefix ranges
    folded : Vec<(String, String)>
}

impl Vocabulary {
    pub fn from_wordnet(wordnet : &WordNet) -> Vocabulary {
        let vocabulary = Vocabulary::from_words(wordnet.lemmas());
        info!("Indexed {} vocabulary entries", vocabulary.len());
        vocabulary
    }

    pub fn from_words<I, S>(words : I) -> Vocabulary
            where I : IntoIterator<Item = S>, S : AsRef<str> {
        let words : HashSet<String> = words.into_iter()
            .map(|w| w.as_ref().to_string())
            .collect();
        let mut folded : Vec<(String, String)> = words.iter()
            .map(|w| (w.to_lowercase(), w.clone()))
            .collect();
        folded.sort();
        Vocabulary { words, folded }
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word : &str) -> bool {
        let lower = word.to_lowercase();
        self.words.contains(word) || self.range(&lower).iter().any(|(l, _)| *l == lower)
    }

    /// Entries whose lowercase form starts with `prefix` (which must already
    /// be lowercase). An empty prefix matches everything.
    pub fn with_prefix<'a>(&'a self, prefix : &str) -> impl Iterator<Item = &'a str> + 'a {
        self.range(prefix).iter().map(|(_, w)| w.as_str())
    }

    fn range(&self, prefix : &str) -> &[(String, String)] {
        let start = self.folded.partition_point(|(l, _)| l.as_str() < prefix);
        let len = self.folded[start..].partition_point(|(l, _)| l.starts_with(prefix));
        &self.folded[start..start + len]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
