use std::sync::Arc;

use tracing::debug;

use crate::similarity::{self, DEFAULT_CUTOFF, DEFAULT_MAX};
use crate::vocabulary::Vocabulary;

/// A near match offered when a word has no senses. Selecting it re-submits
/// `word` as a new query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suggestion {
    pub word : String
}

impl Suggestion {
    pub fn new(word : &str) -> Suggestion {
        Suggestion { word : word.to_string() }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    vocabulary : Arc<Vocabulary>,
    cutoff : f64,
    max : usize,
    prefix_len : usize
}

impl SuggestionEngine {
    pub fn new(vocabulary : Arc<Vocabulary>) -> SuggestionEngine {
        SuggestionEngine {
            vocabulary,
            cutoff : DEFAULT_CUTOFF,
            max : DEFAULT_MAX,
            prefix_len : 2
        }
    }

    pub fn with_cutoff(mut self, cutoff : f64) -> SuggestionEngine {
        self.cutoff = cutoff;
        self
    }

    pub fn with_max(mut self, max : usize) -> SuggestionEngine {
        self.max = max;
        self
    }

    pub fn with_prefix_len(mut self, prefix_len : usize) -> SuggestionEngine {
        self.prefix_len = prefix_len;
        self
    }

    /// Narrows the vocabulary to entries sharing the (lowercased) leading
    /// characters of `partial_word`, then ranks them by similarity to the
    /// word as typed.
    pub fn suggest(&self, partial_word : &str) -> Vec<Suggestion> {
        if partial_word.is_empty() {
            return Vec::new();
        }
        let prefix : String = partial_word.chars()
            .take(self.prefix_len)
            .collect::<String>()
            .to_lowercase();
        let candidates : Vec<&str> = self.vocabulary.with_prefix(&prefix).collect();
        debug!("{} candidates share prefix {:?}", candidates.len(), prefix);
        if candidates.is_empty() {
            return Vec::new();
        }
        similarity::get_close_matches(partial_word, candidates, self.max, self.cutoff)
            .into_iter()
            .map(Suggestion::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(words : &[&str]) -> SuggestionEngine {
        SuggestionEngine::new(Arc::new(Vocabulary::from_words(words.iter())))
    }

    fn words(s : Vec<Suggestion>) -> Vec<String> {
        s.into_iter().map(|s| s.word).collect()
    }

    #[test]
    fn suggests_typo_fix() {
        let e = engine(&["happy", "happiness", "harp", "dog"]);
        assert_eq!(words(e.suggest("hapy")), vec!["happy", "harp"]);
    }

    #[test]
    fn prefix_filter_excludes_similar_words_with_other_start() {
        // "sappy" is as close to "hapy" as "happy" but starts differently
        let e = engine(&["sappy", "happy"]);
        assert_eq!(words(e.suggest("hapy")), vec!["happy"]);
    }

    #[test]
    fn prefix_is_lowercased_but_ranking_uses_input() {
        let e = engine(&["happy"]);
        assert_eq!(words(e.suggest("HApy")), Vec::<String>::new());
        assert_eq!(words(e.suggest("Hapy")), vec!["happy"]);
    }

    #[test]
    fn short_and_empty_input_do_not_fail() {
        let e = engine(&["a", "ab", "b"]);
        assert!(e.suggest("").is_empty());
        assert_eq!(words(e.suggest("a")), vec!["a", "ab"]);
    }

    #[test]
    fn no_candidates_no_suggestions() {
        let e = engine(&["dog", "cat"]);
        assert!(e.suggest("zzzqx").is_empty());
    }

    #[test]
    fn capped_at_max() {
        let e = engine(&["cat", "cab", "cap", "car", "can"]);
        assert_eq!(e.suggest("caz").len(), 3);
        assert_eq!(e.clone().with_max(1).suggest("caz").len(), 1);
    }
}
