use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::format::{format_senses, EntryFormatter};
use crate::provision::provision;
use crate::suggest::{Suggestion, SuggestionEngine};
use crate::vocabulary::Vocabulary;
use crate::wordnet::WordNet;

/// The outcome of one search, owned by whoever renders it.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Resolved {
        word : String,
        lines : Vec<String>
    },
    /// `suggestions` is empty when nothing came close.
    Unresolved {
        word : String,
        message : String,
        suggestions : Vec<Suggestion>
    }
}

impl QueryResult {
    pub fn is_resolved(&self) -> bool {
        matches!(self, QueryResult::Resolved { .. })
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            QueryResult::Resolved { .. } => &[],
            QueryResult::Unresolved { suggestions, .. } => suggestions
        }
    }

    /// Plain text lines for display; suggestions are numbered from 1.
    pub fn lines(&self) -> Vec<String> {
        match self {
            QueryResult::Resolved { lines, .. } => lines.clone(),
            QueryResult::Unresolved { message, suggestions, .. } => {
                let mut lines = vec![message.clone()];
                lines.extend(suggestions.iter().enumerate()
                             .map(|(i, s)| format!("{}. {}", i + 1, s.word)));
                lines
            }
        }
    }
}

/// Messages from the front end.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Search(String),
    SuggestionClicked(String)
}

pub struct WordResolver {
    formatter : EntryFormatter,
    suggestions : SuggestionEngine
}

impl WordResolver {
    pub fn new(wordnet : Arc<WordNet>, vocabulary : Arc<Vocabulary>, config : &Config) -> WordResolver {
        WordResolver {
            formatter : EntryFormatter::new(wordnet),
            suggestions : SuggestionEngine::new(vocabulary)
                .with_cutoff(config.cutoff)
                .with_max(config.max_suggestions)
                .with_prefix_len(config.prefix_len)
        }
    }

    /// Provisions and loads the database and indexes its vocabulary. Any
    /// failure here is `DataUnavailable` and should stop the program.
    pub fn initialize(config : &Config) -> Result<WordResolver> {
        provision(&config.database, config.source.as_deref())?;
        let wordnet = Arc::new(WordNet::load(&config.database)?);
        let vocabulary = Arc::new(Vocabulary::from_wordnet(&wordnet));
        Ok(WordResolver::new(wordnet, vocabulary, config))
    }

    pub fn resolve(&self, raw_input : &str) -> QueryResult {
        let word = raw_input.trim();
        // empty when every sense of a known word is malformed
        let senses = self.formatter.senses(word);
        if !senses.is_empty() {
            let lines = format_senses(&senses);
            debug!("Resolved {:?} to {} senses", word, senses.len());
            return QueryResult::Resolved { word : word.to_string(), lines };
        }
        let suggestions = self.suggestions.suggest(word);
        debug!("No senses for {:?}, {} suggestions", word, suggestions.len());
        let message = if suggestions.is_empty() {
            format!("No definitions found for '{}' and no close matches.", word)
        } else {
            format!("No definitions found for '{}'. Did you mean one of these:", word)
        };
        QueryResult::Unresolved { word : word.to_string(), message, suggestions }
    }

    pub fn handle(&self, event : &Event) -> QueryResult {
        match event {
            Event::Search(query) => self.resolve(query),
            Event::SuggestionClicked(word) => {
                info!("Suggestion {:?} selected", word);
                self.resolve(word)
            }
        }
    }

    /// Answers each event with one result until either side hangs up.
    pub fn serve(&self, events : Receiver<Event>, results : Sender<QueryResult>) {
        for event in events {
            if results.send(self.handle(&event)).is_err() {
                break;
            }
        }
    }
}
