//! Word lookup over a WordNet-style lexical database: definitions, examples
//! and antonyms for known words, close-match suggestions for the rest.

pub mod config;
pub mod error;
pub mod format;
pub mod pos;
pub mod provision;
pub mod resolver;
pub mod similarity;
pub mod suggest;
pub mod vocabulary;
pub mod wordnet;

pub use config::Config;
pub use error::{Error, Result};
pub use format::{EntryFormatter, Sense};
pub use resolver::{Event, QueryResult, WordResolver};
pub use suggest::{Suggestion, SuggestionEngine};
pub use vocabulary::Vocabulary;
pub use wordnet::WordNet;
