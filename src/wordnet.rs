use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bzip2::read::BzDecoder;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// The read-only lexical database: synsets in file order plus a lemma index.
#[derive(Debug)]
pub struct WordNet {
    synsets : Vec<WordNetEntry>,
    by_lemma : HashMap<String, Vec<usize>>
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordNetEntry {
    #[serde(default)]
    pub id : String,
    #[serde(default)]
    pub pos : Option<String>,
    #[serde(default)]
    pub lemmas : Vec<String>,
    #[serde(default)]
    pub definition : Option<String>,
    #[serde(default)]
    pub examples : Vec<String>,
    #[serde(default)]
    pub antonyms : Vec<AntonymEntry>
}

/// `lemma` (a member of the owning synset) is opposed to `antonym`, whose
/// sense has part of speech `pos`. Incomplete records load and are dropped
/// when the sense is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AntonymEntry {
    #[serde(default)]
    pub lemma : String,
    #[serde(default)]
    pub antonym : Option<String>,
    #[serde(default)]
    pub pos : Option<String>
}

#[derive(Debug, Deserialize)]
struct WordNetFile {
    synsets : Vec<WordNetEntry>
}

impl WordNet {
    pub fn new(synsets : Vec<WordNetEntry>) -> WordNet {
        let mut by_lemma : HashMap<String, Vec<usize>> = HashMap::new();
        for (i, synset) in synsets.iter().enumerate() {
            for lemma in synset.lemmas.iter() {
                let senses = by_lemma.entry(lemma.clone()).or_default();
                // a lemma listed twice in one synset is still one sense
                if senses.last() != Some(&i) {
                    senses.push(i);
                }
            }
        }
        WordNet { synsets, by_lemma }
    }

    /// Loads the JSON database, decompressing it first when the file name
    /// ends in `.bz2`.
    pub fn load(path : &Path) -> Result<WordNet> {
        info!("Loading WordNet from {}", path.display());
        let file = File::open(path).map_err(|e| Error::unavailable(path, e))?;
        let reader : Box<dyn Read> = if path.extension().map_or(false, |e| e == "bz2") {
            Box::new(BzDecoder::new(file))
        } else {
            Box::new(file)
        };
        let wordnet = WordNet::from_reader(BufReader::new(reader))
            .map_err(|e| Error::unavailable(path, e))?;
        info!("Loaded {} synsets, {} distinct lemmas",
              wordnet.synsets.len(), wordnet.by_lemma.len());
        Ok(wordnet)
    }

    pub fn from_reader<R : Read>(reader : R) -> Result<WordNet> {
        let file : WordNetFile = serde_json::from_reader(reader)?;
        Ok(WordNet::new(file.synsets))
    }

    pub fn from_json(json : &str) -> Result<WordNet> {
        let file : WordNetFile = serde_json::from_str(json)?;
        Ok(WordNet::new(file.synsets))
    }

    /// All senses of `word` in database order. Exact, case-sensitive match.
    pub fn synsets(&self, word : &str) -> Vec<&WordNetEntry> {
        match self.by_lemma.get(word) {
            Some(ids) => ids.iter().map(|&i| &self.synsets[i]).collect(),
            None => Vec::new()
        }
    }

    /// Every lemma name of every synset, duplicates included.
    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.synsets.iter().flat_map(|s| s.lemmas.iter().map(|l| l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}
