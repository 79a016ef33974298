use std::fmt;

/// The four WordNet syntactic categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb
}

impl PartOfSpeech {
    /// Reads only the first character of `code`, case-insensitively. Satellite
    /// adjectives (`s`) and anything else are unmapped.
    pub fn from_code(code : &str) -> Option<PartOfSpeech> {
        match code.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('n') => Some(PartOfSpeech::Noun),
            Some('v') => Some(PartOfSpeech::Verb),
            Some('a') => Some(PartOfSpeech::Adjective),
            Some('r') => Some(PartOfSpeech::Adverb),
            _ => None
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb"
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Human readable category for a code, or `""` when unmapped.
pub fn map_code(code : &str) -> &'static str {
    PartOfSpeech::from_code(code).map(|p| p.name()).unwrap_or("")
}
