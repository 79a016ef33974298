use std::sync::Arc;

use tracing::warn;

use crate::error::{Error, Result};
use crate::pos;
use crate::wordnet::{WordNet, WordNetEntry};

const EXAMPLE_SEPARATOR : &str = ". ";

/// An antonym lemma together with the part of speech of its sense.
#[derive(Debug, Clone, PartialEq)]
pub struct AntonymRelation {
    pub word : String,
    pub pos : String
}

/// One renderable meaning of a word.
#[derive(Debug, Clone, PartialEq)]
pub struct Sense {
    pub pos : String,
    pub definition : String,
    pub examples : Vec<String>,
    pub antonyms : Vec<AntonymRelation>
}

impl Sense {
    pub fn from_entry(entry : &WordNetEntry) -> Result<Sense> {
        let pos = entry.pos.clone().ok_or_else(|| Error::MalformedEntry {
            id : entry.id.clone(),
            field : "pos"
        })?;
        let definition = entry.definition.clone().ok_or_else(|| Error::MalformedEntry {
            id : entry.id.clone(),
            field : "definition"
        })?;
        Ok(Sense {
            pos,
            definition,
            examples : entry.examples.clone(),
            antonyms : entry.antonyms.iter().filter_map(|a| match (&a.antonym, &a.pos) {
                (Some(word), Some(pos)) => Some(AntonymRelation {
                    word : word.clone(),
                    pos : pos.clone()
                }),
                _ => {
                    warn!("Skipping incomplete antonym of {:?} in synset {}", a.lemma, entry.id);
                    None
                }
            }).collect()
        })
    }

    pub fn category(&self) -> &'static str {
        pos::map_code(&self.pos)
    }

    /// Antonyms whose category matches this sense's category.
    pub fn antonyms_for_pos(&self) -> Vec<&str> {
        let category = self.category();
        self.antonyms.iter()
            .filter(|a| pos::map_code(&a.pos) == category)
            .map(|a| a.word.as_str())
            .collect()
    }

    /// `"<index>. (<category>) <definition> <antonyms>"`
    pub fn headline(&self, index : usize) -> String {
        let category = self.category();
        let pos_text = if category.is_empty() {
            String::new()
        } else {
            format!("({}) ", category)
        };
        let antonyms = self.antonyms_for_pos();
        let antonyms_text = if antonyms.is_empty() {
            String::new()
        } else {
            format!("(antonym: {})", antonyms.join(", "))
        };
        format!("{}. {}{} {}", index, pos_text, self.definition, antonyms_text)
    }

    /// The example block, ending with a blank line.
    pub fn example_lines(&self) -> Vec<String> {
        let joined = self.examples.join(EXAMPLE_SEPARATOR);
        if joined.is_empty() {
            return vec!["No examples.".to_string(), String::new()];
        }
        let mut lines = vec!["Examples:".to_string()];
        lines.extend(joined.split(EXAMPLE_SEPARATOR)
                     .enumerate()
                     .map(|(i, s)| format!("{}: {}", i + 1, example_sentence(s))));
        lines.push(String::new());
        lines
    }
}

/// Upper-cases the first character; appends a period unless the sentence
/// already carries a comma or exclamation mark.
pub fn example_sentence(sentence : &str) -> String {
    let mut chars = sentence.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new()
    };
    if !(sentence.contains(',') || sentence.contains('!')) {
        out.push('.');
    }
    out
}

/// Renders senses with contiguous 1-based numbering.
pub fn format_senses(senses : &[Sense]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, sense) in senses.iter().enumerate() {
        lines.push(sense.headline(i + 1));
        lines.extend(sense.example_lines());
    }
    lines
}

pub struct EntryFormatter {
    wordnet : Arc<WordNet>
}

impl EntryFormatter {
    pub fn new(wordnet : Arc<WordNet>) -> EntryFormatter {
        EntryFormatter { wordnet }
    }

    /// Display lines for every well-formed sense of `word`, in database
    /// order. Malformed synsets are logged and left out.
    pub fn format(&self, word : &str) -> Vec<String> {
        format_senses(&self.senses(word))
    }

    pub fn senses(&self, word : &str) -> Vec<Sense> {
        self.wordnet.synsets(word).into_iter()
            .filter_map(|entry| match Sense::from_entry(entry) {
                Ok(sense) => Some(sense),
                Err(e) => {
                    warn!("Skipping sense of {:?}: {}", word, e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordnet::AntonymEntry;
    use pretty_assertions::assert_eq;

    fn sense(pos : &str, definition : &str, examples : &[&str]) -> Sense {
        Sense {
            pos : pos.to_string(),
            definition : definition.to_string(),
            examples : examples.iter().map(|s| s.to_string()).collect(),
            antonyms : Vec::new()
        }
    }

    fn antonym(word : &str, pos : &str) -> AntonymRelation {
        AntonymRelation { word : word.to_string(), pos : pos.to_string() }
    }

    #[test]
    fn renders_sense_block() {
        let s = sense("n", "a domesticated canid", &["the dog barked all night"]);
        assert_eq!(format_senses(&[s]), vec![
            "1. (noun) a domesticated canid ",
            "Examples:",
            "1: The dog barked all night.",
            ""]);
    }

    #[test]
    fn no_examples_line() {
        let s = sense("v", "go after with the intent to catch", &[]);
        assert_eq!(format_senses(&[s]), vec![
            "1. (verb) go after with the intent to catch ",
            "No examples.",
            ""]);
    }

    #[test]
    fn unmapped_category_has_no_prefix() {
        let s = sense("s", "very good", &[]);
        assert_eq!(s.headline(2), "2. very good ");
    }

    #[test]
    fn antonyms_filtered_by_category() {
        let mut s = sense("a", "enjoying well-being", &[]);
        s.antonyms = vec![antonym("unhappy", "a"), antonym("sadness", "n"), antonym("sad", "a")];
        assert_eq!(s.headline(1), "1. (adjective) enjoying well-being (antonym: unhappy, sad)");
    }

    #[test]
    fn antonyms_of_other_category_only_give_no_suffix() {
        let mut s = sense("n", "a feline", &[]);
        s.antonyms = vec![antonym("dog", "v")];
        assert_eq!(s.headline(1), "1. (noun) a feline ");
    }

    #[test]
    fn example_punctuation() {
        assert_eq!(example_sentence("she is happy"), "She is happy.");
        assert_eq!(example_sentence("well, that went badly"), "Well, that went badly");
        assert_eq!(example_sentence("what a day!"), "What a day!");
        assert_eq!(example_sentence(""), ".");
    }

    #[test]
    fn only_first_character_is_raised() {
        // the rest of the sentence is not lowercased
        assert_eq!(example_sentence("is he NASA staff"), "Is he NASA staff.");
        assert_eq!(example_sentence("ask John"), "Ask John.");
    }

    #[test]
    fn incomplete_antonyms_are_dropped() {
        let entry = WordNetEntry {
            id : "05142180-n".to_string(),
            pos : Some("n".to_string()),
            definition : Some("moral excellence".to_string()),
            antonyms : vec![
                AntonymEntry { lemma : "good".to_string(), antonym : Some("bad".to_string()), pos : None },
                AntonymEntry { lemma : "good".to_string(), antonym : None, pos : Some("n".to_string()) },
                AntonymEntry { lemma : "good".to_string(), antonym : Some("evil".to_string()), pos : Some("n".to_string()) }],
            ..Default::default()
        };
        let sense = Sense::from_entry(&entry).unwrap();
        assert_eq!(sense.antonyms, vec![antonym("evil", "n")]);
        assert_eq!(sense.headline(1), "1. (noun) moral excellence (antonym: evil)");
    }

    #[test]
    fn examples_containing_separator_are_split() {
        let s = sense("n", "d", &["first part. second part", "third"]);
        assert_eq!(s.example_lines(), vec![
            "Examples:",
            "1: First part.",
            "2: Second part.",
            "3: Third.",
            ""]);
    }

    #[test]
    fn numbering_is_contiguous() {
        let senses = vec![sense("n", "a", &[]), sense("v", "b", &["x"]), sense("r", "c", &[])];
        let lines = format_senses(&senses);
        let heads : Vec<&String> = lines.iter()
            .filter(|l| l.starts_with(char::is_numeric) && l.contains(". "))
            .collect();
        assert_eq!(heads, vec!["1. (noun) a ", "2. (verb) b ", "3. (adverb) c "]);
    }

    #[test]
    fn malformed_sense_is_skipped() {
        let wordnet = WordNet::from_json(r#"{"synsets": [
            {"id": "1", "pos": "n", "lemmas": ["run"], "definition": "a race"},
            {"id": "2", "lemmas": ["run"], "definition": "no pos here"},
            {"id": "3", "pos": "v", "lemmas": ["run"]},
            {"id": "4", "pos": "v", "lemmas": ["run"], "definition": "move fast"}
        ]}"#).unwrap();
        let formatter = EntryFormatter::new(Arc::new(wordnet));
        assert_eq!(formatter.format("run"), vec![
            "1. (noun) a race ",
            "No examples.",
            "",
            "2. (verb) move fast ",
            "No examples.",
            ""]);
    }

    #[test]
    fn malformed_error_names_field() {
        let entry = WordNetEntry { id : "x".to_string(), pos : Some("n".to_string()), ..Default::default() };
        match Sense::from_entry(&entry) {
            Err(Error::MalformedEntry { field, .. }) => assert_eq!(field, "definition"),
            other => panic!("unexpected {:?}", other)
        }
    }
}
