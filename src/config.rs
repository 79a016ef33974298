use std::path::PathBuf;

use directories_next::ProjectDirs;

use crate::similarity::{DEFAULT_CUTOFF, DEFAULT_MAX};

pub static DATABASE_FILE : &'static str = "wordnet.json.bz2";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Local copy of the lexical database.
    pub database : PathBuf,
    /// Where to fetch the database from when `database` does not exist.
    pub source : Option<String>,
    pub cutoff : f64,
    pub max_suggestions : usize,
    pub prefix_len : usize
}

impl Default for Config {
    fn default() -> Config {
        Config {
            database : default_database(),
            source : None,
            cutoff : DEFAULT_CUTOFF,
            max_suggestions : DEFAULT_MAX,
            prefix_len : 2
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(format!("cutoff must be within [0, 1], got {}", self.cutoff));
        }
        if self.max_suggestions == 0 {
            return Err("max suggestions must be positive".to_string());
        }
        Ok(())
    }
}

/// The per-user cache directory, or the working directory if there is none.
pub fn default_database() -> PathBuf {
    match ProjectDirs::from("", "", "wordinfo") {
        Some(dirs) => dirs.cache_dir().join(DATABASE_FILE),
        None => PathBuf::from(DATABASE_FILE)
    }
}
