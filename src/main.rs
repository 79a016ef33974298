use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use time::macros::format_description;
use tracing::error;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use wordinfo::config::default_database;
use wordinfo::similarity::{DEFAULT_CUTOFF, DEFAULT_MAX};
use wordinfo::{Config, Event, QueryResult, WordResolver};

static PROMPT : &'static str = "> ";

fn init_logging(level : Option<&str>) {
    let filter = match level {
        Some(l) => EnvFilter::new(l),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::new(format_description!(
            "[day]/[month]/[year repr:last_two] [hour]:[minute]")))
        .with_writer(io::stderr)
        .init();
}

fn print_result(result : &QueryResult) {
    for line in result.lines() {
        println!("{}", line);
    }
}

/// `#N` picks suggestion N of the previous result.
fn parse_selection(line : &str, last : Option<&QueryResult>) -> Result<Option<Event>, String> {
    let n = match line.strip_prefix('#') {
        Some(n) => n.trim(),
        None => return Ok(None)
    };
    let index = n.parse::<usize>()
        .map_err(|_| format!("Not a suggestion number: {}", n))?;
    last.and_then(|r| index.checked_sub(1).and_then(|i| r.suggestions().get(i)))
        .map(|s| Some(Event::SuggestionClicked(s.word.clone())))
        .ok_or_else(|| format!("No suggestion #{}", index))
}

fn repl(resolver : &WordResolver) -> io::Result<()> {
    let stdin = io::stdin();
    let mut last : Option<QueryResult> = None;
    print!("{}", PROMPT);
    io::stdout().flush()?;
    for _line in stdin.lock().lines() {
        let line = _line?;
        let line = line.trim();
        if line == ":q" {
            break;
        }
        let event = match parse_selection(line, last.as_ref()) {
            Ok(Some(event)) => Some(event),
            Ok(None) => Some(Event::Search(line.to_string())),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        };
        if let Some(event) = event {
            let result = resolver.handle(&event);
            print_result(&result);
            last = Some(result);
        }
        print!("{}", PROMPT);
        io::stdout().flush()?;
    }
    Ok(())
}

fn cli() -> Command {
    Command::new("WordNet Word Info")
        .version("0.1")
        .author("John P. McCrae <john@mccr.ae>")
        .about("Looks up definitions, examples and antonyms of English words, suggesting close matches for unknown words")
        .arg(Arg::new("database")
             .long("database")
             .value_name("wordnet.json.bz2")
             .help("The WordNet JSON file, optionally bzip2 compressed"))
        .arg(Arg::new("source")
             .long("source")
             .value_name("URL")
             .help("Where to download the WordNet file from if it does not exist yet"))
        .arg(Arg::new("cutoff")
             .long("cutoff")
             .value_name("RATIO")
             .value_parser(value_parser!(f64))
             .help("Minimum similarity of a suggestion, between 0 and 1"))
        .arg(Arg::new("max")
             .short('n')
             .long("max")
             .value_name("COUNT")
             .value_parser(value_parser!(usize))
             .help("The maximum number of suggestions"))
        .arg(Arg::new("log")
             .long("log")
             .value_name("FILTER")
             .help("Log filter, e.g., info or wordinfo=debug"))
        .arg(Arg::new("words")
             .value_name("WORD")
             .action(ArgAction::Append)
             .help("Words to look up; starts an interactive prompt if none are given"))
}

fn config_from(args : &ArgMatches) -> Config {
    Config {
        database : args.get_one::<String>("database")
            .map(PathBuf::from)
            .unwrap_or_else(default_database),
        source : args.get_one::<String>("source").cloned(),
        cutoff : args.get_one::<f64>("cutoff").copied().unwrap_or(DEFAULT_CUTOFF),
        max_suggestions : args.get_one::<usize>("max").copied().unwrap_or(DEFAULT_MAX),
        ..Config::default()
    }
}

fn main() {
    let args = cli().get_matches();

    init_logging(args.get_one::<String>("log").map(|s| s.as_str()));

    let config = config_from(&args);
    if let Err(msg) = config.validate() {
        eprintln!("{}", msg);
        process::exit(2);
    }

    let resolver = match WordResolver::initialize(&config) {
        Ok(r) => r,
        Err(e) => {
            error!("{}", e);
            eprintln!("Could not load WordNet: {}", e);
            process::exit(1);
        }
    };

    match args.get_many::<String>("words") {
        Some(words) => {
            for word in words {
                print_result(&resolver.resolve(word));
            }
        },
        None => {
            if let Err(e) = repl(&resolver) {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordinfo::Suggestion;

    fn unresolved(words : &[&str]) -> QueryResult {
        QueryResult::Unresolved {
            word : "x".to_string(),
            message : String::new(),
            suggestions : words.iter().map(|w| Suggestion::new(w)).collect()
        }
    }

    #[test]
    fn numeric_flags_are_parsed() {
        let args = cli().try_get_matches_from(["wordinfo", "--cutoff", "0.8", "-n", "5", "dog"]).unwrap();
        let config = config_from(&args);
        assert_eq!(config.cutoff, 0.8);
        assert_eq!(config.max_suggestions, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn defaults_without_flags() {
        let args = cli().try_get_matches_from(["wordinfo"]).unwrap();
        let config = config_from(&args);
        assert_eq!(config.cutoff, DEFAULT_CUTOFF);
        assert_eq!(config.max_suggestions, DEFAULT_MAX);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        assert!(cli().try_get_matches_from(["wordinfo", "--cutoff", "abc"]).is_err());
        assert!(cli().try_get_matches_from(["wordinfo", "--max", "x"]).is_err());
        assert!(cli().try_get_matches_from(["wordinfo", "--max", "-1"]).is_err());
    }

    #[test]
    fn out_of_range_numbers_fail_validation() {
        let args = cli().try_get_matches_from(["wordinfo", "--cutoff", "1.5"]).unwrap();
        assert!(config_from(&args).validate().is_err());
        let args = cli().try_get_matches_from(["wordinfo", "--max", "0"]).unwrap();
        assert!(config_from(&args).validate().is_err());
    }

    #[test]
    fn plain_line_is_a_search() {
        assert_eq!(parse_selection("dog", None), Ok(None));
    }

    #[test]
    fn selection_picks_suggestion() {
        let last = unresolved(&["happy", "harp"]);
        assert_eq!(parse_selection("#2", Some(&last)),
                   Ok(Some(Event::SuggestionClicked("harp".to_string()))));
    }

    #[test]
    fn bad_selections_are_reported() {
        let last = unresolved(&["happy"]);
        assert!(parse_selection("#0", Some(&last)).is_err());
        assert!(parse_selection("#2", Some(&last)).is_err());
        assert!(parse_selection("#two", Some(&last)).is_err());
        assert!(parse_selection("#1", None).is_err());
    }
}
