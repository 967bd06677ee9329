//! Command-line interface for langtag
//! Parses, validates and canonicalizes Unicode locale identifiers.
//!
//! Usage:
//!   langtag parse `<tag>...` [--format `<format>`]   - Print the parsed structure
//!   langtag check `<tag>...`                        - Report whether each tag is valid
//!   langtag canonicalize `<tag>...`                 - Print the canonical form
//!
//! Tags are read from stdin, one per line, when none are given.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use langtag::config::{LangtagConfig, Loader, OutputFormat};
use langtag::{LanguageTagParser, ParsedLocaleIdentifier};
use std::io::BufRead;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let tags_arg = || {
        Arg::new("tags")
            .help("Locale identifiers (read from stdin when omitted)")
            .num_args(0..)
            .action(ArgAction::Append)
    };

    let matches = Command::new("langtag")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and canonicalizing Unicode locale identifiers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a langtag.toml configuration file")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format for `parse` (default from configuration)")
                .value_parser(OutputFormat::NAMES)
                .global(true),
        )
        .arg(
            Arg::new("no-case")
                .long("no-case")
                .help("Keep script and region subtags lowercase")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("language-only")
                .long("language-only")
                .help("Accept only a language identifier, without extensions")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("max-length")
                .long("max-length")
                .help("Reject identifiers longer than this many bytes")
                .value_parser(value_parser!(i64).range(1..))
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the parsed structure of each tag")
                .arg(tags_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Report whether each tag is structurally valid")
                .arg(tags_arg()),
        )
        .subcommand(
            Command::new("canonicalize")
                .about("Print the canonical form of each tag")
                .arg(tags_arg()),
        )
        .get_matches();

    let Some((command, sub_matches)) = matches.subcommand() else {
        eprintln!("No subcommand given");
        std::process::exit(2);
    };

    let config = load_config(sub_matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    let tags = collect_tags(sub_matches);

    let all_valid = match command {
        "parse" => handle_parse_command(&config, &tags),
        "check" => handle_check_command(&config, &tags),
        "canonicalize" => handle_canonicalize_command(&config, &tags),
        other => {
            eprintln!("Unknown command '{}'", other);
            std::process::exit(2);
        }
    };

    if !all_valid {
        std::process::exit(1);
    }
}

/// Layer the config file and command-line flags over the built-in defaults
fn load_config(matches: &ArgMatches) -> Result<LangtagConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("no-case") {
        loader = loader.set_override("parser.canonical_case", false)?;
    }
    if matches.get_flag("language-only") {
        loader = loader.set_override("parser.extensions", false)?;
    }
    if let Some(max) = matches.get_one::<i64>("max-length") {
        loader = loader.set_override("parser.max_length", *max)?;
    }
    loader.build()
}

fn collect_tags(matches: &ArgMatches) -> Vec<String> {
    let given: Vec<String> = matches
        .get_many::<String>("tags")
        .map(|tags| tags.cloned().collect())
        .unwrap_or_default();
    if !given.is_empty() {
        return given;
    }

    std::io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse each tag with the configured options, reporting failures on stderr.
/// Returns false if any tag was rejected.
fn for_each_parsed<F>(config: &LangtagConfig, tags: &[String], mut emit: F) -> bool
where
    F: FnMut(&str, &ParsedLocaleIdentifier),
{
    let mut all_valid = true;
    for tag in tags {
        match LanguageTagParser::with_options(tag, config.parser.clone()).parse() {
            Ok(parsed) => emit(tag, &parsed),
            Err(e) => {
                eprintln!("{}: {}", tag, e);
                all_valid = false;
            }
        }
    }
    all_valid
}

/// Handle the parse command
fn handle_parse_command(config: &LangtagConfig, tags: &[String]) -> bool {
    let format = config.output.format;
    for_each_parsed(config, tags, |tag, parsed| {
        let formatted = match format {
            OutputFormat::Json => serde_json::to_string_pretty(parsed).map_err(|e| e.to_string()),
            OutputFormat::Yaml => serde_yaml::to_string(parsed).map_err(|e| e.to_string()),
            OutputFormat::Canonical => Ok(parsed.to_string()),
            OutputFormat::Debug => Ok(format!("{:#?}", parsed)),
        };
        match formatted {
            Ok(text) => println!("{}", text.trim_end()),
            Err(e) => {
                eprintln!("Error formatting {}: {}", tag, e);
                std::process::exit(1);
            }
        }
    })
}

/// Handle the check command
fn handle_check_command(config: &LangtagConfig, tags: &[String]) -> bool {
    let mut all_valid = true;
    for tag in tags {
        match LanguageTagParser::with_options(tag, config.parser.clone()).parse() {
            Ok(_) => println!("{}: valid", tag),
            Err(e) => {
                println!("{}: invalid: {}", tag, e);
                all_valid = false;
            }
        }
    }
    all_valid
}

/// Handle the canonicalize command
fn handle_canonicalize_command(config: &LangtagConfig, tags: &[String]) -> bool {
    for_each_parsed(config, tags, |_, parsed| println!("{}", parsed))
}
