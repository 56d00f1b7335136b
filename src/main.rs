#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # cpentry
//!
//! Command-line front end for the classpath entry parser. Every subcommand
//! prints JSON on stdout (or a table with `--table`) and diagnostics on
//! stderr.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use bpaf::*;
use cpentry::{
    classpath::{ClasspathEntryParser, EntryRole, join_bracketed_args},
    config::{self, LOG_LEVEL_ENV, ParserConfig},
    report,
};
use dotenvy::dotenv;
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Options shared by subcommands that read a path option value.
#[derive(Debug, Clone)]
struct PathArgs {
    /// Option the value was given to
    role:      EntryRole,
    /// Separator override
    separator: Option<char>,
    /// The value, possibly split into several words by the shell
    words:     Vec<String>,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Parse a single entry
    Entry(PathArgs),
    /// Print the canonical form of a single entry
    Canonical(PathArgs),
    /// Parse a whole path list; flags are lenient and table
    List(PathArgs, bool, bool),
    /// Parse source arguments; flag is table
    Sources(Option<char>, Vec<String>, bool),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses the role
    fn role() -> impl Parser<EntryRole> {
        short('r')
            .long("role")
            .help("Option the value belongs to: classpath, sourcepath, bootclasspath, extdirs, endorseddirs")
            .argument::<EntryRole>("ROLE")
            .fallback(EntryRole::Classpath)
    }

    /// parses the separator override
    fn separator() -> impl Parser<Option<char>> {
        short('s')
            .long("separator")
            .help("Path-list separator (defaults to the platform one)")
            .argument::<char>("SEP")
            .optional()
    }

    /// parses the words of a path value
    fn words() -> impl Parser<Vec<String>> {
        positional::<String>("VALUE")
            .help("Path option value; words split inside brackets are rejoined")
            .some("expected a path option value")
    }

    /// parses the shared path options
    fn path_args() -> impl Parser<PathArgs> {
        let role = role();
        let separator = separator();
        let words = words();
        construct!(PathArgs {
            role,
            separator,
            words
        })
    }

    /// parses source arguments
    fn source_args() -> impl Parser<Vec<String>> {
        positional::<String>("ARG")
            .help("Source file or directory argument")
            .some("expected a source argument")
    }

    /// parses the table switch
    fn table() -> impl Parser<bool> {
        long("table").help("Print a table instead of JSON").switch()
    }

    let entry = construct!(Cmd::Entry(path_args()))
        .to_options()
        .command("entry")
        .help("Parse a single classpath entry");

    let canonical = construct!(Cmd::Canonical(path_args()))
        .to_options()
        .command("canonical")
        .help("Print the canonical form of a single entry");

    let lenient = long("lenient")
        .help("Skip bad entries instead of failing")
        .switch();
    let list = construct!(Cmd::List(path_args(), lenient, table()))
        .to_options()
        .command("list")
        .help("Parse a whole path option value");

    let sources = construct!(Cmd::Sources(separator(), source_args(), table()))
        .to_options()
        .command("sources")
        .help("Parse source file and directory arguments");

    let cmd = construct!([entry, canonical, list, sources]);

    cmd.to_options()
        .descr("Parser for javac path option values")
        .run()
}

/// Installs the stderr log subscriber, honouring `CPENTRY_LOG`.
fn init_tracing() -> Result<()> {
    let level = match std::env::var(LOG_LEVEL_ENV) {
        Ok(raw) => Level::from_str(raw.trim())
            .with_context(|| format!("Invalid value for {LOG_LEVEL_ENV}: `{raw}`"))?,
        Err(_) => Level::WARN,
    };

    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(level);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    Ok(())
}

/// Builds a parser from the environment configuration and a CLI override.
fn make_parser(base: &ParserConfig, separator: Option<char>) -> Result<ClasspathEntryParser> {
    let parser_config = match separator {
        Some(sep) => {
            let sep = config::parse_separator(&sep.to_string()).context("Invalid --separator")?;
            base.clone().with_separator(sep)
        }
        None => base.clone(),
    };
    Ok(ClasspathEntryParser::new(parser_config))
}

/// Rejoins the words of a path value, rejecting leftovers.
fn path_value(words: &[String]) -> Result<String> {
    let (value, consumed) = join_bracketed_args(words)?;
    if let Some(extra) = words.get(consumed + 1) {
        bail!("unexpected argument `{extra}` after path value `{value}`");
    }
    Ok(value)
}

fn main() -> Result<()> {
    dotenv().ok();
    init_tracing()?;

    let cmd = options();
    let config = ParserConfig::from_env()?;

    match cmd {
        Cmd::Entry(args) => {
            let parser = make_parser(&config, args.separator)?;
            let entry = parser.parse(&path_value(&args.words)?, args.role)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Cmd::Canonical(args) => {
            let parser = make_parser(&config, args.separator)?;
            let entry = parser.parse(&path_value(&args.words)?, args.role)?;
            println!("{}", parser.canonical(&entry));
        }
        Cmd::List(args, lenient, table) => {
            let parser = make_parser(&config, args.separator)?;
            let value = path_value(&args.words)?;
            let entries = if lenient {
                let (entries, errors) = parser
                    .parse_path_list_lenient(&value, args.role)
                    .into_parts();
                for e in errors {
                    eprintln!("{e}");
                }
                entries
            } else {
                parser.parse_path_list(&value, args.role)?
            };

            if table {
                println!("{}", report::entries_table(&entries));
            } else {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        }
        Cmd::Sources(separator, words, table) => {
            let parser = make_parser(&config, separator)?;
            let arguments = parser.parse_source_arguments(&words)?;
            if table {
                println!("{}", report::sources_table(&arguments));
            } else {
                println!("{}", serde_json::to_string_pretty(&arguments)?);
            }
        }
    };

    Ok(())
}
