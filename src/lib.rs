//! # cpentry
//!
//! Parses the values of Java compiler path options (`-classpath`,
//! `-sourcepath`, `-bootclasspath`, `-extdirs`, `-endorseddirs`), including
//! access rules (`lib.jar[+com/foo/*;-**]`) and per-entry output directories
//! (`src[-d bin]`).

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Classpath entries and their parsers
pub mod classpath;
/// Parser settings and environment overrides
pub mod config;
/// Human-readable rendering of parsed entries
pub mod report;

pub use classpath::{
    AccessRule, AccessRuleKind, ClasspathEntry, ClasspathEntryParser, ClasspathSyntaxError,
    Destination, EntryRole, SourceArgument,
};
pub use config::ParserConfig;
