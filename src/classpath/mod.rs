#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Entry, access rule, destination and role types.
pub mod entry;
/// The error type shared by every parser.
pub mod error;
/// Single-segment entry parser.
pub mod parser;
/// Grammars for the body of a bracket clause.
pub mod parsers;
/// Whole option values and shell-split arguments.
pub mod path_list;
/// Bare source file and directory arguments.
pub mod source;

pub use entry::{AccessRule, AccessRuleKind, ClasspathEntry, Destination, EntryRole};
pub use error::ClasspathSyntaxError;
pub use parser::{ClasspathEntryParser, parse_entry};
pub use path_list::{LenientPathList, join_bracketed_args, split_path_list};
pub use source::SourceArgument;
