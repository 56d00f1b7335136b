#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;
use tabled::{Table, Tabled, settings::Style};

use crate::classpath::{ClasspathEntry, SourceArgument};

#[derive(Tabled)]
/// One table row per classpath entry.
struct EntryRow {
    /// * `path`: base path
    #[tabled(rename = "Path")]
    path:        String,
    /// * `rules`: access rules, one per line
    #[tabled(rename = "Access rules")]
    rules:       String,
    /// * `destination`: destination override, or `-`
    #[tabled(rename = "Destination")]
    destination: String,
}

impl From<&ClasspathEntry> for EntryRow {
    fn from(entry: &ClasspathEntry) -> Self {
        EntryRow {
            path:        entry.base_path().to_string(),
            rules:       entry.access_rules().iter().join("\n"),
            destination: entry
                .destination()
                .map_or_else(|| "-".to_string(), ToString::to_string),
        }
    }
}

#[derive(Tabled)]
/// One table row per source argument.
struct SourceRow {
    /// * `path`: file or directory
    #[tabled(rename = "Source")]
    path:        String,
    /// * `encoding`: custom encoding, or `-`
    #[tabled(rename = "Encoding")]
    encoding:    String,
    /// * `destination`: destination override, or `-`
    #[tabled(rename = "Destination")]
    destination: String,
}

impl From<&SourceArgument> for SourceRow {
    fn from(argument: &SourceArgument) -> Self {
        SourceRow {
            path:        argument.path().to_string(),
            encoding:    argument.encoding().unwrap_or("-").to_string(),
            destination: argument
                .destination()
                .map_or_else(|| "-".to_string(), ToString::to_string),
        }
    }
}

/// Renders entries as a table, one row per entry.
pub fn entries_table(entries: &[ClasspathEntry]) -> String {
    Table::new(entries.iter().map(EntryRow::from))
        .with(Style::modern())
        .to_string()
}

/// Renders source arguments as a table.
pub fn sources_table(arguments: &[SourceArgument]) -> String {
    Table::new(arguments.iter().map(SourceRow::from))
        .with(Style::modern())
        .to_string()
}
