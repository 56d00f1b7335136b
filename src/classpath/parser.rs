#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    classpath::{
        entry::{ClasspathEntry, Destination, EntryRole},
        error::ClasspathSyntaxError,
        parsers::{ClauseBody, clause},
    },
    config::ParserConfig,
};

/// Parses single classpath/sourcepath segments into [`ClasspathEntry`]
/// values.
///
/// A segment is one element of a path option value, already split on the
/// separator outside bracket groups (see
/// [`split_path_list`](crate::classpath::split_path_list)). The parser holds
/// only immutable configuration and can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct ClasspathEntryParser {
    /// Separator and archive extensions.
    config: ParserConfig,
}

impl ClasspathEntryParser {
    /// Creates a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Creates a parser with platform defaults except for the separator.
    pub fn with_separator(separator: char) -> Self {
        Self::new(ParserConfig::default().with_separator(separator))
    }

    /// The configuration in use.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The path-list separator in use.
    pub fn separator(&self) -> char {
        self.config.separator()
    }

    /// Renders `entry` in canonical form with this parser's separator, so
    /// that parsing the result yields `entry` again.
    pub fn canonical(&self, entry: &ClasspathEntry) -> String {
        entry.render(self.separator())
    }

    /// Parses one raw segment given to the option `role`.
    pub fn parse(&self, raw: &str, role: EntryRole) -> Result<ClasspathEntry, ClasspathSyntaxError> {
        let separator = self.separator();

        if !role.accepts_destination() && raw.contains("[-d") {
            return Err(ClasspathSyntaxError::UnexpectedDestinationInOption {
                option: role.diagnostic_name(),
            });
        }

        check_brackets(raw)?;

        let (base_path, clauses) = split_clauses(raw, separator);
        if base_path.is_empty() {
            return Err(if clauses.is_empty() {
                ClasspathSyntaxError::IncorrectClasspath {
                    entry: raw.to_string(),
                }
            } else {
                ClasspathSyntaxError::bracket(raw)
            });
        }

        let mut access_rules = Vec::new();
        let mut destination = None;

        for content in clauses {
            tracing::trace!("{raw}: clause `{content}`");
            let body = clause::body(content, separator).map_err(|_| {
                ClasspathSyntaxError::UnsupportedEncodingFormat {
                    token: content.to_string(),
                }
            })?;

            match body {
                ClauseBody::Destination(value) => {
                    if value.is_empty() || value.contains(separator) {
                        return Err(ClasspathSyntaxError::IncorrectDestinationPath {
                            entry: raw.to_string(),
                        });
                    }
                    destination = Some(Destination::from_value(value));
                }
                ClauseBody::Rules(tokens) => {
                    if destination.is_some() {
                        return Err(ClasspathSyntaxError::AccessRulesAfterDestination {
                            entry: raw.to_string(),
                        });
                    }
                    for token in tokens {
                        let rule = clause::access_rule(token, separator).map_err(|_| {
                            ClasspathSyntaxError::UnsupportedEncodingFormat {
                                token: token.to_string(),
                            }
                        })?;
                        access_rules.push(rule);
                    }
                }
            }
        }

        if destination.is_some() {
            if !role.accepts_destination() {
                return Err(ClasspathSyntaxError::UnexpectedDestinationInOption {
                    option: role.diagnostic_name(),
                });
            }
            if role.rejects_destination_on_archives() && self.config.is_archive(base_path) {
                return Err(ClasspathSyntaxError::UnexpectedDestinationForFile {
                    path: base_path.to_string(),
                });
            }
        }

        tracing::debug!(
            "{role} entry `{base_path}`: {} rule(s), destination {:?}",
            access_rules.len(),
            destination
        );

        Ok(ClasspathEntry::new(base_path, access_rules, destination))
    }
}

/// Parses one segment with the platform default configuration.
pub fn parse_entry(raw: &str, role: EntryRole) -> Result<ClasspathEntry, ClasspathSyntaxError> {
    ClasspathEntryParser::default().parse(raw, role)
}

/// Rejects nested groups, closers without an opener and unclosed groups.
fn check_brackets(raw: &str) -> Result<(), ClasspathSyntaxError> {
    let mut open: Option<usize> = None;

    for (i, c) in raw.char_indices() {
        match c {
            '[' if open.is_some() => return Err(ClasspathSyntaxError::bracket(&raw[i..])),
            '[' => open = Some(i),
            ']' => {
                if open.take().is_none() {
                    return Err(ClasspathSyntaxError::bracket(&raw[i..]));
                }
            }
            _ => {}
        }
    }

    match open {
        Some(i) => Err(ClasspathSyntaxError::bracket(&raw[i..])),
        None => Ok(()),
    }
}

/// Peels clause groups off the end of `raw`, stopping at the first group
/// that reads as part of a file name. Returns the base path and the clause
/// contents in source order. Assumes balanced, non-nested brackets.
fn split_clauses(raw: &str, separator: char) -> (&str, Vec<&str>) {
    let mut head = raw;
    let mut clauses = Vec::new();

    while let Some(inner) = head.strip_suffix(']') {
        let Some(open) = inner.rfind('[') else {
            break;
        };
        let content = &inner[open + 1..];
        if clause::clause_start(content, separator).is_err() {
            break;
        }
        clauses.push(content);
        head = &inner[..open];
    }

    clauses.reverse();
    (head, clauses)
}
