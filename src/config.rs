#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Environment variable overriding the path-list separator.
pub const SEPARATOR_ENV: &str = "CPENTRY_PATH_SEPARATOR";

/// Environment variable selecting the log level of the `cpentry` binary.
pub const LOG_LEVEL_ENV: &str = "CPENTRY_LOG";

/// Returns the platform specific path-list separator used by javac.
pub fn default_separator() -> char {
    if cfg!(windows) { ';' } else { ':' }
}

/// Archive extensions that can never receive generated class files.
fn default_archive_extensions() -> Vec<String> {
    vec!["jar".to_string(), "zip".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
/// Settings shared by every parser in the crate.
pub struct ParserConfig {
    /// Character separating entries of a path list, and rules inside a rule
    /// clause.
    #[builder(default = default_separator())]
    separator:          char,
    /// Case-sensitive extensions (without the dot) treated as archives.
    #[builder(default = default_archive_extensions(), setter(into))]
    archive_extensions: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ParserConfig {
    /// Builds a configuration from the environment, falling back to platform
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(SEPARATOR_ENV) {
            config.separator = parse_separator(&raw)
                .with_context(|| format!("Invalid value for {SEPARATOR_ENV}"))?;
        }

        Ok(config)
    }

    /// Returns a copy of this configuration using a different separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Path-list separator.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Archive extensions, without the leading dot.
    pub fn archive_extensions(&self) -> &[String] {
        &self.archive_extensions
    }

    /// True if `path` names an archive (`foo.jar`, `lib/bar.zip`).
    pub fn is_archive(&self, path: &str) -> bool {
        match path.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                self.archive_extensions.iter().any(|known| known == ext)
            }
            _ => false,
        }
    }
}

/// Parses a separator override, which must be exactly one character.
pub fn parse_separator(raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c != '[' && c != ']' => Ok(c),
        (Some(c), None) => bail!("`{c}` is reserved for entry clauses"),
        _ => bail!("expected exactly one character, found `{raw}`"),
    }
}
