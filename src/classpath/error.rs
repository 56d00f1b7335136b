#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Errors raised while parsing a path option value or a source argument.
///
/// The `Display` text of every variant is the exact diagnostic the compiler
/// front end prints.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClasspathSyntaxError {
    /// A `-d` value is empty or holds more than one path.
    #[error("incorrect destination path entry: {entry}")]
    IncorrectDestinationPath {
        /// The whole raw entry.
        entry: String,
    },
    /// A rule clause came after a destination clause.
    #[error("access rules cannot follow destination path entries: {entry}")]
    AccessRulesAfterDestination {
        /// The whole raw entry.
        entry: String,
    },
    /// The option never accepts destination clauses.
    #[error("unexpected destination path entry in {option} option")]
    UnexpectedDestinationInOption {
        /// Option name as reported (`-extdir`, `-endorseddirs`).
        option: &'static str,
    },
    /// A binary archive was given a destination clause.
    #[error("unexpected destination path entry for file: {path}")]
    UnexpectedDestinationForFile {
        /// Base path of the archive.
        path: String,
    },
    /// An access rule or encoding token is not recognised.
    #[error("unsupported encoding format: {token}")]
    UnsupportedEncodingFormat {
        /// The offending token.
        token: String,
    },
    /// Brackets are unbalanced or misplaced.
    #[error("unexpected bracket: {fragment}")]
    UnexpectedBracket {
        /// Raw text from the offending bracket onwards.
        fragment: String,
    },
    /// The entry names no path at all.
    #[error("incorrect classpath: {entry}")]
    IncorrectClasspath {
        /// The raw entry.
        entry: String,
    },
}

impl ClasspathSyntaxError {
    /// True for both flavours of "destination not allowed here".
    pub fn is_unexpected_destination(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedDestinationInOption { .. } | Self::UnexpectedDestinationForFile { .. }
        )
    }

    /// Shorthand for [`ClasspathSyntaxError::UnexpectedBracket`].
    pub(crate) fn bracket(fragment: impl Into<String>) -> Self {
        Self::UnexpectedBracket {
            fragment: fragment.into(),
        }
    }
}
