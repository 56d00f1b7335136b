#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

use crate::classpath::{
    entry::Destination,
    error::ClasspathSyntaxError,
    parser::ClasspathEntryParser,
    parsers::{ClauseBody, clause},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A bare compiler argument naming a source file or directory.
pub struct SourceArgument {
    /// File or directory path.
    path:        String,
    /// Charset given as `Foo.java[UTF-8]`.
    encoding:    Option<String>,
    /// Output override given as `src[-d bin]`.
    destination: Option<Destination>,
}

impl SourceArgument {
    /// An argument without encoding or destination.
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            path:        path.into(),
            encoding:    None,
            destination: None,
        }
    }

    /// The file or directory path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The custom encoding, if any.
    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    /// The destination override, if any.
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }
}

impl ClasspathEntryParser {
    /// Parses one source argument written as a single word:
    /// `Foo.java`, `Foo.java[UTF-8]` or `src[-d bin]`.
    pub fn parse_source_argument(&self, arg: &str) -> Result<SourceArgument, ClasspathSyntaxError> {
        if arg.starts_with('[') {
            return Err(ClasspathSyntaxError::bracket(arg));
        }
        let Some(inner) = arg.strip_suffix(']') else {
            return Ok(SourceArgument::plain(arg));
        };
        let open = match inner.find('[') {
            Some(i) if i > 0 => i,
            _ => return Err(ClasspathSyntaxError::bracket(arg)),
        };

        let path = &inner[..open];
        let content = &inner[open + 1..];
        if content.is_empty() {
            return Ok(SourceArgument::plain(path));
        }

        if let Ok(ClauseBody::Destination(value)) = clause::body(content, self.separator()) {
            let destination = self.source_destination(value, arg)?;
            return Ok(SourceArgument {
                path:        path.to_string(),
                encoding:    None,
                destination: Some(destination),
            });
        }

        let encoding = clause::encoding(content, self.separator()).map_err(|_| {
            ClasspathSyntaxError::UnsupportedEncodingFormat {
                token: content.to_string(),
            }
        })?;

        Ok(SourceArgument {
            path:        path.to_string(),
            encoding:    Some(encoding.to_string()),
            destination: None,
        })
    }

    /// Parses the bare arguments of a command line, accepting the two-word
    /// form `src[-d` `bin]` that shells produce for `src[-d bin]`.
    pub fn parse_source_arguments<S: AsRef<str>>(
        &self,
        words: &[S],
    ) -> Result<Vec<SourceArgument>, ClasspathSyntaxError> {
        let mut arguments = Vec::with_capacity(words.len());
        let mut words = words.iter().map(AsRef::<str>::as_ref);

        while let Some(word) = words.next() {
            let Some(path) = word.strip_suffix("[-d") else {
                arguments.push(self.parse_source_argument(word)?);
                continue;
            };
            if path.is_empty() {
                return Err(ClasspathSyntaxError::bracket(word));
            }

            let next = words.next().unwrap_or_default();
            let reported = format!("[-d {next}");
            let Some(value) = next.strip_suffix(']') else {
                return Err(ClasspathSyntaxError::IncorrectDestinationPath { entry: reported });
            };

            arguments.push(SourceArgument {
                path:        path.to_string(),
                encoding:    None,
                destination: Some(self.source_destination(value, &reported)?),
            });
        }

        Ok(arguments)
    }

    /// Validates a per-source destination value.
    fn source_destination(
        &self,
        value: &str,
        reported: &str,
    ) -> Result<Destination, ClasspathSyntaxError> {
        if value.is_empty() || value.contains(self.separator()) || value.contains(['[', ']']) {
            return Err(ClasspathSyntaxError::IncorrectDestinationPath {
                entry: reported.to_string(),
            });
        }
        Ok(Destination::from_value(value))
    }
}
