#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::classpath::{
    entry::{ClasspathEntry, EntryRole},
    error::ClasspathSyntaxError,
    parser::ClasspathEntryParser,
};

/// Splits a path option value on `separator`, ignoring separators inside
/// bracket groups. Empty segments are dropped.
///
/// * `value`: the full option value, e.g. `lib/a.jar[+p/*;-q/*]:bin`
/// * `separator`: the path-list separator
pub fn split_path_list(value: &str, separator: char) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in value.char_indices() {
        match c {
            '[' => depth += 1,
            // a stray closer is left for the entry parser to report
            ']' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                segments.push(&value[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    segments.push(&value[start..]);

    segments.retain(|segment| !segment.is_empty());
    segments
}

/// Entries that parsed, plus the errors of the ones that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LenientPathList {
    /// Entries in command-line order.
    entries: Vec<ClasspathEntry>,
    /// One error per dropped segment, in command-line order.
    errors:  Vec<ClasspathSyntaxError>,
}

impl LenientPathList {
    /// Entries that parsed.
    pub fn entries(&self) -> &[ClasspathEntry] {
        &self.entries
    }

    /// Errors of the dropped segments.
    pub fn errors(&self) -> &[ClasspathSyntaxError] {
        &self.errors
    }

    /// Splits into entries and errors.
    pub fn into_parts(self) -> (Vec<ClasspathEntry>, Vec<ClasspathSyntaxError>) {
        (self.entries, self.errors)
    }
}

impl ClasspathEntryParser {
    /// Parses a whole option value; the first bad segment fails the list.
    pub fn parse_path_list(
        &self,
        value: &str,
        role: EntryRole,
    ) -> Result<Vec<ClasspathEntry>, ClasspathSyntaxError> {
        split_path_list(value, self.separator())
            .into_iter()
            .map(|segment| self.parse(segment, role))
            .collect()
    }

    /// Parses a whole option value, skipping bad segments and keeping the
    /// rest of the path.
    pub fn parse_path_list_lenient(&self, value: &str, role: EntryRole) -> LenientPathList {
        let mut list = LenientPathList::default();

        for segment in split_path_list(value, self.separator()) {
            match self.parse(segment, role) {
                Ok(entry) => list.entries.push(entry),
                Err(e) => {
                    tracing::warn!("Skipping {role} entry `{segment}`: {e}");
                    list.errors.push(e);
                }
            }
        }

        list
    }
}

/// Net count of `[` over `]` in `word`.
fn bracket_balance(word: &str) -> i32 {
    word.chars().fold(0, |count, c| match c {
        '[' => count + 1,
        ']' => count - 1,
        _ => count,
    })
}

/// Rejoins an option value that the shell split inside a bracket group, as
/// in `-cp 'lib[-d' 'out]'`.
///
/// `words[0]` is the option value; following words are appended, separated by
/// one space, until brackets balance. Returns the joined value and how many
/// words after the first were consumed.
pub fn join_bracketed_args<S: AsRef<str>>(
    words: &[S],
) -> Result<(String, usize), ClasspathSyntaxError> {
    let Some(first) = words.first() else {
        return Ok((String::new(), 0));
    };
    let current: &str = first.as_ref();

    let mut count = bracket_balance(current);
    if count == 0 {
        return Ok((current.to_string(), 0));
    }
    if count != 1 {
        return Err(ClasspathSyntaxError::bracket(current));
    }

    let mut joined = current.to_string();
    for (consumed, word) in words.iter().enumerate().skip(1) {
        let word: &str = word.as_ref();
        for c in word.chars() {
            match c {
                '[' if count > 0 => return Err(ClasspathSyntaxError::bracket(word)),
                '[' => count += 1,
                ']' => count -= 1,
                _ => {}
            }
        }

        joined.push(' ');
        joined.push_str(word);

        if count == 0 {
            tracing::debug!("Joined {} word(s) into `{joined}`", consumed + 1);
            return Ok((joined, consumed));
        }
        if count < 0 {
            return Err(ClasspathSyntaxError::bracket(word));
        }
    }

    Err(ClasspathSyntaxError::bracket(current))
}
