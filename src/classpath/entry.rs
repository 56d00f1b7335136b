#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::config::default_separator;

/// Destination value meaning "do not write class files for this entry".
pub const NONE: &str = "none";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Visibility granted by an access rule.
pub enum AccessRuleKind {
    /// `+`: types matching the pattern are accessible.
    Accessible,
    /// `~`: access is allowed but reported as discouraged.
    Discouraged,
    /// `-`: access is forbidden.
    Forbidden,
    /// `?`: forbidden here, but lookup keeps going for an accessible copy of
    /// the type further down the path.
    IgnoreIfBetter,
}

impl AccessRuleKind {
    /// Maps a rule prefix character to its kind.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Accessible),
            '~' => Some(Self::Discouraged),
            '-' => Some(Self::Forbidden),
            '?' => Some(Self::IgnoreIfBetter),
            _ => None,
        }
    }

    /// The prefix character used on the command line.
    pub fn as_char(self) -> char {
        match self {
            Self::Accessible => '+',
            Self::Discouraged => '~',
            Self::Forbidden => '-',
            Self::IgnoreIfBetter => '?',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// A visibility kind paired with a raw type-name pattern.
pub struct AccessRule {
    /// Visibility granted to matching types.
    kind:    AccessRuleKind,
    /// Pattern text after the kind character, uninterpreted.
    pattern: String,
}

impl AccessRule {
    /// Creates a new rule.
    pub fn new(kind: AccessRuleKind, pattern: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }

    /// Visibility kind.
    pub fn kind(&self) -> AccessRuleKind {
        self.kind
    }

    /// Raw pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Display for AccessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.as_char(), self.pattern)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Output-directory override carried by an entry or a source argument.
pub enum Destination {
    /// Class files go to this directory.
    Directory(String),
    /// No class files are written (`-d none`).
    None,
}

impl Destination {
    /// Interprets a `-d` value, mapping `none` to the sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == NONE {
            Self::None
        } else {
            Self::Directory(value.to_string())
        }
    }

    /// The directory, unless this is the `none` sentinel.
    pub fn directory(&self) -> Option<&str> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::None => None,
        }
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(dir) => f.write_str(dir),
            Self::None => f.write_str(NONE),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The compiler option an entry was given to.
pub enum EntryRole {
    /// `-classpath` / `-cp`
    Classpath,
    /// `-sourcepath`
    Sourcepath,
    /// `-bootclasspath`
    Bootclasspath,
    /// `-extdirs`
    Extdirs,
    /// `-endorseddirs`
    Endorseddirs,
}

impl EntryRole {
    /// Every role, in command-line order.
    pub const ALL: [EntryRole; 5] = [
        EntryRole::Classpath,
        EntryRole::Sourcepath,
        EntryRole::Bootclasspath,
        EntryRole::Extdirs,
        EntryRole::Endorseddirs,
    ];

    /// The option name as javac spells it.
    pub fn option_name(self) -> &'static str {
        match self {
            Self::Classpath => "-classpath",
            Self::Sourcepath => "-sourcepath",
            Self::Bootclasspath => "-bootclasspath",
            Self::Extdirs => "-extdirs",
            Self::Endorseddirs => "-endorseddirs",
        }
    }

    /// Option name used in the "unexpected destination path entry" message.
    /// `-extdirs` is reported as `-extdir`.
    pub(crate) fn diagnostic_name(self) -> &'static str {
        match self {
            Self::Extdirs => "-extdir",
            other => other.option_name(),
        }
    }

    /// Whether entries of this role may carry a `[-d dir]` clause at all.
    pub fn accepts_destination(self) -> bool {
        !matches!(self, Self::Extdirs | Self::Endorseddirs)
    }

    /// Whether archives given to this role are binary-only inputs that cannot
    /// receive generated output.
    pub fn rejects_destination_on_archives(self) -> bool {
        matches!(self, Self::Classpath | Self::Bootclasspath)
    }
}

impl Display for EntryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_name())
    }
}

impl FromStr for EntryRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('-').to_ascii_lowercase().as_str() {
            "classpath" | "cp" => Ok(Self::Classpath),
            "sourcepath" => Ok(Self::Sourcepath),
            "bootclasspath" => Ok(Self::Bootclasspath),
            "extdirs" => Ok(Self::Extdirs),
            "endorseddirs" => Ok(Self::Endorseddirs),
            other => Err(format!(
                "unknown role `{other}`, expected one of: {}",
                Self::ALL.iter().join(", ")
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One parsed segment of a path option value.
pub struct ClasspathEntry {
    /// Directory or archive path, brackets included when they are part of
    /// the file name.
    base_path:    String,
    /// Access rules in command-line order; the first matching rule wins.
    access_rules: Vec<AccessRule>,
    /// `None` means the global output directory applies.
    destination:  Option<Destination>,
}

impl ClasspathEntry {
    /// Creates an entry from its parts.
    pub fn new(
        base_path: impl Into<String>,
        access_rules: Vec<AccessRule>,
        destination: Option<Destination>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            access_rules,
            destination,
        }
    }

    /// Creates an entry with no rules and no destination.
    pub fn plain(base_path: impl Into<String>) -> Self {
        Self::new(base_path, Vec::new(), None)
    }

    /// The base path.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The access rules, in order.
    pub fn access_rules(&self) -> &[AccessRule] {
        &self.access_rules
    }

    /// The destination override, if any.
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    /// Renders the canonical command-line form: the base path, one clause
    /// holding every rule, then the destination clause.
    pub fn render(&self, separator: char) -> String {
        let mut out = self.base_path.clone();
        if !self.access_rules.is_empty() {
            out.push('[');
            out.push_str(&self.access_rules.iter().join(&separator.to_string()));
            out.push(']');
        }
        if let Some(destination) = &self.destination {
            out.push_str(&format!("[-d {destination}]"));
        }
        out
    }
}

impl Display for ClasspathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(default_separator()))
    }
}
