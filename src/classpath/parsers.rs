#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::classpath::entry::{AccessRule, AccessRuleKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Body of one `[...]` clause, borrowed from the raw entry.
pub enum ClauseBody<'a> {
    /// `-d dir`: the text after `-d` and its whitespace, verbatim.
    Destination(&'a str),
    /// Rule tokens, split on the separator, not yet validated.
    Rules(Vec<&'a str>),
}

peg::parser! {
    /// Grammars for the text between the brackets of a path entry clause.
    /// `separator` is the path-list separator, which also splits rule lists.
    pub grammar clause(separator: char) for str {
        /// matches any number of whitespace characters
        rule whitespace() = quiet!{[' ' | '\t' | '\n' | '\r']+}

        /// matches one rule kind character
        rule kind() -> AccessRuleKind
            = "+" { AccessRuleKind::Accessible }
            / "~" { AccessRuleKind::Discouraged }
            / "-" { AccessRuleKind::Forbidden }
            / "?" { AccessRuleKind::IgnoreIfBetter }

        /// matches a run of anything but the separator, possibly empty
        rule token() -> &'input str
            = $([c if c != separator]*)

        /// matches `-d` and its whitespace, returns the value after it
        rule destination() -> &'input str
            = "-d" whitespace() v:$([_]*) { v }

        /// parses a whole clause body; a body starting with `-d ` is always a
        /// destination, anything else is a rule list
        pub rule body() -> ClauseBody<'input>
            = v:destination() { ClauseBody::Destination(v) }
            / t:(token() ** [c if c == separator]) { ClauseBody::Rules(t) }

        /// parses one rule token such as `+java/lang/*` or `-KO`
        pub rule access_rule() -> AccessRule
            = k:kind() p:$([_]*) { AccessRule::new(k, p) }

        /// parses a charset name such as `UTF-8` or `ISO-8859-1`
        pub rule encoding() -> &'input str
            = $(['a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | ':' | '+']+)

        /// succeeds if a bracket group holding this text is a clause rather
        /// than part of a file name
        pub rule clause_start()
            = "-d" whitespace() [_]* { }
            / kind() [_]* { }
    }
}
