use cpentry::classpath::{
    AccessRule, AccessRuleKind, ClasspathEntry, ClasspathEntryParser, ClasspathSyntaxError,
    Destination, EntryRole, parse_entry,
};

fn parser() -> ClasspathEntryParser {
    ClasspathEntryParser::with_separator(';')
}

fn rule(kind: AccessRuleKind, pattern: &str) -> AccessRule {
    AccessRule::new(kind, pattern)
}

fn error_text(raw: &str, role: EntryRole) -> String {
    parser()
        .parse(raw, role)
        .expect_err("entry should be rejected")
        .to_string()
}

#[test]
fn rules_keep_their_order() {
    let entry = parser()
        .parse("OUTPUT[+OK2;-KO]", EntryRole::Classpath)
        .expect("parse rule list");

    assert_eq!(entry.base_path(), "OUTPUT");
    assert_eq!(
        entry.access_rules(),
        &[
            rule(AccessRuleKind::Accessible, "OK2"),
            rule(AccessRuleKind::Forbidden, "KO"),
        ]
    );
    assert_eq!(entry.destination(), None);
}

#[test]
fn every_kind_character_is_recognised() {
    let entry = parser()
        .parse("lib/x.jar[+a/*;~b/*;-c/*;?d/**]", EntryRole::Classpath)
        .expect("parse all kinds");

    let kinds: Vec<_> = entry.access_rules().iter().map(AccessRule::kind).collect();
    assert_eq!(
        kinds,
        vec![
            AccessRuleKind::Accessible,
            AccessRuleKind::Discouraged,
            AccessRuleKind::Forbidden,
            AccessRuleKind::IgnoreIfBetter,
        ]
    );
    assert_eq!(entry.access_rules()[3].pattern(), "d/**");
}

#[test]
fn rules_across_several_clauses_are_concatenated() {
    let entry = parser()
        .parse("bin[+p1/*][-p2/*;~p3/*]", EntryRole::Sourcepath)
        .expect("parse two rule clauses");

    assert_eq!(
        entry.access_rules(),
        &[
            rule(AccessRuleKind::Accessible, "p1/*"),
            rule(AccessRuleKind::Forbidden, "p2/*"),
            rule(AccessRuleKind::Discouraged, "p3/*"),
        ]
    );
}

#[test]
fn destination_clause_alone() {
    let entry = parser()
        .parse("src[-d out]", EntryRole::Sourcepath)
        .expect("parse destination");

    assert!(entry.access_rules().is_empty());
    assert_eq!(entry.destination(), Some(&Destination::Directory("out".into())));
}

#[test]
fn destination_whitespace_may_be_a_tab() {
    let entry = parser()
        .parse("src[-d\tout]", EntryRole::Classpath)
        .expect("parse destination after a tab");
    assert_eq!(entry.destination().and_then(Destination::directory), Some("out"));
}

#[test]
fn destination_none_is_the_sentinel() {
    let entry = parser()
        .parse("src[-d none]", EntryRole::Classpath)
        .expect("parse -d none");
    assert_eq!(entry.destination(), Some(&Destination::None));
    assert_eq!(entry.destination().and_then(Destination::directory), None);
}

#[test]
fn rules_then_destination_is_accepted() {
    let entry = parser()
        .parse("bin[+OK][-d dir]", EntryRole::Classpath)
        .expect("parse rules then destination");

    assert_eq!(entry.access_rules(), &[rule(AccessRuleKind::Accessible, "OK")]);
    assert_eq!(entry.destination(), Some(&Destination::Directory("dir".into())));
}

#[test]
fn rules_after_destination_are_rejected() {
    assert_eq!(
        error_text("bin[-d dir][+OK]", EntryRole::Classpath),
        "access rules cannot follow destination path entries: bin[-d dir][+OK]"
    );
}

#[test]
fn later_destination_replaces_earlier_one() {
    let entry = parser()
        .parse("src[-d a][-d b]", EntryRole::Sourcepath)
        .expect("parse two destinations");
    assert_eq!(entry.destination(), Some(&Destination::Directory("b".into())));
}

#[test]
fn destination_with_separator_is_rejected() {
    let err = parser()
        .parse("OUTPUT[-d dir1;dir2]", EntryRole::Classpath)
        .expect_err("separator in destination");

    assert!(matches!(err, ClasspathSyntaxError::IncorrectDestinationPath { .. }));
    assert_eq!(err.to_string(), "incorrect destination path entry: OUTPUT[-d dir1;dir2]");
}

#[test]
fn empty_destination_is_rejected() {
    assert_eq!(
        error_text("src[-d ]", EntryRole::Sourcepath),
        "incorrect destination path entry: src[-d ]"
    );
}

#[test]
fn dash_d_inside_a_rule_list_is_just_a_pattern() {
    let entry = parser()
        .parse("bin[+OK;-d ~Warn]", EntryRole::Classpath)
        .expect("parse rule that looks like -d");

    assert_eq!(
        entry.access_rules(),
        &[
            rule(AccessRuleKind::Accessible, "OK"),
            rule(AccessRuleKind::Forbidden, "d ~Warn"),
        ]
    );
    assert_eq!(entry.destination(), None);
}

#[test]
fn dash_d_without_whitespace_is_a_forbidden_rule() {
    let entry = parser()
        .parse("bin[-dir/*]", EntryRole::Classpath)
        .expect("parse -dir rule");
    assert_eq!(entry.access_rules(), &[rule(AccessRuleKind::Forbidden, "dir/*")]);
}

#[test]
fn rule_pattern_may_be_empty() {
    let entry = parser()
        .parse("bin[+]", EntryRole::Classpath)
        .expect("parse empty pattern");
    assert_eq!(entry.access_rules(), &[rule(AccessRuleKind::Accessible, "")]);
}

#[test]
fn unknown_kind_character_is_rejected() {
    let err = parser()
        .parse("bin[+OK;KO]", EntryRole::Classpath)
        .expect_err("token without kind");
    assert_eq!(
        err,
        ClasspathSyntaxError::UnsupportedEncodingFormat {
            token: "KO".into()
        }
    );
    assert_eq!(err.to_string(), "unsupported encoding format: KO");
}

#[test]
fn bracketed_file_names_keep_their_brackets() {
    let entry = parser()
        .parse("[squarebracket].jar[~**/internal/*][-d dir]", EntryRole::Sourcepath)
        .expect("parse bracketed file name");

    assert_eq!(entry.base_path(), "[squarebracket].jar");
    assert_eq!(
        entry.access_rules(),
        &[rule(AccessRuleKind::Discouraged, "**/internal/*")]
    );
    assert_eq!(entry.destination(), Some(&Destination::Directory("dir".into())));
}

#[test]
fn bracket_group_that_is_not_a_clause_stays_in_the_path() {
    let entry = parser()
        .parse("lib/[squarebracket].jar", EntryRole::Classpath)
        .expect("parse bracketed jar");
    assert_eq!(entry, ClasspathEntry::plain("lib/[squarebracket].jar"));

    let entry = parser()
        .parse("lib[v1]", EntryRole::Classpath)
        .expect("parse trailing non-clause group");
    assert_eq!(entry, ClasspathEntry::plain("lib[v1]"));
}

#[test]
fn unbalanced_brackets_report_the_trailing_text() {
    assert_eq!(
        error_text("lib.jar[+OK", EntryRole::Classpath),
        "unexpected bracket: [+OK"
    );
    assert_eq!(
        error_text("lib.jar]+OK]", EntryRole::Classpath),
        "unexpected bracket: ]+OK]"
    );
    assert_eq!(
        error_text("lib.jar[+OK[-KO]]", EntryRole::Classpath),
        "unexpected bracket: [-KO]]"
    );
}

#[test]
fn entry_made_only_of_clauses_has_no_path() {
    assert_eq!(error_text("[+OK]", EntryRole::Classpath), "unexpected bracket: [+OK]");
    assert_eq!(error_text("", EntryRole::Classpath), "incorrect classpath: ");
}

#[test]
fn extdirs_and_endorseddirs_reject_destinations() {
    assert_eq!(
        error_text("dir[-d out]", EntryRole::Extdirs),
        "unexpected destination path entry in -extdir option"
    );
    assert_eq!(
        error_text("dir[+OK][-d out]", EntryRole::Endorseddirs),
        "unexpected destination path entry in -endorseddirs option"
    );

    // the role gate wins over other syntax errors
    let err = parser()
        .parse("dir[-d a;b]", EntryRole::Extdirs)
        .expect_err("destination in extdirs");
    assert!(err.is_unexpected_destination());

    assert!(parser().parse("dir[-d out]", EntryRole::Classpath).is_ok());
    assert!(parser().parse("dir[+OK]", EntryRole::Extdirs).is_ok());
}

#[test]
fn binary_archives_reject_destinations() {
    for role in [EntryRole::Classpath, EntryRole::Bootclasspath] {
        assert_eq!(
            error_text("lib/rt.jar[-d out]", role),
            "unexpected destination path entry for file: lib/rt.jar"
        );
        assert_eq!(
            error_text("lib/src.zip[+OK][-d none]", role),
            "unexpected destination path entry for file: lib/src.zip"
        );
    }

    assert!(
        parser()
            .parse("lib/src.zip[-d out]", EntryRole::Sourcepath)
            .is_ok()
    );
    // extension matching is case-sensitive
    assert!(
        parser()
            .parse("lib/rt.JAR[-d out]", EntryRole::Classpath)
            .is_ok()
    );
}

#[test]
fn canonical_form_parses_back_to_the_same_entry() {
    let parser = parser();
    for raw in [
        "OUTPUT[+OK2;-KO]",
        "bin[+p1/*][-p2/*;~p3/*][-d out]",
        "[squarebracket].jar[~**/internal/*][-d dir]",
        "lib[v1][?x/**]",
        "src[-d none]",
        "plain/dir",
    ] {
        let entry = parser.parse(raw, EntryRole::Sourcepath).expect("parse raw entry");
        let canonical = parser.canonical(&entry);
        let reparsed = parser
            .parse(&canonical, EntryRole::Sourcepath)
            .expect("parse canonical entry");
        assert_eq!(entry, reparsed, "round trip through `{canonical}`");
    }

    let entry = parser
        .parse("bin[+p1/*][-p2/*][-d out]", EntryRole::Classpath)
        .expect("parse entry");
    assert_eq!(parser.canonical(&entry), "bin[+p1/*;-p2/*][-d out]");
}

#[test]
fn default_parser_handles_plain_paths() {
    let entry = parse_entry("some/dir", EntryRole::Classpath).expect("parse plain path");
    assert_eq!(entry, ClasspathEntry::plain("some/dir"));
    assert_eq!(entry.to_string(), "some/dir");
}

#[test]
fn entries_serialize_with_snake_case_fields() {
    let entry = parser()
        .parse("bin[?x/*][-d out]", EntryRole::Classpath)
        .expect("parse entry");
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["base_path"], "bin");
    assert_eq!(json["access_rules"][0]["kind"], "IGNORE_IF_BETTER");
    assert_eq!(json["access_rules"][0]["pattern"], "x/*");
    assert_eq!(json["destination"]["directory"], "out");
}
