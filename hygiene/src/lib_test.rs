use super::*;

fn sources(content: &str) -> Sources {
    Sources::from_files([("src/lib.rs", content)])
}

#[test]
fn hits_report_path_and_line() {
    let src = sources("fn a() {}\nfn b() { x.unwrap(); }\n");
    let hits = src.hits(UNWRAP.pattern);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "src/lib.rs");
    assert_eq!(hits[0].line, 2);
    assert_eq!(hits[0].to_string(), "  src/lib.rs:2: fn b() { x.unwrap(); }");
}

#[test]
fn comment_lines_are_skipped() {
    let src = sources("// never .unwrap() here\n    /// or x.expect(\"doc\")\n");
    assert!(src.hits(UNWRAP.pattern).is_empty());
    assert!(src.hits(EXPECT.pattern).is_empty());
}

#[test]
fn test_siblings_are_skipped() {
    let src = Sources::from_files([("src/a.rs", "ok"), ("src/a_test.rs", "x.unwrap();")]);
    assert_eq!(src.len(), 1);
    assert!(src.check(UNWRAP).is_ok());
}

#[test]
fn check_passes_at_budget_and_fails_over_it() {
    let src = sources("let v = a.ok();\nlet w = b.ok();\n");
    assert!(src.check(DOT_OK.allow(2)).is_ok());
    let err = src.check(DOT_OK.allow(1)).unwrap_err();
    assert!(err.starts_with(".ok() budget exceeded: found 2, max 1."), "{err}");
    assert!(err.contains("src/lib.rs:1:"));
    assert!(err.contains("src/lib.rs:2:"));
}

#[test]
fn check_all_joins_every_failure() {
    let src = sources("dbg!(x);\nprintln!(\"hi\");\n");
    let err = src.check_all(DEFAULT).unwrap_err();
    assert!(err.contains("dbg!( budget exceeded"));
    assert!(err.contains("println!( budget exceeded"));
    assert!(!err.contains("eprintln!( budget exceeded"));
}

#[test]
fn overrides_replace_matching_defaults_only() {
    let budgets = with_overrides(DEFAULT, &[DOT_OK.allow(3)]);
    assert_eq!(budgets.len(), DEFAULT.len());
    assert!(budgets.contains(&DOT_OK.allow(3)));
    assert!(!budgets.contains(&DOT_OK));
    assert!(budgets.contains(&UNWRAP));
}

#[test]
fn direct_index_flags_indexing_expressions() {
    for line in ["let p = pts[0];", "mask[self.index(x, y)] = true;", "&WORDS[i]", "f()[1]", "&hex[0..2]"] {
        assert!(Pattern::DirectIndex.matches(line), "{line}");
    }
}

#[test]
fn direct_index_ignores_types_attributes_macros_and_patterns() {
    for line in [
        "#[derive(Debug)]",
        "let v = vec![0; 4];",
        "fn f(xs: &[u8]) -> Box<[u8]> {",
        "[] | [_] => {}",
        "const T: &[&str] = &[\"a\"];",
        "let s = \"name[0]\";",
        "let s = \"esc \\\" name[0]\";",
    ] {
        assert!(!Pattern::DirectIndex.matches(line), "{line}");
    }
}

#[test]
fn scan_reads_a_real_tree() {
    let src = Sources::scan(concat!(env!("CARGO_MANIFEST_DIR"), "/src")).unwrap();
    // lib.rs only; lib_test.rs is a test sibling.
    assert_eq!(src.len(), 1);
}

#[test]
fn scan_of_missing_dir_is_an_error() {
    assert!(Sources::scan(concat!(env!("CARGO_MANIFEST_DIR"), "/no-such-dir")).is_err());
}
