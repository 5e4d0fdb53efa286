//! Built-in checks run through the Checker on small Java sources.

use stylecheck_engine::{AuditEvent, CheckRegistry, Checker, Configuration};

fn run(check: Configuration, source: &str) -> Vec<AuditEvent> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sample.java");
    std::fs::write(&path, source).unwrap();

    let config = Configuration::new("Checker")
        .with_child(Configuration::new("TreeWalker").with_child(check));
    let registry = CheckRegistry::with_builtins();
    let mut events: Vec<AuditEvent> = Vec::new();
    let mut checker = Checker::new();
    checker.configure(&config, &registry).expect("configure");
    checker.add_listener(&mut events);
    checker.process(&[path]).expect("process");
    checker.destroy();
    events
}

fn lines(events: &[AuditEvent]) -> Vec<u32> {
    events.iter().map(|e| e.line).collect()
}

#[test]
fn test_line_length_reports_long_lines_with_length() {
    let source = "class A {\n    int abcdefghijklmnop = 1;\n}\n";
    let events = run(
        Configuration::new("LineLengthCheck").with_property("max", "20"),
        source,
    );
    assert_eq!(lines(&events), vec![2]);
    assert_eq!(
        events[0].message,
        "Line is longer than 20 characters (found 29)."
    );
    assert_eq!(events[0].check_id, "LineLengthCheck");
}

#[test]
fn test_line_length_ignore_pattern() {
    let source = "import java.util.concurrent.ConcurrentHashMap;\nclass A {\n}\n";
    let events = run(
        Configuration::new("LineLength")
            .with_property("max", "20")
            .with_property("ignorePattern", "^import "),
        source,
    );
    assert!(events.is_empty(), "{events:?}");
}

#[test]
fn test_regexp_singleline_uses_custom_message_and_column() {
    let source = "class A {\n    void f() {\n        System.out.println();\n    }\n}\n";
    let events = run(
        Configuration::new("RegexpSinglelineCheck")
            .with_property("format", "System\\.out")
            .with_property("message", "Use a logger"),
        source,
    );
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].line, 3);
    assert_eq!(events[0].column, 9);
    assert_eq!(events[0].message, "Use a logger");
}

#[test]
fn test_regexp_singleline_ignore_case_and_default_message() {
    let source = "class A {\n    // todo: fix\n}\n";
    let events = run(
        Configuration::new("RegexpSinglelineCheck")
            .with_property("format", "TODO")
            .with_property("ignoreCase", "true"),
        source,
    );
    assert_eq!(lines(&events), vec![2]);
    assert_eq!(events[0].message, "Line matches the illegal pattern 'TODO'.");
}

#[test]
fn test_empty_lines_only_inside_method_bodies() {
    let source = r#"class A {
    void f() {
        int a = 1;

        int b = 2;
    }

    void g() {
    }
}
"#;
    let events = run(Configuration::new("EmptyLinesCheck"), source);
    assert_eq!(lines(&events), vec![4]);
    assert_eq!(events[0].message, "Empty line inside method");
}

#[test]
fn test_empty_lines_in_constructor() {
    let source = r#"class A {
    private final int x;

    A() {

        this.x = 1;
    }
}
"#;
    let events = run(Configuration::new("EmptyLinesCheck"), source);
    assert_eq!(lines(&events), vec![5]);
}

#[test]
fn test_method_body_comments_ignore_class_level_comments() {
    let source = r#"class A {
    // field comment
    int x;
    /** Doc. */
    void f() {
        int a = 1; // trailing
        /* block */
        int b = a;
    }
}
"#;
    let events = run(Configuration::new("MethodBodyCommentsCheck"), source);
    assert_eq!(lines(&events), vec![6, 7]);
    assert!(events
        .iter()
        .all(|e| e.message == "Comments inside method body are prohibited"));
}

#[test]
fn test_string_concatenation_reports_each_chain_once() {
    let source = r#"class A {
    String f(String b) {
        String s = "a" + b + "c";
        int n = 1 + 2;
        String t = b + b;
        return "x" + s + t + n;
    }
}
"#;
    let events = run(Configuration::new("StringLiteralsConcatenationCheck"), source);
    assert_eq!(lines(&events), vec![3, 6]);
    assert!(events
        .iter()
        .all(|e| e.message == "Concatenation of string literals prohibited"));
}

#[test]
fn test_events_are_sorted_by_line_across_checks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Sample.java");
    std::fs::write(
        &path,
        "class A {\n    void f() {\n        // one\n\n        int a = 1;\n    }\n}\n",
    )
    .unwrap();
    let config = Configuration::new("Checker")
        .with_child(Configuration::new("EmptyLinesCheck"))
        .with_child(Configuration::new("MethodBodyCommentsCheck"));
    let registry = CheckRegistry::with_builtins();
    let mut events: Vec<AuditEvent> = Vec::new();
    {
        let mut checker = Checker::new();
        checker.configure(&config, &registry).unwrap();
        checker.add_listener(&mut events);
        checker.process(&[path]).unwrap();
    }
    assert_eq!(lines(&events), vec![3, 4]);
    assert_eq!(events[0].check_id, "MethodBodyCommentsCheck");
    assert_eq!(events[1].check_id, "EmptyLinesCheck");
}

#[test]
fn test_registry_lists_builtins() {
    let registry = CheckRegistry::with_builtins();
    assert_eq!(registry.count(), 5);
    assert!(registry.contains("EmptyLines"));
    assert!(registry.contains("EmptyLinesCheck"));
    assert!(!registry.contains("ConstantUsageCheck"));
    assert_eq!(registry.names()[0], "EmptyLinesCheck");
}
