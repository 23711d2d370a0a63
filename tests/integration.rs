//! Integration tests for treeloc


use assert_cmd::Command;
use harness::{TestRepo, run_treeloc};
use predicates::prelude::*;

#[test]
fn test_basic_tree_output() {
    let repo = TestRepo::new();
    repo.add_file("main.go", "package main\n\nfunc main() {}\n");
    repo.add_file("util.go", "package main\n// helper\nfunc util() {}\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success, "treeloc should succeed");
    assert!(stdout.starts_with("Total 2 files:\n\n"), "header: {}", stdout);
    assert!(stdout.contains("├── main.go  2 lines"), "{}", stdout);
    assert!(stdout.contains("└── util.go  2 lines"), "{}", stdout);
}

#[test]
fn test_exact_layout() {
    let repo = TestRepo::new();
    repo.add_file("cmd/app/main.go", "package main\n\nfunc main() {\n}\n");
    repo.add_file("pkg/a.go", "package pkg\n/* doc\n   block */\nvar A = 1\n");
    repo.add_file("pkg/b.go", "package pkg\n");
    repo.add_file("README.md", "# readme\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success);

    let expected = format!(
        "Total 3 files:\n\
         \n\
         {}  6 lines\n    \
         ├── cmd  3 lines\n    \
         │   └── app  3 lines\n    \
         │       └── main.go  3 lines\n    \
         └── pkg  3 lines\n    \
         \x20   ├── a.go  2 lines\n    \
         \x20   └── b.go  1 lines\n",
        repo.root_name()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn test_no_matching_files() {
    let repo = TestRepo::new();
    repo.add_file("notes.txt", "hello\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success, "no matches is not an error");
    assert!(
        stdout.starts_with("No .go files found under: "),
        "unexpected output: {}",
        stdout
    );
    assert!(!stdout.contains("Total"));
}

#[test]
fn test_only_zero_line_files() {
    let repo = TestRepo::new();
    repo.add_file("doc.go", "// Package doc is only a comment\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "Total 1 files:\n\n");
}

#[test]
fn test_comment_markers_in_strings() {
    let repo = TestRepo::new();
    repo.add_file(
        "urls.go",
        "package urls\nvar u = \"http://example.com\"\nvar r = `/* raw */`\nvar c = '/'\n",
    );

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("urls.go  4 lines"), "{}", stdout);
}

#[test]
fn test_custom_extension() {
    let repo = TestRepo::new();
    repo.add_file("src/lib.rs", "pub fn f() {}\n// note\n");
    repo.add_file("main.go", "package main\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &["--ext", ".RS"]);
    assert!(success);
    assert!(stdout.starts_with("Total 1 files:"), "{}", stdout);
    assert!(stdout.contains("lib.rs  1 lines"));
    assert!(!stdout.contains("main.go"));

    let (stdout, _stderr, _) = run_treeloc(repo.path(), &["-e", "py"]);
    assert!(stdout.starts_with("No .py files found under: "));
}

#[test]
fn test_extension_case_insensitive() {
    let repo = TestRepo::new();
    repo.add_file("UPPER.GO", "package upper\n");
    repo.add_file("lower.go", "package lower\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success);
    assert!(stdout.starts_with("Total 2 files:"));
    assert!(stdout.contains("UPPER.GO  1 lines"));
}

#[test]
fn test_case_insensitive_sort() {
    let repo = TestRepo::new();
    repo.add_file("banana.go", "package b\n");
    repo.add_file("Apple.go", "package a\n");
    repo.add_file("Cherry/c.go", "package c\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success);

    let apple = stdout.find("Apple.go").unwrap();
    let banana = stdout.find("banana.go").unwrap();
    let cherry = stdout.find("Cherry").unwrap();
    assert!(apple < banana, "Apple should come before banana");
    assert!(banana < cherry, "banana should come before Cherry");
}

#[test]
fn test_empty_directories_pruned() {
    let repo = TestRepo::new();
    repo.add_file("keep/main.go", "package keep\n");
    repo.add_file("docs/guide.md", "# guide\n");
    repo.add_dir("empty");
    repo.add_file("comments/only.go", "// nothing here\n/* or here */\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("keep  1 lines"));
    assert!(!stdout.contains("docs"));
    assert!(!stdout.contains("empty"));
    assert!(!stdout.contains("comments"));
}

#[test]
fn test_zero_line_file_shown_next_to_contributor() {
    let repo = TestRepo::new();
    repo.add_file("pkg/code.go", "package pkg\n");
    repo.add_file("pkg/doc.go", "// Package pkg\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success);
    assert!(stdout.contains("doc.go  0 lines"), "{}", stdout);
}

#[test]
fn test_ignore_pattern() {
    let repo = TestRepo::new();
    repo.add_file("main.go", "package main\n");
    repo.add_file("vendor/dep/dep.go", "package dep\nvar X = 1\n");
    repo.add_file("main_test.go", "package main\n");

    let (stdout, _stderr, success) =
        run_treeloc(repo.path(), &["-I", "vendor", "--ignore", "*_test.go"]);
    assert!(success);
    assert!(stdout.starts_with("Total 1 files:"), "{}", stdout);
    assert!(!stdout.contains("vendor"));
    assert!(!stdout.contains("main_test.go"));
}

#[test]
fn test_invalid_ignore_pattern() {
    let repo = TestRepo::new();
    repo.add_file("main.go", "package main\n");

    let (_stdout, stderr, success) = run_treeloc(repo.path(), &["-I", "[unclosed"]);
    assert!(!success);
    assert!(stderr.contains("treeloc: invalid glob pattern"), "{}", stderr);
}

#[test]
fn test_parallel_matches_sequential() {
    let repo = TestRepo::new();
    for d in 0..4 {
        for f in 0..10 {
            let body = "package p\n// comment\nvar x = 1\n".repeat(f + 1);
            repo.add_file(&format!("d{}/f{}.go", d, f), &body);
        }
    }

    let (sequential, _, ok1) = run_treeloc(repo.path(), &["-j", "1"]);
    let (auto, _, ok2) = run_treeloc(repo.path(), &["-j", "0"]);
    let (four, _, ok3) = run_treeloc(repo.path(), &["--jobs", "4"]);
    assert!(ok1 && ok2 && ok3);
    assert_eq!(sequential, auto);
    assert_eq!(sequential, four);
}

#[test]
fn test_output_is_deterministic() {
    let repo = TestRepo::new();
    repo.add_file("b/x.go", "package b\n");
    repo.add_file("a/y.go", "package a\n");
    repo.add_file("A2/z.go", "package a2\n");

    let (first, _, _) = run_treeloc(repo.path(), &[]);
    let (second, _, _) = run_treeloc(repo.path(), &[]);
    assert_eq!(first, second);
}

#[test]
fn test_json_output() {
    let repo = TestRepo::new();
    repo.add_file("main.go", "package main\n\nfunc main() {}\n");
    repo.add_file("pkg/lib.go", "package pkg\n");
    repo.add_file("pkg/notes.txt", "text\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &["--json"]);
    assert!(success);

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["type"], "dir");
    assert_eq!(json["lines"], 3);

    let children = json["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["name"], "main.go");
    assert_eq!(children[0]["type"], "file");
    assert_eq!(children[1]["name"], "pkg");
    assert_eq!(children[1]["children"].as_array().unwrap().len(), 1);
}

#[test]
fn test_piped_output_has_no_progress_or_escapes() {
    let repo = TestRepo::new();
    repo.add_file("main.go", "package main\n");

    let (stdout, _stderr, success) = run_treeloc(repo.path(), &[]);
    assert!(success);
    assert!(!stdout.contains("Loading"));
    assert!(!stdout.contains("Done."));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_forced_color() {
    let repo = TestRepo::new();
    repo.add_file("main.go", "package main\n");

    Command::cargo_bin("treeloc")
        .unwrap()
        .current_dir(repo.path())
        .env_remove("NO_COLOR")
        .env("TERM", "xterm")
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn test_color_always_ignores_environment() {
    let repo = TestRepo::new();
    repo.add_file("main.go", "package main\n");

    Command::cargo_bin("treeloc")
        .unwrap()
        .current_dir(repo.path())
        .env_remove("NO_COLOR")
        .env_remove("TERM")
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));

    Command::cargo_bin("treeloc")
        .unwrap()
        .current_dir(repo.path())
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn test_color_never_ignores_force_color() {
    let repo = TestRepo::new();
    repo.add_file("main.go", "package main\n");

    Command::cargo_bin("treeloc")
        .unwrap()
        .current_dir(repo.path())
        .env("FORCE_COLOR", "1")
        .env("TERM", "xterm")
        .args(["--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_nonexistent_path_fails() {
    let repo = TestRepo::new();

    Command::cargo_bin("treeloc")
        .unwrap()
        .current_dir(repo.path())
        .arg("does/not/exist")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("treeloc: failed to resolve path"));
}

#[test]
fn test_explicit_path_argument() {
    let repo = TestRepo::new();
    repo.add_file("project/main.go", "package main\n");

    Command::cargo_bin("treeloc")
        .unwrap()
        .current_dir(repo.path())
        .env("NO_COLOR", "1")
        .arg("project")
        .assert()
        .success()
        .stdout(predicate::str::contains("project  1 lines"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("treeloc")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("treeloc"));
}
