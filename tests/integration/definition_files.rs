//! Integration tests for loading hierarchy definitions from disk

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use suite_hierarchy::util::config::{load_config, ConfigError};
use suite_hierarchy::{relation, HierarchyError, SuiteHierarchy, SuiteName};
use tempfile::TempDir;

/// Helper function to create a definition file
fn create_definition(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const DIAMOND_JSON: &str = r#"{
    "hierarchy": {
        "A": {"B": {"C": {"E": {}}, "D": {}}},
        "P": {"Q": {"B": {}}}
    },
    "suites": {
        "A": ["t1", "t2", "t3"],
        "B": ["t1", "t2", "t3", "t4"],
        "C": ["t1", "t2", "t3", "t5"],
        "D": ["t2", "t3", "t5", "t6"],
        "E": ["t1", "t2", "t3", "t7"],
        "P": ["t1"],
        "Q": ["t1", "t7"]
    }
}"#;

const DIAMOND_TOML: &str = r#"
[hierarchy]
A = { B = {} }
P = { Q = { B = {} } }
B = { C = { E = {} }, D = {} }

[suites]
A = ["t1", "t2", "t3"]
B = ["t1", "t2", "t3", "t4"]
C = ["t1", "t2", "t3", "t5"]
D = ["t2", "t3", "t5", "t6"]
E = ["t1", "t2", "t3", "t7"]
P = ["t1"]
Q = ["t1", "t7"]
"#;

#[test]
fn test_json_definition_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_definition(&temp_dir, "hierarchy.json", DIAMOND_JSON);

    let hierarchy = load_config(&path).unwrap().build().unwrap();
    let minimal = hierarchy.minimal_test_sets().unwrap();

    assert_eq!(minimal["A"], set(&["t1", "t2", "t3"]));
    assert_eq!(minimal["B"], set(&["t4"]));
    assert_eq!(minimal["C"], set(&["t5"]));
    assert_eq!(minimal["D"], set(&["t5", "t6"]));
    assert_eq!(minimal["E"], set(&[]));
    assert_eq!(minimal["P"], set(&["t1"]));
    assert_eq!(minimal["Q"], set(&["t7"]));
}

#[test]
fn test_json_and_toml_spellings_agree() {
    let temp_dir = TempDir::new().unwrap();
    let json = create_definition(&temp_dir, "a.json", DIAMOND_JSON);
    let toml = create_definition(&temp_dir, "b.toml", DIAMOND_TOML);

    let from_json = load_config(&json).unwrap().build().unwrap();
    let from_toml = load_config(&toml).unwrap().build().unwrap();
    assert_eq!(from_json.dag(), from_toml.dag());
    assert_eq!(from_json.tests(), from_toml.tests());
}

#[test]
fn test_file_matches_literal_relation() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_definition(&temp_dir, "hierarchy.json", DIAMOND_JSON);

    let config = load_config(&path).unwrap();
    let literal = SuiteHierarchy::new(
        &relation! {
            "A" => { "B" => { "C" => { "E" => {} }, "D" => {} } },
            "P" => { "Q" => { "B" => {} } },
        },
        config.suites.clone(),
    )
    .unwrap();
    assert_eq!(config.build().unwrap(), literal);
}

#[test]
fn test_missing_ancestor_list_surfaces() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_definition(
        &temp_dir,
        "partial.json",
        r#"{"hierarchy": {"A": {"B": {}}}, "suites": {"B": ["t1"]}}"#,
    );

    let hierarchy = load_config(&path).unwrap().build().unwrap();
    assert_eq!(
        hierarchy.minimal_test_set("B").unwrap_err(),
        HierarchyError::MissingAncestorTests {
            suite: SuiteName::from("B"),
            ancestor: SuiteName::from("A"),
        }
    );
}

#[test]
fn test_cyclic_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_definition(
        &temp_dir,
        "cycle.toml",
        "[hierarchy]\nA = { B = {} }\nB = { A = {} }\n",
    );

    let err = load_config(&path).unwrap().build().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Hierarchy(HierarchyError::Cycle { .. })
    ));
    assert!(err.to_string().contains("Cycle"));
}

#[test]
fn test_invalid_toml_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_definition(&temp_dir, "broken.toml", "[hierarchy\nA = {");
    assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn test_suite_outside_hierarchy_keeps_full_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_definition(
        &temp_dir,
        "extra.json",
        r#"{
            "hierarchy": {"A": {"B": {}}},
            "suites": {"A": ["t1"], "B": ["t1", "t2"], "X": ["t1"]}
        }"#,
    );

    let hierarchy = load_config(&path).unwrap().build().unwrap();
    let minimal = hierarchy.minimal_test_sets().unwrap();
    assert_eq!(minimal["B"], set(&["t2"]));
    assert_eq!(minimal["X"], set(&["t1"]));
}
