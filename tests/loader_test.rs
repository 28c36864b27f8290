//! Tests for loading and validating the built-in roadmap literals

use rstest::rstest;

use rsroadmap::util::testing;
use rsroadmap::{load_all, load_git, load_pyspark, parse_roadmap, RoadmapError, RoadmapId};

// ============================================================
// Built-in Literal Tests
// ============================================================

#[test]
fn given_git_literal_when_loading_then_returns_expected_root() {
    testing::init_test_setup();

    let roadmap = load_git().unwrap();

    assert_eq!(roadmap.title(), "The Ultimate Git Roadmap");
    let fundamentals = &roadmap.root.children[0];
    assert_eq!(fundamentals.name, "Git Fundamentals");
    let version_control = &fundamentals.children[0];
    assert_eq!(version_control.name, "What is Version Control?");
    assert_eq!(version_control.children.len(), 2);
    assert!(version_control.children.iter().all(|c| c.is_leaf()));
}

#[test]
fn given_pyspark_literal_when_loading_then_second_child_is_session_setup() {
    let roadmap = load_pyspark().unwrap();

    assert_eq!(roadmap.title(), "The Ultimate PySpark Roadmap");
    assert_eq!(roadmap.root.children[1].name, "Setup & SparkSession");
}

#[test]
fn given_builtin_literals_when_loading_then_totals_match() {
    let git = load_git().unwrap().root;
    assert_eq!(git.node_count(), 527);
    assert_eq!(git.depth(), 6);
    assert_eq!(git.iter().filter(|n| n.code.is_some()).count(), 0);

    let pyspark = load_pyspark().unwrap().root;
    assert_eq!(pyspark.node_count(), 408);
    assert_eq!(pyspark.depth(), 5);
    assert_eq!(pyspark.iter().filter(|n| n.code.is_some()).count(), 36);
}

#[test]
fn given_builtin_literals_when_loading_then_every_name_is_non_empty() {
    for roadmap in load_all().unwrap() {
        assert!(
            roadmap.root.iter().all(|n| !n.name.trim().is_empty()),
            "{} contains an unnamed node",
            roadmap.id
        );
    }
}

#[test]
fn given_all_roadmap_ids_when_loading_then_ids_and_keys_line_up() {
    let roadmaps = load_all().unwrap();

    assert_eq!(roadmaps.len(), RoadmapId::ALL.len());
    let keys: Vec<_> = roadmaps.iter().map(|r| r.id.key()).collect();
    assert_eq!(keys, vec!["git", "pyspark"]);
}

#[test]
fn given_same_literal_when_loading_twice_then_trees_are_deeply_equal() {
    let first = load_git().unwrap();
    let second = load_git().unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_loaded_tree_when_round_tripping_then_trees_are_equal() {
    let roadmap = load_pyspark().unwrap();

    let json = serde_json::to_string(&roadmap.root).unwrap();
    let reparsed = parse_roadmap(&json).unwrap();

    assert_eq!(reparsed, roadmap.root);
}

// ============================================================
// Malformed Literal Tests
// ============================================================

#[rstest]
#[case::empty_root_name(r#"{"name": ""}"#)]
#[case::blank_root_name(r#"{"name": "   "}"#)]
#[case::empty_child_name(r#"{"name": "root", "children": [{"name": ""}]}"#)]
fn given_empty_name_when_parsing_then_rejects_whole_load(#[case] literal: &str) {
    let result = parse_roadmap(literal);

    assert!(matches!(result, Err(RoadmapError::MalformedNode { .. })));
}

#[test]
fn given_nested_empty_name_when_parsing_then_error_carries_parent_path() {
    let literal =
        r#"{"name": "root", "children": [{"name": "topic", "children": [{"name": ""}]}]}"#;

    match parse_roadmap(literal) {
        Err(RoadmapError::MalformedNode { path, .. }) => assert_eq!(path, "root / topic"),
        other => panic!("expected MalformedNode, got {:?}", other),
    }
}

#[rstest]
#[case::missing_name(r#"{"children": []}"#)]
#[case::unknown_field(r#"{"name": "root", "extra": 1}"#)]
#[case::not_json("not json at all")]
fn given_invalid_literal_when_parsing_then_parse_error(#[case] literal: &str) {
    assert!(matches!(parse_roadmap(literal), Err(RoadmapError::Parse(_))));
}

// ============================================================
// Optional Field Tests
// ============================================================

#[test]
fn given_minimal_leaf_literal_when_parsing_then_optional_fields_default() {
    let node = parse_roadmap(r#"{"name": "solo"}"#).unwrap();

    assert!(node.is_leaf());
    assert!(node.code.is_none());
}

#[test]
fn given_node_with_code_when_parsing_then_snippet_is_kept() {
    let node = parse_roadmap(r#"{"name": "example", "code": "print(1)"}"#).unwrap();

    assert_eq!(node.code.as_deref(), Some("print(1)"));
}
