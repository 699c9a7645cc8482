//! Scenario: Command Line Use
//!
//! Journey: a script keeps its hierarchy in a JSON file and asks `arbor`
//! for rendered markup and for traversal results.

use crate::common::*;

#[test]
fn scenario_cli_nested_children_of_root() {
    let env = TestEnv::new();
    env.write("nodes.json", ROOT_WITH_TWO_CHILDREN);

    let result = env.run(&["nested", "nodes.json", "--root", "1", "-t", "<li>@id:@name</li>"]);

    assert!(result.success, "nested failed:\n{}", result.combined_output());
    assert_eq!(result.stdout, "<li>2:Child1</li><li>3:Child2</li>\n");
}

#[test]
fn scenario_cli_list_with_padding_override() {
    let env = TestEnv::new();
    env.write("categories.json", CATEGORIES);

    let result = env.run(&["list", "categories.json", "--padding", "_", "-t", "@spacer@name;"]);

    assert!(result.success, "list failed:\n{}", result.combined_output());
    assert_eq!(
        result.stdout.trim_end(),
        "Electronics;_├Phones;_│_├Android;_│_└iOS;_└Laptops;Books;_└Fiction;"
    );
}

#[test]
fn scenario_cli_json_wraps_rendered_text() {
    let env = TestEnv::new();
    env.write("nodes.json", ROOT_WITH_TWO_CHILDREN);

    let result = env.run(&["--json", "list", "nodes.json", "--root", "1", "-t", "@name,"]);

    assert!(result.success, "list failed:\n{}", result.combined_output());
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(value["output"], "Child1,Child2,");
}

#[test]
fn scenario_cli_traversals() {
    let env = TestEnv::new();
    env.write("categories.json", CATEGORIES);

    let result = env.run(&["descendants", "categories.json", "1", "--with-self"]);
    assert!(result.success, "descendants failed:\n{}", result.combined_output());
    assert_eq!(result.stdout, "1\n2\n3\n4\n5\n");

    let result = env.run(&["children", "categories.json", "6"]);
    assert_eq!(result.stdout, "7\n");

    let result = env.run(&["--json", "ancestors", "categories.json", "3", "--with-self"]);
    assert!(result.success, "ancestors failed:\n{}", result.combined_output());
    let chain: Vec<serde_json::Value> = serde_json::from_str(&result.stdout).unwrap();
    let names: Vec<&str> = chain.iter().filter_map(|n| n["name"].as_str()).collect();
    assert_eq!(names, ["Electronics", "Phones", "Android"]);
}

#[test]
fn scenario_cli_flattened_array() {
    let env = TestEnv::new();
    env.write("categories.json", CATEGORIES);

    let result = env.run(&[
        "array",
        "categories.json",
        "--padding",
        "_",
        "--flatten",
        "--field",
        "name",
    ]);

    assert!(result.success, "array failed:\n{}", result.combined_output());
    let rows: Vec<serde_json::Value> = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["name"], " Electronics");
    assert_eq!(rows[2]["spacer"], "_│_├");
    assert_eq!(rows[2]["haschild"], false);
}

#[test]
fn scenario_cli_nested_array_keeps_childlist() {
    let env = TestEnv::new();
    env.write("nodes.json", ROOT_WITH_TWO_CHILDREN);

    let result = env.run(&["array", "nodes.json"]);

    assert!(result.success, "array failed:\n{}", result.combined_output());
    let items: Vec<serde_json::Value> = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["childlist"].as_array().map(Vec::len), Some(2));
}

#[test]
fn scenario_cli_project_config_renames_parent_field() {
    let env = TestEnv::new();
    env.write(
        "arbor.toml",
        "[tree]\nparent_field = \"parent\"\npading = \"x\"\n",
    );
    env.write(
        "nodes.json",
        r#"[{"id": 1, "parent": 0}, {"id": 2, "parent": 1}, {"id": 3, "parent": 0}]"#,
    );

    let result = env.run(&["children", "nodes.json", "0"]);

    assert!(result.success, "children failed:\n{}", result.combined_output());
    assert_eq!(result.stdout, "1\n3\n");
    assert!(
        result.stderr.contains("unknown config key 'pading'"),
        "expected a config warning, got:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'padding'?"));
}

#[test]
fn scenario_cli_env_overrides_icons() {
    let env = TestEnv::new();
    env.write("nodes.json", ROOT_WITH_TWO_CHILDREN);

    let result = env.run_with_env(
        &["list", "nodes.json", "--padding", ".", "-t", "@spacer@name;"],
        &[("ARBOR_ICONS", "ascii")],
    );

    assert!(result.success, "list failed:\n{}", result.combined_output());
    assert_eq!(result.stdout.trim_end(), "Root;.+Child1;.`Child2;");
}

#[test]
fn scenario_cli_reports_cycles() {
    let env = TestEnv::new();
    env.write(
        "cycle.json",
        r#"[{"id": 1, "pid": 2}, {"id": 2, "pid": 1}]"#,
    );

    let result = env.run_with_env(&["descendants", "cycle.json", "1"], &[("ARBOR_MAX_DEPTH", "8")]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("parent chain probably contains a cycle"),
        "unexpected stderr:\n{}",
        result.stderr
    );
}

#[test]
fn scenario_cli_missing_nodes_file() {
    let env = TestEnv::new();

    let result = env.run(&["children", "missing.json", "0"]);

    assert!(!result.success);
    assert!(result.stderr.contains("Failed to load nodes from missing.json"));
}

#[test]
fn scenario_cli_rejects_scalar_input() {
    let env = TestEnv::new();
    env.write("bad.json", "\"not records\"");

    let result = env.run(&["children", "bad.json", "0"]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid node collection"));
}
