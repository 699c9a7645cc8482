//! Identifier contracts (ID-001 through ID-004)
//!
//! Identifiers are compared through one canonical form, whatever JSON type
//! the records use.

use arbor::{IdSet, ListOptions, MenuOptions, NestedOptions, Node, Tree};

use crate::common::*;

/// CONTRACT ID-001: numeric and string spellings of an id are the same node
mod mixed_spellings {
    use super::*;

    #[test]
    fn contract_string_parent_matches_numeric_id() {
        let tree = Tree::from_nodes(vec![
            Node::new().with("id", 1).with("pid", 0),
            Node::new().with("id", "2").with("pid", "1"),
            Node::new().with("id", 3).with("pid", "01"),
            Node::new().with("id", 4).with("pid", 1.0),
        ]);

        assert_eq!(ids(&tree.children(1)), ["2", "3", "4"]);
        assert_eq!(ids(&tree.children("1")), ["2", "3", "4"]);
    }

    #[test]
    fn contract_id_sets_normalize_members() {
        let set = IdSet::from(" 2, 03 ,x");
        let tree = Tree::from_nodes(vec![
            Node::new().with("id", 2).with("pid", 0),
            Node::new().with("id", "3").with("pid", 0),
            Node::new().with("id", "x").with("pid", 0),
            Node::new().with("id", 4).with("pid", 0),
        ]);

        let out = tree
            .render_list(0, &ListOptions::new("@id:@selected;").selected(set))
            .unwrap();
        assert_eq!(out, "2:selected;3:selected;x:selected;4:;");
    }
}

/// CONTRACT ID-002: a record without an id takes no part in any scan
mod missing_ids {
    use super::*;

    #[test]
    fn contract_rows_without_id_are_invisible() {
        let tree = Tree::from_nodes(vec![
            Node::new().with("pid", 0).with("name", "no id"),
            Node::new().with("id", serde_json::Value::Null).with("pid", 0),
            node(1, 0, "kept"),
        ]);

        assert_eq!(ids(&tree.children(0)), ["1"]);
        assert_eq!(tree.descendants(0, false).unwrap().len(), 1);
    }
}

/// CONTRACT ID-003: unknown ids produce empty results, never errors
mod unknown_ids {
    use super::*;

    #[test]
    fn contract_unknown_ids_are_empty() {
        let tree = tree_with_padding(CATEGORIES, "_");

        assert!(tree.children(99).is_empty());
        assert!(tree.parent(99).is_none());
        assert!(tree.descendants(99, false).unwrap().is_empty());
        assert!(tree.descendants(99, true).unwrap().is_empty());
        assert!(tree.ancestors(99, true).unwrap().is_empty());
        assert_eq!(tree.render_list(99, &ListOptions::default()).unwrap(), "");
        assert!(tree.build_tree_array(99, "").unwrap().is_empty());
    }
}

/// CONTRACT ID-004: every spelling of "no parent" is the same root
mod root_spellings {
    use super::*;

    const MIXED_ROOTS: &str = r#"[
  {"id": 1, "pid": 0},
  {"id": 2, "pid": "0"},
  {"id": 3, "pid": ""},
  {"id": 4, "pid": null},
  {"id": 5},
  {"id": 6, "pid": 3}
]"#;

    #[test]
    fn contract_all_root_spellings_render_from_zero() {
        let tree = Tree::from_nodes(parse(MIXED_ROOTS));

        assert_eq!(ids(&tree.roots()), ids(&tree.children(0)));
        assert_eq!(
            tree.render_list(0, &ListOptions::new("@id;")).unwrap(),
            "1;2;3;6;4;5;"
        );
        assert_eq!(
            tree.render_nested("", &NestedOptions::new("@id@childlist,").wrap("i", ""))
                .unwrap(),
            "1,2,3<i>6,</i>,4,5,"
        );
        assert_eq!(
            tree.render_menu(0, &MenuOptions::new("@id,")).unwrap(),
            "1,2,3,4,5,"
        );

        let items = tree.build_tree_array(0, "").unwrap();
        assert_eq!(tree.flatten_tree(&items, "id").len(), 6);
    }
}
