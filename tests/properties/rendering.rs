//! Property tests for the renderers.

use proptest::prelude::*;

use arbor::{ListOptions, MenuOptions, NestedOptions, Node, NodeKey, Tree};

use crate::traversal::forest;

/// Forest plus a few tombstone rows (empty id) hanging below random nodes
fn forest_with_tombstones() -> impl Strategy<Value = Vec<Node>> {
    (forest(), proptest::collection::vec(any::<proptest::sample::Index>(), 0..=3)).prop_map(
        |(mut nodes, tombstones)| {
            let size = nodes.len() + 1;
            for (i, parent) in tombstones.iter().enumerate() {
                let row = Node::new()
                    .with("id", "")
                    .with("pid", parent.index(size))
                    .with("name", format!("ghost{}", i));
                let at = parent.index(nodes.len() + 1);
                nodes.insert(at, row);
            }
            nodes
        },
    )
}

fn manual_preorder<'a>(tree: &'a Tree, id: NodeKey, out: &mut Vec<&'a Node>) {
    for child in tree.children(id) {
        out.push(child);
        if let Some(key) = child.key("id") {
            manual_preorder(tree, key, out);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: materialize + flatten yields the manual preorder minus tombstones.
    #[test]
    fn property_flatten_round_trip(nodes in forest_with_tombstones()) {
        let tree = Tree::from_nodes(nodes);

        let mut walked = Vec::new();
        manual_preorder(&tree, NodeKey::root(), &mut walked);
        let expected: Vec<String> = walked
            .into_iter()
            .filter(|n| !tree.is_tombstone(n))
            .map(|n| n.text("name"))
            .collect();

        let items = tree.build_tree_array(0, "").unwrap();
        let flat = tree.flatten_tree(&items, "id");
        let names: Vec<String> = flat.iter().map(|n| n.text("name")).collect();

        prop_assert_eq!(names, expected);
    }

    /// PROPERTY: rendering twice gives byte-identical output.
    #[test]
    fn property_rendering_is_idempotent(nodes in forest(), selected in "[0-9,]{0,12}") {
        let tree = Tree::from_nodes(nodes);

        let list = ListOptions::default().selected(selected.as_str());
        prop_assert_eq!(tree.render_list(0, &list).unwrap(), tree.render_list(0, &list).unwrap());

        let menu = MenuOptions::new("<li class=\"@class\">@name@caret@childlist</li>").selected(selected.as_str());
        prop_assert_eq!(tree.render_menu(0, &menu).unwrap(), tree.render_menu(0, &menu).unwrap());
    }

    /// PROPERTY: only the last sibling in store order gets the corner icon.
    #[test]
    fn property_corner_marks_last_sibling(nodes in forest()) {
        let tree = Tree::from_nodes(nodes);
        let out = tree
            .render_list(0, &ListOptions::new("@spacer\n").prefix(">"))
            .unwrap();
        let spacers: Vec<&str> = out.lines().collect();

        let mut walked = Vec::new();
        manual_preorder(&tree, NodeKey::root(), &mut walked);
        prop_assert_eq!(spacers.len(), walked.len());

        for (spacer, node) in spacers.iter().zip(&walked) {
            let siblings = tree.children(node.key("pid").unwrap());
            let is_last = siblings.last() == Some(node);
            prop_assert_eq!(spacer.ends_with('└'), is_last);
            prop_assert_eq!(spacer.ends_with('├'), !is_last);
        }
    }

    /// PROPERTY: nested markup has one item per node and no empty wrappers.
    #[test]
    fn property_nested_has_no_empty_wrappers(nodes in forest()) {
        let count = nodes.len();
        let tree = Tree::from_nodes(nodes);
        let out = tree
            .render_nested(0, &NestedOptions::new("<li>@name@childlist</li>"))
            .unwrap();

        prop_assert_eq!(out.matches("<li>").count(), count);
        prop_assert!(!out.contains("<ul></ul>"));
    }
}
