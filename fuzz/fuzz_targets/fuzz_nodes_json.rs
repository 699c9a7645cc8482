#![no_main]

use arbor::{ListOptions, MenuOptions, Tree, TreeConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let Ok(nodes) = arbor::parse_nodes(content) else {
            return;
        };

        // Arbitrary parent graphs may be cyclic; a low limit keeps runs short
        let config = TreeConfig {
            max_depth: 32,
            ..TreeConfig::default()
        };
        let mut tree = Tree::new(config);
        tree.init(nodes, None, None);

        // Rendering should fail cleanly or succeed, never panic
        let _ = tree.render_list(0, &ListOptions::default());
        let _ = tree.render_menu(0, &MenuOptions::new("@name@childlist"));
        if let Ok(items) = tree.build_tree_array(0, "") {
            let _ = tree.flatten_tree(&items, "name");
        }
        let _ = tree.ancestors(1, true);
    }
});
