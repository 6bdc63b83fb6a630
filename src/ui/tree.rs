//! Text rendering of importer trees
//!
//! Renders a [`Tree`] as indented lines with box-drawing connectors,
//! one line per key, leaves printed as `key: chunk`.

use crate::graph::{Tree, TreeNode};

const BRANCH: &str = "├─ ";
const LAST_BRANCH: &str = "└─ ";
const PIPE: &str = "│  ";
const SPACE: &str = "   ";

/// Render a tree to text, one line per node.
///
/// # Example
///
/// ```
/// use bundle_why::graph::{Tree, TreeNode};
/// use bundle_why::ui::render_tree;
///
/// let mut inner = Tree::new();
/// inner.insert("./src/index.js".into(), TreeNode::Leaf("main.js".into()));
/// let mut tree = Tree::new();
/// tree.insert("./src/app.js".into(), TreeNode::Branch(inner));
/// tree.insert("./src/other.js".into(), TreeNode::Leaf("other.js".into()));
///
/// assert_eq!(
///     render_tree(&tree),
///     "├─ ./src/app.js\n│  └─ ./src/index.js: main.js\n└─ ./src/other.js: other.js\n"
/// );
/// ```
pub fn render_tree(tree: &Tree) -> String {
    let mut out = String::new();
    render_level(tree, "", &mut out);
    out
}

fn render_level(tree: &Tree, prefix: &str, out: &mut String) {
    let count = tree.len();
    for (i, (key, node)) in tree.iter().enumerate() {
        let is_last = i == count - 1;
        out.push_str(prefix);
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        out.push_str(key);

        match node {
            TreeNode::Leaf(value) => {
                out.push_str(": ");
                out.push_str(value);
                out.push('\n');
            }
            TreeNode::Branch(children) => {
                out.push('\n');
                let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
                render_level(children, &child_prefix, out);
            }
        }
    }
}
