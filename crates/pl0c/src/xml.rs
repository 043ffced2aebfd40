//! Renders a [`pl0_par::ParseTree`] to the nested-tag XML dump the original
//! reference compiler produced (`xmlwriter.py`).

use pl0_par::{ParseTree, ParseTreeNode};

pub fn render(tree: &ParseTree) -> String {
    let mut out = String::new();
    for node in &tree.root {
        render_node(node, 0, &mut out);
    }
    out
}

fn render_node(node: &ParseTreeNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    if node.children.is_empty() {
        out.push_str(&indent);
        out.push_str(&format!("<TERMINAL line='{}' col='{}'>", node.line, node.column));
        out.push_str(&escape(&node.label));
        out.push_str("</TERMINAL>\n");
        return;
    }

    out.push_str(&indent);
    out.push('<');
    out.push_str(&node.label);
    out.push_str(">\n");
    for child in &node.children {
        render_node(child, depth + 1, out);
    }
    out.push_str(&indent);
    out.push_str("</");
    out.push_str(&node.label);
    out.push_str(">\n");
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_renders_as_terminal() {
        let tree = ParseTree {
            root: vec![ParseTreeNode::leaf("42", 1, 7)],
        };
        assert_eq!(render(&tree), "<TERMINAL line='1' col='7'>42</TERMINAL>\n");
    }

    #[test]
    fn nested_node_wraps_children() {
        let tree = ParseTree {
            root: vec![ParseTreeNode {
                label: "EXPRESSION".to_string(),
                children: vec![ParseTreeNode::leaf("1", 2, 3)],
                line: 0,
                column: 0,
            }],
        };
        assert_eq!(
            render(&tree),
            "<EXPRESSION>\n  <TERMINAL line='2' col='3'>1</TERMINAL>\n</EXPRESSION>\n"
        );
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape("<a&b>\"'"), "&lt;a&amp;b&gt;&quot;&apos;");
    }
}
