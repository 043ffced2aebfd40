//! An optional parse tree, built alongside code generation when the caller
//! asks to keep one (the `pl0c --ast` flag).

/// A node recorded while walking the edge graph, mirroring the nested
/// `xmlwriter.py` dump the original reference implementation produced: a
/// non-terminal wraps its children, a terminal carries the matched text plus
/// the `line`/`column` it was matched at. `line`/`column` are `0` on
/// non-terminal (branch) nodes, where they carry no meaning.
#[derive(Debug, Clone)]
pub struct ParseTreeNode {
    pub label: String,
    pub children: Vec<ParseTreeNode>,
    pub line: u32,
    pub column: u32,
}

impl ParseTreeNode {
    pub fn leaf(label: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            line,
            column,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseTree {
    pub root: Vec<ParseTreeNode>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: ParseTreeNode) {
        self.root.push(node);
    }
}
