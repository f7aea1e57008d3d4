use super::EntryKind;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    pub name: String,
    pub kind: EntryKind,
    pub error: Option<String>,
    pub children: Vec<TreeNode>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirTree {
    pub children: Vec<TreeNode>,
}

/// One rendered row of the tree, detached from any glyph characters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeLine {
    pub name: String,
    pub is_last: bool,
    /// For each ancestor level, whether that ancestor still has siblings below it.
    pub ancestor_has_more: Vec<bool>,
    pub error: Option<String>,
}

impl DirTree {
    /// Flatten the tree into pre-order line records.
    pub fn lines(&self) -> Vec<TreeLine> {
        let mut lines = Vec::new();
        collect_lines(&self.children, &mut Vec::new(), &mut lines);
        lines
    }
}

fn collect_lines(
    children: &[TreeNode],
    ancestor_has_more: &mut Vec<bool>,
    out: &mut Vec<TreeLine>,
) {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        out.push(TreeLine {
            name: node.name.clone(),
            is_last,
            ancestor_has_more: ancestor_has_more.clone(),
            error: node.error.clone(),
        });

        if !node.children.is_empty() {
            ancestor_has_more.push(!is_last);
            collect_lines(&node.children, ancestor_has_more, out);
            ancestor_has_more.pop();
        }
    }
}
