use std::io::{self, Write};

use crate::models::TreeLine;

pub const MID_BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const CONTINUE_PREFIX: &str = "│   ";
pub const EMPTY_PREFIX: &str = "    ";

pub fn write_lines<W: Write>(writer: &mut W, lines: &[TreeLine]) -> io::Result<()> {
    for line in lines {
        for &has_more in &line.ancestor_has_more {
            if has_more {
                writer.write_all(CONTINUE_PREFIX.as_bytes())?;
            } else {
                writer.write_all(EMPTY_PREFIX.as_bytes())?;
            }
        }

        if line.is_last {
            writer.write_all(LAST_BRANCH.as_bytes())?;
        } else {
            writer.write_all(MID_BRANCH.as_bytes())?;
        }

        writer.write_all(line.name.as_bytes())?;

        if let Some(error) = line.error.as_ref() {
            write!(writer, " [error: {error}]")?;
        }

        writer.write_all(b"\n")?;
    }

    Ok(())
}

/// Render line records to text, one `\n`-terminated line per record.
pub fn render_lines(lines: &[TreeLine]) -> String {
    let mut out = Vec::new();
    write_lines(&mut out, lines).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirTree, EntryKind, TreeNode};

    fn node(name: &str, kind: EntryKind, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            name: name.to_owned(),
            kind,
            error: None,
            children,
        }
    }

    #[test]
    fn renders_glyphs_and_errors() {
        let mut locked = node("b", EntryKind::Directory, vec![]);
        locked.error = Some("Permission denied".to_owned());

        let tree = DirTree {
            children: vec![
                node("a", EntryKind::File, vec![]),
                locked,
                node(
                    "c",
                    EntryKind::Directory,
                    vec![
                        node(
                            "d",
                            EntryKind::Directory,
                            vec![node("e", EntryKind::File, vec![])],
                        ),
                        node("f", EntryKind::File, vec![]),
                    ],
                ),
            ],
        };

        assert_eq!(
            render_lines(&tree.lines()),
            concat!(
                "├── a\n",
                "├── b [error: Permission denied]\n",
                "└── c\n",
                "    ├── d\n",
                "    │   └── e\n",
                "    └── f\n",
            )
        );
    }

    #[test]
    fn continuation_bar_under_mid_sibling() {
        let tree = DirTree {
            children: vec![
                node(
                    "src",
                    EntryKind::Directory,
                    vec![node("main.rs", EntryKind::File, vec![])],
                ),
                node("z.txt", EntryKind::File, vec![]),
            ],
        };

        assert_eq!(
            render_lines(&tree.lines()),
            "├── src\n│   └── main.rs\n└── z.txt\n"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_lines(&[]), "");
    }
}
