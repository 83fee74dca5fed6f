//! Tree diagrams of the trie, for debugging.
//!
//! Output follows the familiar `archy` layout. Each line is one node's
//! character; terminal nodes also show `#<id>` and the stored literal:
//!
//! ```text
//!
//! └─┬
//!   ├─┬ :
//!   │ ├── ) #happy  :)
//!   │ └── ( #sad  :(
//!   └─┬ (
//!     └── : #happy  (:
//! ```
//!
//! The root has no character and prints as an empty first line.

use super::trie::{NodeId, ROOT, Trie};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    #[default]
    Unicode,
    Ascii,
}

struct Glyphs {
    pipe: &'static str,
    last: &'static str,
    tee: &'static str,
    dash: &'static str,
    branch: &'static str,
}

impl TreeStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            TreeStyle::Unicode => Glyphs { pipe: "│", last: "└", tee: "├", dash: "─", branch: "┬" },
            TreeStyle::Ascii => Glyphs { pipe: "|", last: "`", tee: "+", dash: "-", branch: "-" },
        }
    }
}

/// Render the whole trie.
pub fn render_tree(trie: &Trie, style: TreeStyle) -> String {
    let glyphs = style.glyphs();
    let mut out = String::new();
    write_node(trie, ROOT, "", &glyphs, &mut out);
    out
}

fn write_node(trie: &Trie, id: NodeId, prefix: &str, g: &Glyphs, out: &mut String) {
    let node = trie.node(id);
    if let Some(ch) = node.ch {
        out.push(ch);
    }
    if let Some(t) = &node.terminal {
        out.push_str(&format!(" #{} {}", t.id, t.value));
    }
    out.push('\n');

    let count = node.children.len();
    for (ix, &child) in node.children.iter().enumerate() {
        let last = ix + 1 == count;
        let more = !trie.node(child).children.is_empty();
        out.push_str(prefix);
        out.push_str(if last { g.last } else { g.tee });
        out.push_str(g.dash);
        out.push_str(if more { g.branch } else { g.dash });
        out.push(' ');

        let child_prefix = format!("{prefix}{} ", if last { " " } else { g.pipe });
        write_node(trie, child, &child_prefix, g, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_trie() -> Trie {
        let mut trie = Trie::new();
        trie.insert(":)", "happy");
        trie.insert(":(", "sad");
        trie.insert("(:", "happy");
        trie
    }

    #[test]
    fn unicode_layout() {
        let expected = "\n\
                        └─┬  \n\
                        \x20 ├─┬ :\n\
                        \x20 │ ├── ) #happy  :)\n\
                        \x20 │ └── ( #sad  :(\n\
                        \x20 └─┬ (\n\
                        \x20   └── : #happy  (:\n";
        assert_eq!(render_tree(&small_trie(), TreeStyle::Unicode), expected);
    }

    #[test]
    fn ascii_layout() {
        let tree = render_tree(&small_trie(), TreeStyle::Ascii);
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines[1], "`--  ");
        assert_eq!(lines[2], "  +-- :");
        assert_eq!(lines[3], "  | +-- ) #happy  :)");
        assert_eq!(lines[4], "  | `-- ( #sad  :(");
        assert!(tree.is_ascii());
    }

    #[test]
    fn empty_trie_is_a_single_line() {
        assert_eq!(render_tree(&Trie::new(), TreeStyle::Unicode), "\n");
    }
}
