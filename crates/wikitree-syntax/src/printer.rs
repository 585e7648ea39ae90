//! Indented text dump of a [`Tree`].
//!
//! One line per node: structural nodes print their label, text leaves print
//! their payload, each indented by depth. Handy for eyeballing what the
//! builder did; anything fancier should walk the tree itself.

use std::fmt::{self, Write};

use crate::tree::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
    /// Print newline leaves as `\n` instead of a raw line break.
    pub escape_newlines: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            escape_newlines: false,
        }
    }
}

/// Writes the tree into `out`.
pub fn write_tree<W: Write>(out: &mut W, tree: &Tree, options: &PrintOptions) -> fmt::Result {
    for (id, depth) in tree.preorder() {
        let node = &tree[id];
        write!(out, "{:width$}", "", width = depth * options.indent_width)?;
        match node.text() {
            Some(text) if options.escape_newlines => out.write_str(&text.replace('\n', "\\n"))?,
            Some(text) => out.write_str(text)?,
            None => write!(out, "{}", node.kind())?,
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// Renders the tree to a string.
pub fn render(tree: &Tree, options: &PrintOptions) -> String {
    let mut out = String::new();
    // Writing into a String can't fail
    let _ = write_tree(&mut out, tree, options);
    out
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self, &PrintOptions::default())
    }
}
