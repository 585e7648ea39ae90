//! Turns a token stream into a [`Tree`].

use crate::parser::{Diagnostic, Document};
use crate::syntax_kind::{NodeKind, Token, TokenKind};
use crate::tree::{NodeId, Tree};

/// Consumes tokens one at a time, keeping a cursor at the innermost open
/// span.
///
/// - Bold and italics toggle: close the nearest open span of that kind, or
///   open a new one if there is none.
/// - Link and web link openers always open a new span; closers close the
///   nearest matching one or record a [`Diagnostic`].
/// - Text, newlines and every other delimiter become text leaves.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: Tree,
    current: NodeId,
    line: usize,
    diagnostics: Vec<Diagnostic>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let tree = Tree::new();
        let current = tree.root();
        Self {
            tree,
            current,
            line: 1,
            diagnostics: Vec::new(),
        }
    }

    /// The innermost open span, or the root.
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn push(&mut self, token: Token) {
        let kind = match token {
            Token::Text(text) => {
                self.tree.push_text(self.current, text);
                return;
            }
            Token::Markup(kind) => kind,
        };

        match kind {
            TokenKind::Bold => self.toggle(NodeKind::Bold),
            TokenKind::Italics => self.toggle(NodeKind::Italics),
            TokenKind::LinkOpen => self.open(NodeKind::Link),
            TokenKind::WebLinkOpen => self.open(NodeKind::WebLink),
            TokenKind::LinkClose => self.close(NodeKind::Link),
            TokenKind::WebLinkClose => self.close(NodeKind::WebLink),
            // Text runs always arrive as Token::Text
            TokenKind::Text => {}
            TokenKind::Newline => {
                self.tree.push_text(self.current, kind.literal().to_owned());
                self.line += 1;
            }
            // No structure for these yet, keep the delimiter as text
            _ => {
                self.tree.push_text(self.current, kind.literal().to_owned());
            }
        }
    }

    pub fn finish(self) -> Document {
        log::debug!(
            "built tree with {} nodes, {} diagnostics",
            self.tree.node_count(),
            self.diagnostics.len()
        );
        Document {
            tree: self.tree,
            diagnostics: self.diagnostics,
            cursor: self.current,
        }
    }

    /// Nearest open span of `kind` enclosing the cursor.
    fn nearest_open(&self, kind: NodeKind) -> Option<NodeId> {
        self.tree
            .ancestors(self.current)
            .take_while(|&id| id != self.tree.root())
            .find(|&id| self.tree[id].kind() == kind)
    }

    fn toggle(&mut self, kind: NodeKind) {
        match self.nearest_open(kind) {
            Some(open) => self.close_span(open),
            None => self.open(kind),
        }
    }

    fn open(&mut self, kind: NodeKind) {
        log::debug!("line {}: open {kind}", self.line);
        self.current = self.tree.push_node(self.current, kind);
    }

    fn close(&mut self, kind: NodeKind) {
        match self.nearest_open(kind) {
            Some(open) => self.close_span(open),
            None => {
                log::debug!("line {}: no open {kind} to close", self.line);
                self.diagnostics.push(Diagnostic::MismatchedClose {
                    kind,
                    line: self.line,
                });
            }
        }
    }

    /// Moves the cursor to the parent of `open`, closing everything inside.
    fn close_span(&mut self, open: NodeId) {
        log::debug!("line {}: close {}", self.line, self.tree[open].kind());
        if let Some(parent) = self.tree[open].parent() {
            self.current = parent;
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(tokens: Vec<Token>) -> TreeBuilder {
        let mut builder = TreeBuilder::new();
        for token in tokens {
            builder.push(token);
        }
        builder
    }

    fn m(kind: TokenKind) -> Token {
        Token::Markup(kind)
    }

    fn t(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    fn open_kinds(builder: &TreeBuilder) -> Vec<NodeKind> {
        let tree = builder.tree();
        let mut kinds: Vec<NodeKind> = tree
            .ancestors(builder.current())
            .map(|id| tree[id].kind())
            .collect();
        kinds.reverse();
        kinds
    }

    #[test]
    fn toggle_opens_then_closes() {
        let builder = build(vec![m(TokenKind::Bold), t("x"), m(TokenKind::Bold)]);
        assert_eq!(builder.current(), builder.tree().root());
        assert_eq!(builder.tree().node_count(), 3);
    }

    #[test]
    fn toggle_closes_across_other_spans() {
        let builder = build(vec![
            m(TokenKind::Bold),
            m(TokenKind::LinkOpen),
            m(TokenKind::Bold),
        ]);
        // The bold encloses the link, so closing it drops the link too
        assert_eq!(open_kinds(&builder), vec![NodeKind::Root]);
    }

    #[test]
    fn toggle_inside_open_span_opens_nested() {
        let builder = build(vec![
            m(TokenKind::LinkOpen),
            m(TokenKind::Italics),
            m(TokenKind::Bold),
        ]);
        assert_eq!(
            open_kinds(&builder),
            vec![
                NodeKind::Root,
                NodeKind::Link,
                NodeKind::Italics,
                NodeKind::Bold
            ]
        );
    }

    #[test]
    fn nested_links_close_innermost_first() {
        let mut builder = build(vec![
            m(TokenKind::LinkOpen),
            t("outer"),
            m(TokenKind::LinkOpen),
            t("inner"),
        ]);
        assert_eq!(
            open_kinds(&builder),
            vec![NodeKind::Root, NodeKind::Link, NodeKind::Link]
        );
        builder.push(m(TokenKind::LinkClose));
        assert_eq!(open_kinds(&builder), vec![NodeKind::Root, NodeKind::Link]);
        builder.push(m(TokenKind::LinkClose));
        assert_eq!(open_kinds(&builder), vec![NodeKind::Root]);
    }

    #[test]
    fn close_skips_over_other_open_kinds() {
        let builder = build(vec![
            m(TokenKind::WebLinkOpen),
            m(TokenKind::Italics),
            t("x"),
            m(TokenKind::WebLinkClose),
        ]);
        // Italics is left unterminated inside the closed web link
        assert_eq!(open_kinds(&builder), vec![NodeKind::Root]);
        assert!(builder.diagnostics().is_empty());
    }

    #[test]
    fn mismatched_close_is_recorded_and_ignored() {
        let mut builder = build(vec![m(TokenKind::Bold), t("a")]);
        let before_tree = builder.tree().clone();
        let before_cursor = builder.current();

        builder.push(m(TokenKind::LinkClose));

        assert_eq!(builder.tree(), &before_tree);
        assert_eq!(builder.current(), before_cursor);
        assert_eq!(
            builder.diagnostics(),
            &[Diagnostic::MismatchedClose {
                kind: NodeKind::Link,
                line: 1
            }]
        );
    }

    #[test]
    fn web_link_close_does_not_close_link() {
        let builder = build(vec![m(TokenKind::LinkOpen), m(TokenKind::WebLinkClose)]);
        assert_eq!(open_kinds(&builder), vec![NodeKind::Root, NodeKind::Link]);
        assert_eq!(
            builder.diagnostics(),
            &[Diagnostic::MismatchedClose {
                kind: NodeKind::WebLink,
                line: 1
            }]
        );
    }

    #[test]
    fn diagnostics_carry_line_numbers() {
        let builder = build(vec![
            t("a"),
            m(TokenKind::Newline),
            t("b"),
            m(TokenKind::Newline),
            m(TokenKind::LinkClose),
        ]);
        assert_eq!(
            builder.diagnostics(),
            &[Diagnostic::MismatchedClose {
                kind: NodeKind::Link,
                line: 3
            }]
        );
    }

    #[test]
    fn delimiters_without_structure_become_text() {
        let builder = build(vec![
            m(TokenKind::TemplateOpen),
            t("x"),
            m(TokenKind::Pipe),
            m(TokenKind::BoldItalics),
            m(TokenKind::TemplateClose),
        ]);
        let tree = builder.tree();
        let texts: Vec<&str> = tree[tree.root()]
            .children()
            .iter()
            .filter_map(|&id| tree[id].text())
            .collect();
        assert_eq!(texts, vec!["{{", "x", "|", "'''''", "}}"]);
        assert_eq!(builder.current(), tree.root());
    }

    #[test]
    fn finish_keeps_unterminated_spans() {
        let doc = build(vec![m(TokenKind::Italics), m(TokenKind::LinkOpen), t("x")]).finish();
        assert_eq!(doc.tree()[doc.cursor()].kind(), NodeKind::Link);
        assert_eq!(doc.open_spans(), vec![NodeKind::Italics, NodeKind::Link]);
        assert!(doc.diagnostics().is_empty());
    }

    #[test]
    fn bare_text_kind_adds_nothing() {
        let builder = build(vec![m(TokenKind::Bold), m(TokenKind::Text), t("x")]);
        let tree = builder.tree();
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.text_content(), "x");
        assert_eq!(tree[builder.current()].kind(), NodeKind::Bold);
    }
}
