//! # Parser - From Characters to a Span Tree
//!
//! Parsing is a single pass: the [`Tokenizer`] pulls characters from the
//! source and the [`TreeBuilder`] consumes each token as soon as it is
//! produced. There is no backtracking and no final repair step; whatever
//! spans are still open when the input runs out stay open.
//!
//! ```text
//! CharSource → Tokenizer → Token → TreeBuilder → Document
//!              (MarkupTable)                      (Tree + Diagnostics)
//! ```
//!
//! ## Entry Points
//!
//! - [`parse`] - any [`Read`], decoded as UTF-8
//! - [`parse_source`] - any [`CharSource`]
//! - [`parse_str`] - an in-memory string, cannot fail
//!
//! ```
//! use wikitree_syntax::{parse_str, NodeKind};
//!
//! let doc = parse_str("'''bold''' text");
//! let tree = doc.tree();
//! let bold = tree[tree.root()].children()[0];
//! assert_eq!(tree[bold].kind(), NodeKind::Bold);
//! assert!(doc.diagnostics().is_empty());
//! ```

pub mod builder;

use std::io::Read;

use thiserror::Error;

use crate::error::ParseError;
use crate::lexer::Tokenizer;
use crate::source::{CharSource, CharStream, StrSource};
use crate::syntax_kind::NodeKind;
use crate::tree::{NodeId, Tree};
use builder::TreeBuilder;

/// A recoverable problem found while building the tree.
///
/// The offending token is ignored and parsing carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("mismatched {} close on line {line}", .kind.description())]
    MismatchedClose { kind: NodeKind, line: usize },
}

/// Result of a parse: the tree plus whatever was noticed along the way.
#[derive(Debug, Clone)]
pub struct Document {
    tree: Tree,
    diagnostics: Vec<Diagnostic>,
    cursor: NodeId,
}

impl Document {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Where the builder's cursor ended up: the innermost unterminated span,
    /// or the root if everything was closed.
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Kinds of the spans still open at end of input, outermost first.
    pub fn open_spans(&self) -> Vec<NodeKind> {
        let mut spans: Vec<NodeKind> = self
            .tree
            .ancestors(self.cursor)
            .map(|id| self.tree[id].kind())
            .filter(|kind| kind.is_structural())
            .collect();
        spans.reverse();
        spans
    }
}

/// Parses UTF-8 text from a reader.
pub fn parse<R: Read>(reader: R) -> Result<Document, ParseError> {
    parse_source(CharStream::from_reader(reader))
}

/// Parses from any character source.
///
/// Fails only if the source does.
pub fn parse_source<S: CharSource>(source: S) -> Result<Document, S::Error> {
    let mut tokenizer = Tokenizer::new(source);
    let mut builder = TreeBuilder::new();
    while let Some(token) = tokenizer.next_token()? {
        builder.push(token);
    }
    Ok(builder.finish())
}

/// Parses an in-memory string.
pub fn parse_str(input: &str) -> Document {
    match parse_source(StrSource::new(input)) {
        Ok(doc) => doc,
        Err(never) => match never {},
    }
}
