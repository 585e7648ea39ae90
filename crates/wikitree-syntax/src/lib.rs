//! # wikitree-syntax
//!
//! Turns wiki markup into a tree of bold, italic and link spans.
//!
//! ## Architecture Overview
//!
//! The pipeline has three stages, run in a single pass:
//!
//! ```text
//! Characters → Lexer → Tokens → TreeBuilder → Tree → Printer
//!              (MarkupTable)                          (optional)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Reads characters from a [`CharSource`] and matches markup literals
//! greedily, longest first, against the [`MarkupTable`]. Everything between
//! literals is split on whitespace into text runs; whitespace itself is
//! dropped, except for line breaks.
//!
//! ```text
//! "''a'''b'''a''" → [:Italics, "a", :Bold, "b", :Bold, "a", :Italics]
//! ```
//!
//! ### 2. Tree Builder ([`parser`] module)
//!
//! Keeps a cursor at the innermost open span. `'''` and `''` toggle bold and
//! italics; `[[`/`]]` and `[`/`]` open and close links. A closer with nothing
//! to close is reported as a [`Diagnostic`] and otherwise ignored. Spans left
//! open at the end are simply left open.
//!
//! ```text
//! ROOT
//!   ITALICS
//!     a
//!     BOLD
//!       b
//!     a
//! ```
//!
//! ### 3. Printer ([`printer`] module)
//!
//! An indented dump of the tree, one node per line.
//!
//! ## Module Structure
//!
//! ```text
//! wikitree-syntax/
//! ├── lib.rs           # This file - public API
//! ├── error.rs         # ParseError
//! ├── source.rs        # CharSource trait, StrSource, CharStream
//! ├── syntax_kind.rs   # TokenKind, Token, NodeKind
//! ├── markup.rs        # MarkupTable, longest-first literal matching
//! ├── lexer.rs         # Tokenizer
//! ├── tree.rs          # Arena-backed Tree, NodeId, traversals
//! ├── printer.rs       # Indented text output
//! └── parser/
//!     ├── mod.rs       # parse() entry points, Document, Diagnostic
//!     └── builder.rs   # TreeBuilder
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use wikitree_syntax::{parse_str, NodeKind};
//!
//! let doc = parse_str("[[link");
//!
//! // Unterminated spans are kept, not reported
//! assert!(doc.diagnostics().is_empty());
//! assert_eq!(doc.open_spans(), vec![NodeKind::Link]);
//!
//! assert_eq!(doc.tree().to_string(), "ROOT\n  LINK\n    link\n");
//! ```

pub mod error;
pub mod lexer;
pub mod markup;
pub mod parser;
pub mod printer;
pub mod source;
pub mod syntax_kind;
pub mod tree;

pub use error::ParseError;
pub use lexer::{Tokenizer, lex};
pub use markup::{MarkupEntry, MarkupTable};
pub use parser::builder::TreeBuilder;
pub use parser::{Diagnostic, Document, parse, parse_source, parse_str};
pub use printer::{PrintOptions, render, write_tree};
pub use source::{CharSource, CharStream, StrSource};
pub use syntax_kind::{NodeKind, Token, TokenKind};
pub use tree::{Node, NodeId, Tree};
