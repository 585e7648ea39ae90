//! Token and node kinds.
//!
//! Tokens are what the lexer produces, nodes are what the tree builder
//! produces. Only a handful of token kinds turn into structural nodes; every
//! other token ends up as a text leaf.

use std::fmt;

/// All token kinds the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of non-whitespace characters
    Text,
    /// Line terminator
    Newline,
    /// `'''`
    Bold,
    /// `''`
    Italics,
    /// `'''''`
    BoldItalics,
    /// `{{`
    TemplateOpen,
    /// `}}`
    TemplateClose,
    /// `{{{`
    TemplateArgOpen,
    /// `}}}`
    TemplateArgClose,
    /// `|`
    Pipe,
    /// `[[`
    LinkOpen,
    /// `]]`
    LinkClose,
    /// `[`
    WebLinkOpen,
    /// `]`
    WebLinkClose,
    /// `<`
    AngleOpen,
    /// `</`
    AngleOpenSlash,
    /// `>`
    AngleClose,
    /// `=`
    Equals,
    /// `"`
    DoubleQuote,
}

impl TokenKind {
    /// The source text this kind always stands for.
    ///
    /// `Text` has no fixed spelling and returns an empty string.
    pub fn literal(self) -> &'static str {
        match self {
            TokenKind::Text => "",
            TokenKind::Newline => "\n",
            TokenKind::Bold => "'''",
            TokenKind::Italics => "''",
            TokenKind::BoldItalics => "'''''",
            TokenKind::TemplateOpen => "{{",
            TokenKind::TemplateClose => "}}",
            TokenKind::TemplateArgOpen => "{{{",
            TokenKind::TemplateArgClose => "}}}",
            TokenKind::Pipe => "|",
            TokenKind::LinkOpen => "[[",
            TokenKind::LinkClose => "]]",
            TokenKind::WebLinkOpen => "[",
            TokenKind::WebLinkClose => "]",
            TokenKind::AngleOpen => "<",
            TokenKind::AngleOpenSlash => "</",
            TokenKind::AngleClose => ">",
            TokenKind::Equals => "=",
            TokenKind::DoubleQuote => "\"",
        }
    }
}

/// A lexed token.
///
/// Only text runs carry a payload; everything else is fully described by its
/// kind. The lexer never produces `Markup(TokenKind::Text)` and the tree
/// builder ignores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Markup(TokenKind),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Text(_) => TokenKind::Text,
            Token::Markup(kind) => *kind,
        }
    }

    /// The text this token was read from (`"\n"` for a newline).
    pub fn text(&self) -> &str {
        match self {
            Token::Text(text) => text,
            Token::Markup(kind) => kind.literal(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => f.write_str(text),
            Token::Markup(kind) => write!(f, ":{kind:?}"),
        }
    }
}

/// Kinds of node in the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Text,
    Bold,
    Italics,
    Link,
    WebLink,
}

impl NodeKind {
    /// Bold, italics and both link kinds: the nodes that hold children.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            NodeKind::Bold | NodeKind::Italics | NodeKind::Link | NodeKind::WebLink
        )
    }

    /// Human readable name for messages.
    pub fn description(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Text => "text",
            NodeKind::Bold => "bold",
            NodeKind::Italics => "italics",
            NodeKind::Link => "link",
            NodeKind::WebLink => "web link",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Root => "ROOT",
            NodeKind::Text => "TEXT",
            NodeKind::Bold => "BOLD",
            NodeKind::Italics => "ITALICS",
            NodeKind::Link => "LINK",
            NodeKind::WebLink => "WEBLINK",
        };
        f.write_str(label)
    }
}
