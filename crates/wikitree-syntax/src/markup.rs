//! # Markup Table
//!
//! The fixed set of literals the lexer recognizes, kept sorted longest first.
//!
//! Several literals are prefixes of others (`''` / `'''` / `'''''`, `[` /
//! `[[`, `{{` / `{{{`, `<` / `</`). Testing them longest first is what makes
//! the lexer greedy: at `'''''` we always see bold-italics, never italics
//! followed by a stray quote.
//!
//! The table is built once (see [`MarkupTable::global`]) and only read after
//! that, so any number of parses can share it.

use std::cmp::Reverse;
use std::sync::LazyLock;

use crate::source::CharSource;
use crate::syntax_kind::TokenKind;

const MARKUP: [(&str, TokenKind); 17] = [
    ("''", TokenKind::Italics),
    ("'''", TokenKind::Bold),
    ("'''''", TokenKind::BoldItalics),
    ("{{", TokenKind::TemplateOpen),
    ("}}", TokenKind::TemplateClose),
    ("{{{", TokenKind::TemplateArgOpen),
    ("}}}", TokenKind::TemplateArgClose),
    ("|", TokenKind::Pipe),
    ("[[", TokenKind::LinkOpen),
    ("]]", TokenKind::LinkClose),
    ("[", TokenKind::WebLinkOpen),
    ("]", TokenKind::WebLinkClose),
    ("<", TokenKind::AngleOpen),
    ("</", TokenKind::AngleOpenSlash),
    (">", TokenKind::AngleClose),
    ("=", TokenKind::Equals),
    ("\"", TokenKind::DoubleQuote),
];

static TABLE: LazyLock<MarkupTable> = LazyLock::new(MarkupTable::new);

/// One recognized literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupEntry {
    pub literal: &'static str,
    pub kind: TokenKind,
}

/// Markup literals ordered by descending length.
#[derive(Debug, Clone)]
pub struct MarkupTable {
    entries: Vec<MarkupEntry>,
}

impl MarkupTable {
    pub fn new() -> Self {
        let mut entries: Vec<MarkupEntry> = MARKUP
            .iter()
            .map(|&(literal, kind)| MarkupEntry { literal, kind })
            .collect();
        // Stable, so equal lengths keep their declaration order
        entries.sort_by_key(|entry| Reverse(entry.literal.chars().count()));
        Self { entries }
    }

    /// The shared table, built on first use.
    pub fn global() -> &'static MarkupTable {
        &TABLE
    }

    pub fn entries(&self) -> &[MarkupEntry] {
        &self.entries
    }

    /// Length in characters of the longest literal, i.e. the most look-ahead
    /// a match attempt can need.
    pub fn max_literal_len(&self) -> usize {
        self.entries
            .first()
            .map(|entry| entry.literal.chars().count())
            .unwrap_or(0)
    }

    /// Finds the longest literal starting at the source's current position.
    ///
    /// On a match the literal is consumed. Otherwise the source is left
    /// exactly where it was.
    pub fn match_at<S: CharSource>(
        &self,
        source: &mut S,
    ) -> Result<Option<&MarkupEntry>, S::Error> {
        for entry in &self.entries {
            if matches_literal(source, entry.literal)? {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}

impl Default for MarkupTable {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_literal<S: CharSource>(source: &mut S, literal: &str) -> Result<bool, S::Error> {
    source.mark();
    for expected in literal.chars() {
        if source.next_char()? != Some(expected) {
            source.reset();
            return Ok(false);
        }
    }
    Ok(true)
}
