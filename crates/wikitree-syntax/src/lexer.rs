//! # Lexer - Tokenizing Wiki Markup
//!
//! The lexer turns a character stream into [`Token`]s. At every position it
//! first asks the [`MarkupTable`] for the longest literal starting there; if
//! none matches it reads a single character and decides what to do with it:
//!
//! ```text
//! "'''bold''' text\n" → [:Bold, "bold", :Bold, "text", :Newline]
//! ```
//!
//! ## What Gets Dropped
//!
//! Unlike a lossless lexer, this one throws away whitespace other than line
//! breaks. A whitespace character ends the current text run; runs of it
//! between words vanish entirely. Newlines are kept as their own token.
//!
//! ## Why a Queue?
//!
//! One scan step can produce two tokens: when a literal is found right after
//! some text, the pending text has to be emitted first, then the literal.
//! Both go into a FIFO queue and are handed out one at a time.
//!
//! ## Public API
//!
//! - [`Tokenizer`] - iterator over `Result<Token, E>`
//! - [`lex`] - tokenize a string in one go

use std::collections::VecDeque;

use crate::markup::MarkupTable;
use crate::source::{CharSource, StrSource};
use crate::syntax_kind::{Token, TokenKind};

/// Per-parse tokenizer state.
///
/// Each parse builds its own tokenizer; only the markup table is shared.
pub struct Tokenizer<'t, S> {
    table: &'t MarkupTable,
    source: S,
    /// Pending text run, reused between flushes.
    text: String,
    eof: bool,
    queue: VecDeque<Token>,
}

impl<S: CharSource> Tokenizer<'static, S> {
    /// Tokenizer using the shared markup table.
    pub fn new(source: S) -> Self {
        Self::with_table(source, MarkupTable::global())
    }
}

impl<'t, S: CharSource> Tokenizer<'t, S> {
    pub fn with_table(source: S, table: &'t MarkupTable) -> Self {
        Self {
            table,
            source,
            text: String::new(),
            eof: false,
            queue: VecDeque::new(),
        }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, S::Error> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                log::trace!("token {token:?}");
                return Ok(Some(token));
            }
            if self.eof {
                return Ok(None);
            }
            self.scan()?;
        }
    }

    /// Scans until at least one token is queued or the input ends.
    fn scan(&mut self) -> Result<(), S::Error> {
        loop {
            let matched = self
                .table
                .match_at(&mut self.source)?
                .map(|entry| entry.kind);
            if let Some(kind) = matched {
                self.flush();
                self.queue.push_back(Token::Markup(kind));
                return Ok(());
            }

            match self.source.next_char()? {
                None => {
                    self.flush();
                    self.eof = true;
                    return Ok(());
                }
                Some('\n') => {
                    self.flush();
                    self.queue.push_back(Token::Markup(TokenKind::Newline));
                    return Ok(());
                }
                Some(c) if c.is_whitespace() => {
                    if self.flush() {
                        return Ok(());
                    }
                }
                Some(c) => self.text.push(c),
            }
        }
    }

    /// Queues the pending text run, if any. Returns whether it did.
    fn flush(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.queue.push_back(Token::Text(self.text.clone()));
        self.text.clear();
        true
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: CharSource> Iterator for Tokenizer<'_, S> {
    type Item = Result<Token, S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Lex a string into tokens.
pub fn lex(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(StrSource::new(input));
    let mut tokens = Vec::new();
    loop {
        match tokenizer.next_token() {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => return tokens,
            Err(never) => match never {},
        }
    }
}
