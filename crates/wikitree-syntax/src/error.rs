use thiserror::Error;

/// Fatal failure while reading the character stream.
///
/// Anything that goes wrong underneath the tokenizer aborts the parse. Markup
/// problems never end up here; those are reported as
/// [`Diagnostic`](crate::Diagnostic)s on the finished document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 { offset: usize },
}
