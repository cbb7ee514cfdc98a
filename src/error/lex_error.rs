use thiserror::Error;

/// Represents all errors that can occur while turning source text into
/// tokens.
///
/// Positions are zero-based character indices into the source line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the accepted alphabet, or a sign that is not
    /// directly followed by a number.
    #[error("Unexpected token '{0}' at position {1}.")]
    UnexpectedToken(char, usize),
    /// An integer literal does not fit into 64 bits.
    #[error("Literal at position {0} is too large.")]
    LiteralTooLarge(usize),
}
