//! The types for parser errors.

use thiserror::Error;

/// The error type for the lexer and parser. Positions are attached one level
/// up, in [`crate::Error`].
#[derive(Debug, Error)]
pub enum ParserError {
    /// The lexer encountered a character that starts no token.
    #[error("unrecognized token '{0}'")]
    UnrecognizedToken(char),

    /// A `/* … */` comment was never closed.
    #[error("unclosed block comment")]
    UnclosedBlockComment,

    #[error("unterminated single-quoted string")]
    UnterminatedSingleQuote,

    #[error("unterminated double-quoted string")]
    UnterminatedDoubleQuote,

    /// Single-quoted atoms must contain at least one character.
    #[error("empty single-quoted string")]
    EmptySingleQuote,

    /// Only `\\` and the string's own quote may be escaped.
    #[error("invalid escape character '{0}' in quoted string")]
    InvalidEscape(char),

    #[error("control character in quoted string")]
    ControlCharacterInQuote,

    /// Integer parts of numeric literals may not have leading zeros.
    #[error("leading zero in number '{0}'")]
    LeadingZero(String),

    /// Rational denominators must be greater than zero.
    #[error("rational '{0}' has a zero denominator")]
    ZeroDenominator(String),

    /// The parser required one token kind and read another. `expected` may
    /// name several alternatives.
    #[error("expected {expected} but read {got}")]
    UnexpectedToken { expected: String, got: String },

    /// The input ended while a production was still open. The attached
    /// position is that of the last consumed token, or absent for empty
    /// input.
    #[error("unexpected end of input when {0} was expected")]
    UnexpectedEof(String),

    /// An equality side must be a unitary term; quantified and unary
    /// formulas are not allowed there.
    #[error("expected <thf_unitary_term>")]
    ExpectedUnitaryTerm,

    /// A term (number, tuple, distinct object, or in non-TFX mode a
    /// variable) occurred where only a formula is allowed.
    #[error("a term was read where a formula is required")]
    ExpectedFormula,

    /// `$let` definitions must have the shape `lhs := rhs`.
    #[error("expected a let binding 'lhs := rhs'")]
    ExpectedLetBinding,
}
