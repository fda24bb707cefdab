//! Result and errors.
use crate::{lex::LexError, tokens::TokenKind};
use smol_str::SmolStr;
use std::fmt;
use thiserror::Error;

pub type CompileResult<T> = std::result::Result<T, CompileError>;

/// Compilation stops at the first error, so each
/// variant describes a single fatal violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("{0}")]
    Lex(#[from] LexError),
    #[error("expected {expected}, got {encountered}")]
    Mismatch {
        expected: TokenKind,
        encountered: TokenKind,
    },
    #[error("invalid statement at {text:?} ({kind})")]
    InvalidStatement { text: SmolStr, kind: TokenKind },
    #[error("expected comparison operator at: {0:?}")]
    ExpectedComparison(SmolStr),
    #[error("unexpected token at {0:?}")]
    UnexpectedToken(SmolStr),
    #[error("referencing variable before assignment: {0}")]
    UndeclaredVariable(SmolStr),
    #[error("label already exists: {0}")]
    DuplicateLabel(SmolStr),
    #[error("attempting to GOTO to undeclared label: {0}")]
    UndeclaredLabel(SmolStr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed characters in the source text.
    Lexical,
    /// Tokens that don't fit the grammar.
    Syntax,
    /// Grammatical input that refers to names incorrectly.
    Semantic,
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        use CompileError as E;
        match self {
            E::Lex(_) => ErrorKind::Lexical,
            E::Mismatch { .. }
            | E::InvalidStatement { .. }
            | E::ExpectedComparison(_)
            | E::UnexpectedToken(_) => ErrorKind::Syntax,
            E::UndeclaredVariable(_) | E::DuplicateLabel(_) | E::UndeclaredLabel(_) => {
                ErrorKind::Semantic
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "lexical"),
            Self::Syntax => write!(f, "syntax"),
            Self::Semantic => write!(f, "semantic"),
        }
    }
}
