//! Token stream with one token of look ahead.
use crate::{
    error::{CompileError, CompileResult},
    lex::{LexError, Lexer},
    tokens::{Token, TokenKind},
};
use log::trace;
use std::mem;

/// Stream of tokens holding the current token, and the token after it.
///
/// Tokens are lazily lexed. Advancing the stream moves the look ahead
/// token into the current slot, and lexes a new look ahead token.
/// Lexical errors are thus reported one token early.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
}

impl<'a> TokenStream<'a> {
    /// Prime the stream with the first two tokens of the source.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, LexError> {
        let current = lexer.next_token()?;
        let peek = lexer.next_token()?;
        Ok(Self { lexer, current, peek })
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// Tests whether the current token is of the given kind.
    #[inline]
    pub fn check(&self, token_kind: TokenKind) -> bool {
        self.current.kind == token_kind
    }

    /// Tests whether the look ahead token is of the given kind.
    #[inline]
    pub fn check_peek(&self, token_kind: TokenKind) -> bool {
        self.peek.kind == token_kind
    }

    /// Consumes the current token regardless of kind, and returns it.
    ///
    /// At the end of the stream the `EOF` token keeps being returned.
    pub fn advance(&mut self) -> Result<Token, LexError> {
        let next = self.lexer.next_token()?;
        let peek = mem::replace(&mut self.peek, next);
        let token = mem::replace(&mut self.current, peek);
        trace!("token {} {:?}", token.kind, token.text);
        Ok(token)
    }

    /// Return the current token and advance the stream.
    ///
    /// The current token must match the given token kind, otherwise
    /// a syntax error is returned and the stream is not advanced.
    pub fn consume(&mut self, token_kind: TokenKind) -> CompileResult<Token> {
        if self.check(token_kind) {
            Ok(self.advance()?)
        } else {
            Err(CompileError::Mismatch {
                expected: token_kind,
                encountered: self.current.kind,
            })
        }
    }

    /// Consumes zero or more new lines until something else is reached.
    pub fn skip_lines(&mut self) -> Result<(), LexError> {
        while self.check(TokenKind::Newline) {
            self.advance()?;
        }
        Ok(())
    }
}
