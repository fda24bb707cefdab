//! Expression parsing.
//!
//! Precedence is encoded by how deep a rule sits in the grammar:
//! comparison, then `+ -`, then `* /`, then the unary sign.
use super::{Event, EventSink, Parser};
use crate::{
    error::{CompileError, CompileResult},
    tokens::TokenKind,
};

impl<'a, S: EventSink> Parser<'a, S> {
    /// comparison ::= expression (cmpOp expression)+
    pub(super) fn comparison(&mut self) -> CompileResult<()> {
        self.expression()?;

        // At least one comparison is required.
        if !self.tokens.current().kind.is_comparison() {
            return Err(CompileError::ExpectedComparison(self.tokens.current().text.clone()));
        }

        while self.tokens.current().kind.is_comparison() {
            self.operator()?;
            self.expression()?;
        }

        Ok(())
    }

    /// expression ::= term {("+" | "-") term}
    pub(super) fn expression(&mut self) -> CompileResult<()> {
        self.term()?;

        while self.tokens.check(TokenKind::Plus) || self.tokens.check(TokenKind::Minus) {
            self.operator()?;
            self.term()?;
        }

        Ok(())
    }

    /// term ::= unary {("*" | "/") unary}
    fn term(&mut self) -> CompileResult<()> {
        self.unary()?;

        while self.tokens.check(TokenKind::Asterisk) || self.tokens.check(TokenKind::Slash) {
            self.operator()?;
            self.unary()?;
        }

        Ok(())
    }

    /// unary ::= ["+" | "-"] primary
    fn unary(&mut self) -> CompileResult<()> {
        if self.tokens.check(TokenKind::Plus) || self.tokens.check(TokenKind::Minus) {
            self.operator()?;
        }

        self.primary()
    }

    /// primary ::= number | ident
    ///
    /// Variables must be declared by an earlier `LET` or `INPUT`.
    fn primary(&mut self) -> CompileResult<()> {
        let current = self.tokens.current();

        match current.kind {
            TokenKind::Number => {
                let text = self.tokens.advance()?.text;
                self.emit(Event::Number(text));
            }
            TokenKind::Ident => {
                if !self.symbols.contains_variable(current.text.as_str()) {
                    return Err(CompileError::UndeclaredVariable(current.text.clone()));
                }
                let name = self.tokens.advance()?.text;
                self.emit(Event::Variable(name));
            }
            _ => return Err(CompileError::UnexpectedToken(current.text.clone())),
        }

        Ok(())
    }

    /// Consume the current operator token, and report its text verbatim.
    fn operator(&mut self) -> CompileResult<()> {
        let text = self.tokens.advance()?.text;
        self.emit(Event::Operator(text));
        Ok(())
    }
}
