//! Statement parsing.
use super::{Event, EventSink, Parser};
use crate::{
    error::{CompileError, CompileResult},
    tokens::{Keyword, TokenKind},
};
use log::debug;
use smol_str::SmolStr;

impl<'a, S: EventSink> Parser<'a, S> {
    pub(super) fn statement(&mut self) -> CompileResult<()> {
        use Keyword as K;

        let keyword = match self.tokens.current().kind {
            TokenKind::Keyword(keyword) => keyword,
            kind => return Err(self.invalid_statement(kind)),
        };
        debug!("statement {keyword}");

        match keyword {
            K::Print => self.print_stmt()?,
            K::If => self.if_stmt()?,
            K::While => self.while_stmt()?,
            K::Label => self.label_stmt()?,
            K::Goto => self.goto_stmt()?,
            K::Let => self.let_stmt()?,
            K::Input => self.input_stmt()?,
            K::Then | K::EndIf | K::Repeat | K::EndWhile => {
                return Err(self.invalid_statement(TokenKind::Keyword(keyword)))
            }
        }

        // Every statement is terminated by at least one line break.
        self.nl()
    }

    #[cold]
    fn invalid_statement(&self, kind: TokenKind) -> CompileError {
        CompileError::InvalidStatement {
            text: self.tokens.current().text.clone(),
            kind,
        }
    }

    /// nl ::= newline {newline}
    fn nl(&mut self) -> CompileResult<()> {
        self.tokens.consume(TokenKind::Newline)?;
        self.tokens.skip_lines()?;
        Ok(())
    }

    /// Record the first use of a variable.
    fn declare(&mut self, name: &SmolStr) {
        if self.symbols.declare_variable(name) {
            debug!("declared variable {name}");
            self.emit(Event::Declare(name.clone()));
        }
    }

    /// "PRINT" (expression | string)
    fn print_stmt(&mut self) -> CompileResult<()> {
        self.tokens.consume(TokenKind::Keyword(Keyword::Print))?;

        if self.tokens.check(TokenKind::String) {
            let text = self.tokens.advance()?.text;
            self.emit(Event::PrintText(text));
        } else {
            self.emit(Event::PrintExprStart);
            self.expression()?;
            self.emit(Event::PrintExprEnd);
        }

        Ok(())
    }

    /// "IF" comparison "THEN" nl {statement} "ENDIF"
    fn if_stmt(&mut self) -> CompileResult<()> {
        self.tokens.consume(TokenKind::Keyword(Keyword::If))?;
        self.emit(Event::IfStart);
        self.block(Keyword::Then, Keyword::EndIf)
    }

    /// "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE"
    fn while_stmt(&mut self) -> CompileResult<()> {
        self.tokens.consume(TokenKind::Keyword(Keyword::While))?;
        self.emit(Event::WhileStart);
        self.block(Keyword::Repeat, Keyword::EndWhile)
    }

    /// Condition and body shared by `IF` and `WHILE`.
    ///
    /// Reaching the end of the source inside the body fails
    /// as an invalid statement.
    fn block(&mut self, open: Keyword, close: Keyword) -> CompileResult<()> {
        self.comparison()?;

        self.tokens.consume(TokenKind::Keyword(open))?;
        self.nl()?;
        self.emit(Event::BodyStart);

        while !self.tokens.check(TokenKind::Keyword(close)) {
            self.statement()?;
        }

        self.tokens.consume(TokenKind::Keyword(close))?;
        self.emit(Event::BodyEnd);

        Ok(())
    }

    /// "LABEL" ident
    fn label_stmt(&mut self) -> CompileResult<()> {
        self.tokens.consume(TokenKind::Keyword(Keyword::Label))?;

        let name = self.tokens.consume(TokenKind::Ident)?.text;
        self.symbols.declare_label(&name)?;
        self.emit(Event::Label(name));

        Ok(())
    }

    /// "GOTO" ident
    fn goto_stmt(&mut self) -> CompileResult<()> {
        self.tokens.consume(TokenKind::Keyword(Keyword::Goto))?;

        let name = self.tokens.consume(TokenKind::Ident)?.text;
        self.symbols.reference_label(&name);
        self.emit(Event::Goto(name));

        Ok(())
    }

    /// "LET" ident "=" expression
    ///
    /// The variable is declared before the expression is parsed, so
    /// the first assignment may read the variable it assigns.
    fn let_stmt(&mut self) -> CompileResult<()> {
        self.tokens.consume(TokenKind::Keyword(Keyword::Let))?;

        let name = self.tokens.consume(TokenKind::Ident)?.text;
        self.declare(&name);
        self.tokens.consume(TokenKind::Eq)?;

        self.emit(Event::AssignStart(name));
        self.expression()?;
        self.emit(Event::AssignEnd);

        Ok(())
    }

    /// "INPUT" ident
    fn input_stmt(&mut self) -> CompileResult<()> {
        self.tokens.consume(TokenKind::Keyword(Keyword::Input))?;

        let name = self.tokens.consume(TokenKind::Ident)?.text;
        self.declare(&name);
        self.emit(Event::Input(name));

        Ok(())
    }
}
