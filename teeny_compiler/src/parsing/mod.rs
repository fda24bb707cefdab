//! Syntactic analysis
//!
//! Recursive descent over the token stream. Each grammar rule is a method on
//! [`Parser`], and reports what it recognises to an [`EventSink`] while the
//! rule is being parsed.
//!
//! ```text
//! program     ::= {statement}
//! statement   ::= "PRINT" (expression | string) nl
//!               | "IF" comparison "THEN" nl {statement} "ENDIF" nl
//!               | "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE" nl
//!               | "LABEL" ident nl
//!               | "GOTO" ident nl
//!               | "LET" ident "=" expression nl
//!               | "INPUT" ident nl
//! comparison  ::= expression (cmpOp expression)+
//! expression  ::= term {("+" | "-") term}
//! term        ::= unary {("*" | "/") unary}
//! unary       ::= ["+" | "-"] primary
//! primary     ::= number | ident
//! nl          ::= newline {newline}
//! ```
mod event;
mod expr;
mod stmts;
mod symbol;

pub use event::{replay, Event, EventSink};
pub use symbol::SymbolTable;

use crate::{
    error::CompileResult,
    lex::Lexer,
    token_stream::TokenStream,
    tokens::TokenKind,
};
use log::debug;

pub struct Parser<'a, S> {
    tokens: TokenStream<'a>,
    symbols: SymbolTable,
    sink: S,
}

impl<'a, S: EventSink> Parser<'a, S> {
    /// Fails when the first two tokens of the source can't be lexed.
    pub fn new(lexer: Lexer<'a>, sink: S) -> CompileResult<Self> {
        Ok(Self {
            tokens: TokenStream::new(lexer)?,
            symbols: SymbolTable::default(),
            sink,
        })
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    #[inline]
    fn emit(&mut self, event: Event) {
        self.sink.event(event)
    }

    /// Parse the whole source.
    ///
    /// Jump targets are only validated after the last statement,
    /// so a `GOTO` may refer to a label further down the source.
    pub fn program(&mut self) -> CompileResult<()> {
        self.emit(Event::ProgramStart);

        // Blank lines before the first statement.
        self.tokens.skip_lines()?;

        while !self.tokens.check(TokenKind::EOF) {
            self.statement()?;
        }

        self.symbols.check_labels()?;
        debug!("all jump targets are declared");

        self.emit(Event::ProgramEnd);
        Ok(())
    }
}
