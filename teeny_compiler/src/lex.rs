//! Lexical analysis
use crate::{
    constants::COMMENT_CHAR,
    cursor::{Cursor, EOF_CHAR},
    tokens::{Keyword, Token, TokenKind},
};
use smol_str::SmolStr;
use thiserror::Error;

pub struct Lexer<'a> {
    /// Character scanner
    cursor: Cursor<'a>,
    /// Keep reference to the source so tokens can
    /// copy their lexeme from it.
    original: &'a str,
    /// Start absolute byte position of the current token
    /// in the source.
    start_pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source_code: &'a str) -> Self {
        let mut cursor = Cursor::new(source_code);

        // Prime the cursor so the first iteration
        // starts on a valid character.
        cursor.next();
        let start_pos = cursor.offset();

        Self {
            cursor,
            original: source_code,
            start_pos,
        }
    }

    /// Original source code that was passed in during construction.
    pub fn source_code(&self) -> &'a str {
        self.original
    }

    /// Scan the source characters and construct the next token.
    ///
    /// ## Implementation
    ///
    /// Each iteration starts with the internal cursor pointing to the
    /// start of the remaining source, and must leave the cursor at the
    /// character following its own token.
    ///
    /// At the end of the source an `EOF` token is returned, and keeps
    /// being returned for any further call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        use TokenKind as TK;

        // Erase leading whitespace.
        while is_whitespace(self.cursor.current()) {
            self.cursor.next();
        }

        // Erase comment line.
        if self.cursor.current() == COMMENT_CHAR {
            self.erase_comment();
        }

        self.start_token();

        match self.cursor.current() {
            '+' => Ok(self.make_token(TK::Plus)),
            '-' => Ok(self.make_token(TK::Minus)),
            '*' => Ok(self.make_token(TK::Asterisk)),
            '/' => Ok(self.make_token(TK::Slash)),
            '=' => Ok(self.make_pair(TK::EqEq, TK::Eq)),
            '>' => Ok(self.make_pair(TK::GtEq, TK::Gt)),
            '<' => Ok(self.make_pair(TK::LtEq, TK::Lt)),
            '!' => match self.cursor.peek() {
                '=' => {
                    self.cursor.next();
                    Ok(self.make_token(TK::NotEq))
                }
                c => Err(LexError::ExpectedNotEqual(c)),
            },
            // The sentinel newline has no text in the source to slice.
            '\n' => Ok(self.make_token_with(TK::Newline, SmolStr::new("\n"))),
            '"' => self.consume_string(),
            '0'..='9' => self.consume_number(),
            c if is_letter(c) => Ok(self.consume_ident()),
            EOF_CHAR if self.cursor.at_end() => Ok(Token::new(TK::EOF, "")),
            c => Err(LexError::UnknownCharacter(c)),
        }
    }

    /// Indicates whether the lexer is at the end of the source.
    pub fn at_end(&self) -> bool {
        self.cursor.at_end()
    }

    /// Primes the lexer to consume the next token.
    fn start_token(&mut self) {
        self.start_pos = self.cursor.offset();
    }

    /// Source text from the start of the token up to and
    /// including the current character.
    fn fragment(&self) -> &'a str {
        let end = self.cursor.offset() + self.cursor.current().len_utf8();
        &self.original[self.start_pos..end]
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let text = SmolStr::from(self.fragment());
        self.make_token_with(kind, text)
    }

    /// Build a token, and position the cursor on the starting
    /// character of the next token.
    fn make_token_with(&mut self, kind: TokenKind, text: SmolStr) -> Token {
        self.cursor.next();
        Token { kind, text }
    }

    /// Operator that is either a single character, or
    /// the same character followed by `=`.
    fn make_pair(&mut self, with_eq: TokenKind, single: TokenKind) -> Token {
        if self.cursor.peek() == '=' {
            self.cursor.next();
            self.make_token(with_eq)
        } else {
            self.make_token(single)
        }
    }
}

/// Specialised tokens.
impl<'a> Lexer<'a> {
    /// Erase comment line up to, but not including, the trailing newline.
    fn erase_comment(&mut self) {
        debug_assert_eq!(self.cursor.current(), COMMENT_CHAR);

        while self.cursor.current() != '\n' && !self.cursor.at_end() {
            self.cursor.next();
        }
    }

    /// Make a string literal token, containing the text between the quotes.
    ///
    /// The literal ends up verbatim inside a `printf` format string,
    /// so escapes, format specifiers and line breaks are rejected.
    fn consume_string(&mut self) -> Result<Token, LexError> {
        debug_assert_eq!(self.cursor.current(), '"');

        self.cursor.next();
        let start = self.cursor.offset();

        while self.cursor.current() != '"' {
            match self.cursor.current() {
                '\r' | '\n' | '\t' | '\\' | '%' => {
                    return Err(LexError::IllegalStringCharacter(self.cursor.current()))
                }
                EOF_CHAR if self.cursor.at_end() => return Err(LexError::UnterminatedString),
                _ => {
                    self.cursor.next();
                }
            }
        }

        let text = SmolStr::from(&self.original[start..self.cursor.offset()]);
        Ok(self.make_token_with(TokenKind::String, text))
    }

    /// Make a number literal token.
    ///
    /// Digits, with an optional fractional part. A decimal
    /// point must be followed by at least one digit.
    fn consume_number(&mut self) -> Result<Token, LexError> {
        debug_assert!(is_digit(self.cursor.current()));

        while is_digit(self.cursor.peek()) {
            self.cursor.next();
        }

        if self.cursor.peek() == '.' {
            self.cursor.next();

            let c = self.cursor.peek();
            if !is_digit(c) {
                return Err(LexError::MalformedNumber(c));
            }

            while is_digit(self.cursor.peek()) {
                self.cursor.next();
            }
        }

        Ok(self.make_token(TokenKind::Number))
    }

    /// Make an identifier or keyword token.
    fn consume_ident(&mut self) -> Token {
        debug_assert!(is_letter(self.cursor.current()));

        while is_letter_or_digit(self.cursor.peek()) {
            self.cursor.next();
        }

        let token_kind = match Keyword::parse(self.fragment()) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Ident,
        };

        self.make_token(token_kind)
    }
}

/// Test whether the character is considered whitespace
/// that should be ignored by the parser later.
///
/// Doesn't include newline characters, because newlines
/// are significant, specifying end-of-statement.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

impl<'a> IntoIterator for Lexer<'a> {
    type Item = Result<Token, LexError>;
    type IntoIter = LexerIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        LexerIter {
            lexer: self,
            done: false,
        }
    }
}

/// Convenience iterator that wraps the lexer.
///
/// Yields tokens up to and including the first `EOF`,
/// or up to and including the first error.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct LexerIter<'a> {
    // Track end so an EOF token is emitted once.
    done: bool,
    lexer: Lexer<'a>,
}

impl<'a> Iterator for LexerIter<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.lexer.next_token();
        self.done = match &result {
            Ok(token) => token.kind == TokenKind::EOF,
            Err(_) => true,
        };
        Some(result)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unknown token: {0:?}")]
    UnknownCharacter(char),
    #[error("expected '!=', got '!' followed by {0:?}")]
    ExpectedNotEqual(char),
    #[error("illegal character in string: {0:?}")]
    IllegalStringCharacter(char),
    #[error("unterminated string")]
    UnterminatedString,
    #[error("illegal character in number: {0:?}")]
    MalformedNumber(char),
}

#[cfg(test)]
mod test {
    use super::*;
    use TokenKind as TK;

    /// Lex the whole source, excluding the `EOF` token.
    fn tokens(source: &str) -> Result<Vec<Token>, LexError> {
        Lexer::new(source)
            .into_iter()
            .filter(|result| !matches!(result, Ok(token) if token.kind == TK::EOF))
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokens(source).unwrap().into_iter().map(|token| token.kind).collect()
    }

    #[test]
    fn test_empty_source() {
        // Only the sentinel newline.
        assert_eq!(kinds(""), vec![TK::Newline]);
    }

    #[test]
    #[rustfmt::skip]
    fn test_operators() {
        assert_eq!(
            kinds("+- */ = == != < <= > >="),
            vec![
                TK::Plus, TK::Minus, TK::Asterisk, TK::Slash,
                TK::Eq, TK::EqEq, TK::NotEq,
                TK::Lt, TK::LtEq, TK::Gt, TK::GtEq,
                TK::Newline,
            ]
        );
    }

    #[test]
    fn test_keywords_and_idents() {
        assert_eq!(
            kinds("LET foo = bar1\nIF THEN ENDIF"),
            vec![
                TK::Keyword(Keyword::Let),
                TK::Ident,
                TK::Eq,
                TK::Ident,
                TK::Newline,
                TK::Keyword(Keyword::If),
                TK::Keyword(Keyword::Then),
                TK::Keyword(Keyword::EndIf),
                TK::Newline,
            ]
        );

        let toks = tokens("LET foo1 = bar").unwrap();
        assert_eq!(toks[1].text, "foo1");
        assert_eq!(toks[3].text, "bar");
    }

    #[test]
    fn test_keyword_lookalike() {
        let toks = tokens("LETTER let").unwrap();
        assert_eq!(toks[0].kind, TK::Ident);
        assert_eq!(toks[0].text, "LETTER");
        assert_eq!(toks[1].kind, TK::Ident);
    }

    #[test]
    fn test_numbers() {
        let toks = tokens("42 3.14 7").unwrap();
        assert_eq!(toks[0], Token::new(TK::Number, "42"));
        assert_eq!(toks[1], Token::new(TK::Number, "3.14"));
        assert_eq!(toks[2], Token::new(TK::Number, "7"));
    }

    #[test]
    fn test_number_trailing_point() {
        assert_eq!(tokens("LET x = 5."), Err(LexError::MalformedNumber('\n')));
        assert_eq!(tokens("5.x"), Err(LexError::MalformedNumber('x')));
    }

    #[test]
    fn test_string() {
        let toks = tokens("PRINT \"Hello World!\"").unwrap();
        assert_eq!(toks[1], Token::new(TK::String, "Hello World!"));
        assert_eq!(toks[2].kind, TK::Newline);
    }

    #[test]
    fn test_string_illegal_chars() {
        assert_eq!(tokens("\"100%\""), Err(LexError::IllegalStringCharacter('%')));
        assert_eq!(tokens("\"a\\n\""), Err(LexError::IllegalStringCharacter('\\')));
        assert_eq!(tokens("\"a\tb\""), Err(LexError::IllegalStringCharacter('\t')));
        // Runs into the sentinel newline.
        assert_eq!(tokens("\"open"), Err(LexError::IllegalStringCharacter('\n')));
    }

    #[test]
    fn test_lone_bang() {
        assert_eq!(tokens("1 ! 2"), Err(LexError::ExpectedNotEqual(' ')));
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(tokens("LET x = (1)"), Err(LexError::UnknownCharacter('(')));
        assert_eq!(tokens("x_y"), Err(LexError::UnknownCharacter('_')));
    }

    #[test]
    fn test_comments_and_whitespace() {
        assert_eq!(
            kinds("# comment\r\n\tPRINT x # trailing\n"),
            vec![
                TK::Newline,
                TK::Keyword(Keyword::Print),
                TK::Ident,
                TK::Newline,
                TK::Newline,
            ]
        );
    }

    #[test]
    fn test_null_inside_comment() {
        assert_eq!(
            kinds("# a\0b\nPRINT 1\n"),
            vec![
                TK::Newline,
                TK::Keyword(Keyword::Print),
                TK::Number,
                TK::Newline,
                TK::Newline,
            ]
        );
    }

    #[test]
    fn test_source_code() {
        let mut lexer = Lexer::new("LET a = 1");
        lexer.next_token().unwrap();
        assert_eq!(lexer.source_code(), "LET a = 1");
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, TK::Ident);
        assert_eq!(lexer.next_token().unwrap().kind, TK::Newline);
        assert_eq!(lexer.next_token().unwrap().kind, TK::EOF);
        assert!(lexer.at_end());
        assert_eq!(lexer.next_token().unwrap().kind, TK::EOF);
        assert_eq!(lexer.next_token().unwrap().kind, TK::EOF);
    }
}
