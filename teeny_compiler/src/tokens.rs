//! Tokens
use smol_str::SmolStr;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact lexeme.
    ///
    /// String literals hold the text between the quotes.
    pub text: SmolStr,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[rustfmt::skip]
pub enum TokenKind {
    // ------------------------------------------------------------------------
    // Control
    /// End-of-file
    EOF,
    /// Line-feed, terminates a statement.
    Newline,

    // ------------------------------------------------------------------------
    // Complex
    /// Number literal
    Number,
    Ident,
    /// String literal
    String,
    /// Reserved identifiers
    Keyword(Keyword),

    // ------------------------------------------------------------------------
    // Operators
    Eq,        // =
    Plus,      // +
    Minus,     // -
    Asterisk,  // *
    Slash,     // /
    EqEq,      // ==
    NotEq,     // !=
    Lt,        // <
    LtEq,      // <=
    Gt,        // >
    GtEq,      // >=
}

impl TokenKind {
    #[inline]
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(_))
    }

    /// Operators allowed between the expressions of a comparison.
    #[inline]
    pub fn is_comparison(&self) -> bool {
        use TokenKind as TK;
        matches!(self, TK::EqEq | TK::NotEq | TK::Lt | TK::LtEq | TK::Gt | TK::GtEq)
    }
}

impl fmt::Display for TokenKind {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use TokenKind as TK;
        match self {
            TK::EOF      => write!(f, "EOF"),
            TK::Newline  => write!(f, "NEWLINE"),
            TK::Number   => write!(f, "NUMBER"),
            TK::Ident    => write!(f, "IDENT"),
            TK::String   => write!(f, "STRING"),
            TK::Keyword(keyword) => write!(f, "{keyword}"),
            TK::Eq       => write!(f, "EQ"),
            TK::Plus     => write!(f, "PLUS"),
            TK::Minus    => write!(f, "MINUS"),
            TK::Asterisk => write!(f, "ASTERISK"),
            TK::Slash    => write!(f, "SLASH"),
            TK::EqEq     => write!(f, "EQEQ"),
            TK::NotEq    => write!(f, "NOTEQ"),
            TK::Lt       => write!(f, "LT"),
            TK::LtEq     => write!(f, "LTEQ"),
            TK::Gt       => write!(f, "GT"),
            TK::GtEq     => write!(f, "GTEQ"),
        }
    }
}

/// Reserved keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    EndIf,
    While,
    Repeat,
    EndWhile,
}

/// Spelling of every keyword.
///
/// Both directions of the keyword mapping are derived from this table,
/// so a keyword always prints as the text it was lexed from.
#[rustfmt::skip]
pub const KEYWORDS: &[(&str, Keyword)] = &[
    ("LABEL",    Keyword::Label),
    ("GOTO",     Keyword::Goto),
    ("PRINT",    Keyword::Print),
    ("INPUT",    Keyword::Input),
    ("LET",      Keyword::Let),
    ("IF",       Keyword::If),
    ("THEN",     Keyword::Then),
    ("ENDIF",    Keyword::EndIf),
    ("WHILE",    Keyword::While),
    ("REPEAT",   Keyword::Repeat),
    ("ENDWHILE", Keyword::EndWhile),
];

impl Keyword {
    /// Match the text against the keyword table.
    ///
    /// Keywords are case sensitive. Returns `None` when the
    /// text is a user defined identifier.
    pub fn parse(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref();
        KEYWORDS
            .iter()
            .find(|(spelling, _)| *spelling == text)
            .map(|(_, keyword)| *keyword)
    }

    pub fn as_str(&self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, keyword)| keyword == self)
            .map(|(spelling, _)| *spelling)
            .unwrap_or_default()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
