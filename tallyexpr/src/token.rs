use std::borrow::Cow;
use std::fmt::Display;

use tallyspan::Spanned;

/// What the lexer found: a number lexeme or one of the seven punctuation
/// characters the grammar knows about.
///
/// A `Number` lexeme usually borrows straight from the input. It is owned
/// only when insignificant characters interleaved the digit run (`1 2`
/// lexes as the single number `12`), since the lexeme is no longer one
/// contiguous slice of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Number(Cow<'a, str>),

    Plus,
    Minus,
    Star,
    Slash,
    Caret,

    LParen,
    RParen,
}

pub type Token<'a> = Spanned<TokenKind<'a>>;

impl Display for TokenKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(lexeme) => write!(f, "{lexeme}"),

            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}
