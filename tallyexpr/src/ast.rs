use std::fmt::Display;

use tallyspan::Spanned;

use crate::token::TokenKind;

/// A binary operator, one-to-one with its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    /// Binding tiers, loosest first. Operators sharing a tier combine
    /// left-associatively with each other, so `^` groups with `*` and `/`
    /// from the left: `2 ^ 3 * 2` is `(2 ^ 3) * 2`, and `2 ^ 2 ^ 3` is
    /// `(2 ^ 2) ^ 3`.
    pub const TIERS: [&'static [Self]; 2] =
        [&[Self::Add, Self::Sub], &[Self::Mul, Self::Div, Self::Pow]];

    #[must_use]
    pub fn from_token(kind: &TokenKind<'_>) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Caret => Some(Self::Pow),
            _ => None,
        }
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Pow => write!(f, "^"),
        }
    }
}

/// A parsed expression tree. Both children of an `Infix` node are complete
/// trees owned exclusively by that node; nothing is mutated after the
/// parser returns.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Number(f64),

    Infix {
        op:  BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

pub type Expr = Spanned<ExprKind>;
