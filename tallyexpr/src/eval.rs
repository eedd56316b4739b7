use crate::ast::{BinOp, Expr, ExprKind};

impl BinOp {
    /// Combines two evaluated operands. Arithmetic follows IEEE-754
    /// throughout: dividing by zero yields an infinity or NaN rather than
    /// an error, and `^` is [`f64::powf`], so fractional and negative
    /// exponents work.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// Walks the tree and computes its value: left subtree, then right subtree,
/// then the operator. The tree is read-only, so evaluating it again gives
/// the same answer.
#[must_use]
pub fn eval(expr: &Expr) -> f64 {
    match &expr.kind {
        ExprKind::Number(value) => *value,
        ExprKind::Infix { op, lhs, rhs } => {
            let lhs = eval(lhs);
            let rhs = eval(rhs);
            op.apply(lhs, rhs)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use tallyspan::Span;

    use super::*;

    fn number(value: f64) -> Expr {
        Expr::new(ExprKind::Number(value), Span::default())
    }

    fn infix(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        let span = lhs.span.join(rhs.span);
        let kind = ExprKind::Infix {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        };
        Expr::new(kind, span)
    }

    #[test]
    fn walks_the_tree() {
        // 2 + 3 * 4
        let tree = infix(
            BinOp::Add,
            number(2.0),
            infix(BinOp::Mul, number(3.0), number(4.0)),
        );
        assert_eq!(eval(&tree), 14.0);
    }

    #[test]
    fn reevaluation_is_idempotent() {
        let tree = infix(BinOp::Pow, number(2.0), number(10.0));
        let first = eval(&tree);
        assert_eq!(first, 1024.0);
        assert_eq!(eval(&tree), first);
        assert_eq!(eval(&tree), first);
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        let tree = infix(BinOp::Div, number(1.0), number(0.0));
        assert_eq!(eval(&tree), f64::INFINITY);
    }

    #[test]
    fn fractional_exponent() {
        let tree = infix(BinOp::Pow, number(4.0), number(0.5));
        assert_eq!(eval(&tree), 2.0);
    }
}
