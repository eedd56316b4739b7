use std::borrow::Cow;
use std::str::Chars;

use tallyspan::Span;

use crate::token::{Token, TokenKind};

/// Character-at-a-time lexer over an expression string. Never fails.
///
/// Digits and `.` accumulate into a pending number run; an operator or `)`
/// flushes the run before emitting its own token, and `(` drops a pending
/// run without flushing it. Every other character, whitespace included, is
/// insignificant and does not end a run, so `1 2` lexes as the single
/// number `12`. Malformed runs such as `1.2.3` are carried through as one
/// lexeme and rejected later by the parser.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,

    /// byte position of cursor
    byte: u32,

    /// span of the pending number run
    run: Option<Span>,

    /// token displaced while flushing a run
    pending: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        assert!(u32::try_from(input.len()).is_ok());

        Self {
            input,
            chars: input.chars(),
            byte: 0,
            run: None,
            pending: None,
        }
    }

    #[must_use]
    pub fn lex_all(self) -> Vec<Token<'a>> {
        self.collect()
    }

    fn bump(&mut self) -> Option<char> {
        #[allow(clippy::cast_possible_truncation)]
        self.chars
            .next()
            .inspect(|c| self.byte += c.len_utf8() as u32)
    }

    /// Ends the pending run and turns it into a `Number` token.
    fn flush(&mut self) -> Option<Token<'a>> {
        let span = self.run.take()?;
        let text = &self.input[span.lo() as usize..span.hi() as usize];

        let lexeme = if text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            Cow::Borrowed(text)
        } else {
            // insignificant characters interleaved the run
            let digits = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            Cow::Owned(digits)
        };

        Some(Token::new(TokenKind::Number(lexeme), span))
    }

    /// Emits `kind`, first flushing any run the character ended.
    fn punct(&mut self, kind: TokenKind<'a>, span: Span) -> Token<'a> {
        let token = Token::new(kind, span);
        match self.flush() {
            Some(number) => {
                self.pending = Some(token);
                number
            }
            None => token,
        }
    }

    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        loop {
            let lo = self.byte;
            let Some(c) = self.bump() else {
                return self.flush();
            };
            let span = Span::new(lo, self.byte);

            let kind = match c {
                '0'..='9' | '.' => {
                    self.run = Some(self.run.map_or(span, |run| run.join(span)));
                    continue;
                }

                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '^' => TokenKind::Caret,
                ')' => TokenKind::RParen,

                '(' => {
                    // a run reaching `(` is dropped, never flushed
                    self.run = None;
                    return Some(Token::new(TokenKind::LParen, span));
                }

                _ => continue,
            };

            return Some(self.punct(kind, span));
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind<'_>> {
        Lexer::new(input).map(|token| token.kind).collect()
    }

    fn number(lexeme: &str) -> TokenKind<'_> {
        TokenKind::Number(Cow::Borrowed(lexeme))
    }

    #[test]
    fn empty_input() {
        assert!(Lexer::new("").lex_all().is_empty());
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            kinds("+-*/^()"),
            [
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Caret,
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn flushes_run_before_operator() {
        assert_eq!(kinds("2+30"), [number("2"), TokenKind::Plus, number("30")]);
    }

    #[test]
    fn ignores_insignificant_characters() {
        assert_eq!(
            kinds("2 + abc;3"),
            [number("2"), TokenKind::Plus, number("3")]
        );
    }

    #[test]
    fn run_survives_interleaved_characters() {
        let tokens = Lexer::new("1 2").lex_all();
        assert_eq!(tokens, [Token::new(number("12"), Span::new(0, 3))]);
    }

    #[test]
    fn malformed_run_is_one_lexeme() {
        assert_eq!(kinds("1.2.3"), [number("1.2.3")]);
    }

    #[test]
    fn run_before_open_paren_is_dropped() {
        assert_eq!(
            kinds("12(3)"),
            [TokenKind::LParen, number("3"), TokenKind::RParen]
        );
    }

    #[test]
    fn close_paren_flushes_run() {
        assert_eq!(
            kinds("(3)"),
            [TokenKind::LParen, number("3"), TokenKind::RParen]
        );
    }

    #[test]
    fn spans_cover_lexemes() {
        let tokens = Lexer::new("12+3").lex_all();
        let spans: Vec<Span> = tokens.into_iter().map(|token| token.span).collect();
        assert_eq!(spans, [Span::new(0, 2), Span::new(2, 3), Span::new(3, 4)]);
    }
}
