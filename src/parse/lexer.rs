use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Div,

    #[regex(r"[0-9]+")]
    Constant,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    /// The dice operator, also used as the drop-lowest modifier.
    #[token("d")]
    D,
    /// The keep-top modifier.
    #[token("t")]
    T,

    /// Any other run of letters, such as `dx` or `kh`.
    #[regex(r"[a-z]+")]
    Unknown,

    // Characters matching none of the rules above are dropped by `tokenize`.
    #[error]
    Error,
}

impl TokenKind {
    pub const MODIFIERS: &'static [Self] = &[Self::D, Self::T];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Plus => "'+'",
            Minus => "'-'",
            Times => "'*'",
            Div => "'/'",
            Constant => "<constant>",
            LeftParen => "'('",
            RightParen => "')'",
            D => "'d'",
            T => "'t'",
            Unknown => "<unknown>",
            Error => "<error>",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub slice: &'a str,
    /// Byte offset of the token in the tokenized string.
    pub position: usize,
}

/// Splits `s` into tokens. Letters are only recognized in lowercase; characters that
/// start no token are skipped.
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut lexer = TokenKind::lexer(s);
    let mut tokens = Vec::new();
    while let Some(kind) = lexer.next() {
        if kind != TokenKind::Error {
            tokens.push(Token {
                kind,
                slice: lexer.slice(),
                position: lexer.span().start,
            });
        }
    }
    tokens
}

/// A fully tokenized input with a cursor over it. Only the cursor ever moves.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    cursor: usize,
    end: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            tokens: tokenize(s),
            cursor: 0,
            end: s.len(),
        }
    }

    pub fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.cursor)
    }

    pub fn lookahead(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.cursor + 1)
    }

    pub fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.tokens.get(self.cursor).copied();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Position of the current token, or the end of the input once exhausted.
    pub fn position(&self) -> usize {
        self.current().map_or(self.end, |token| token.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s).into_iter().map(|token| token.kind).collect()
    }

    #[test]
    fn test_lex_dice() {
        assert_eq!(kinds("3d6+2"), vec![Constant, D, Constant, Plus, Constant]);
        assert_eq!(
            kinds("4d6d1t2"),
            vec![Constant, D, Constant, D, Constant, T, Constant]
        );
        assert_eq!(kinds("d20"), vec![D, Constant]);
    }

    #[test]
    fn test_lex_operators() {
        assert_eq!(
            kinds("(1-2)*3/4"),
            vec![LeftParen, Constant, Minus, Constant, RightParen, Times, Constant, Div, Constant]
        );
    }

    #[test]
    fn test_lex_letter_runs() {
        assert_eq!(kinds("3d6x"), vec![Constant, D, Constant, Unknown]);
        assert_eq!(kinds("dx"), vec![Unknown]);
        assert_eq!(kinds("dd"), vec![Unknown]);
        assert_eq!(kinds("tt2"), vec![Unknown, Constant]);
        let tokens = tokenize("2kh1");
        assert_eq!(tokens[1].slice, "kh");
        assert_eq!(tokens[1].kind, Unknown);
    }

    #[test]
    fn test_lex_skips_unmatched() {
        assert_eq!(kinds(" 2 + $3 "), vec![Constant, Plus, Constant]);
        assert_eq!(kinds("1D6"), vec![Constant, Constant]);
        assert!(kinds("  %% ").is_empty());
    }

    #[test]
    fn test_lex_slices_and_positions() {
        let tokens = tokenize("12 + d8");
        let slices: Vec<_> = tokens.iter().map(|token| token.slice).collect();
        let positions: Vec<_> = tokens.iter().map(|token| token.position).collect();
        assert_eq!(slices, vec!["12", "+", "d", "8"]);
        assert_eq!(positions, vec![0, 3, 5, 6]);
    }

    #[test]
    fn test_stream_cursor() {
        let mut stream = TokenStream::new("2d6");
        assert_eq!(stream.current().map(|t| t.kind), Some(Constant));
        assert_eq!(stream.lookahead().map(|t| t.kind), Some(D));
        stream.advance();
        stream.advance();
        assert_eq!(stream.current().map(|t| t.slice), Some("6"));
        assert_eq!(stream.lookahead(), None);
        assert_eq!(stream.advance().map(|t| t.position), Some(2));
        assert_eq!(stream.current(), None);
        assert_eq!(stream.advance(), None);
        assert_eq!(stream.position(), 3);
    }
}
