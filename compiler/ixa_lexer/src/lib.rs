//! Ixa Lexer - tokenizer for index and range expressions.
//!
//! Built on `logos`. Whitespace is skipped; there are no comments. The
//! intersection operator has an ASCII spelling (`&`) next to `∩`, so
//! expressions can be typed without Unicode input.

use ixa_ir::Span;
use logos::Logos;

/// Token kinds produced by the lexer.
#[derive(Logos, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    // Literals
    /// Non-negative integer literal; `-` is always a separate token.
    ///
    /// `i64::MIN` therefore has no literal spelling: `9223372036854775808`
    /// fails with `IntegerTooLarge`. Write `-9223372036854775807 - 1`.
    #[regex(r"[0-9][0-9_]*", |lex| lex.slice().replace('_', "").parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Ident(String),

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("∩")]
    #[token("&")]
    Cap,
    #[token("±")]
    PlusMinus,
    #[token("∓")]
    MinusPlus,

    // Punctuation
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("$")]
    Dollar,
}

impl TokenKind {
    /// How the token is named in parse errors.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Plus => "`+`".to_owned(),
            TokenKind::Minus => "`-`".to_owned(),
            TokenKind::Star => "`*`".to_owned(),
            TokenKind::Slash => "`/`".to_owned(),
            TokenKind::Percent => "`%`".to_owned(),
            TokenKind::Cap => "`∩`".to_owned(),
            TokenKind::PlusMinus => "`±`".to_owned(),
            TokenKind::MinusPlus => "`∓`".to_owned(),
            TokenKind::Colon => "`:`".to_owned(),
            TokenKind::Comma => "`,`".to_owned(),
            TokenKind::LParen => "`(`".to_owned(),
            TokenKind::RParen => "`)`".to_owned(),
            TokenKind::Dollar => "`$`".to_owned(),
        }
    }
}

/// A token with its source span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexing failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character `{text}`")]
    UnexpectedChar { text: String, span: Span },

    #[error("integer literal `{text}` does not fit in a 64-bit index")]
    IntegerTooLarge { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. } | LexError::IntegerTooLarge { span, .. } => *span,
        }
    }
}

/// Tokenize `source`, stopping at the first invalid token.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let text = lexer.slice().to_owned();
        match result {
            Ok(kind) => tokens.push(Token::new(kind, span)),
            // The integer regex matched but the value overflowed.
            Err(()) if text.starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(LexError::IntegerTooLarge { text, span });
            }
            Err(()) => return Err(LexError::UnexpectedChar { text, span }),
        }
    }
    Ok(tokens)
}
