//! Token definitions

/// Classification of one token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Dot,
    Colon,
    Equals,
    Minus,

    // multi-character operators
    Arrow,
    FatArrow,
    ColonColon,
    ColonEquals,

    // literals and names
    Identifier,
    Number,
    String,
    Comment,

    // control
    Error,
    Eof,
}

impl TokenKind {
    /// Display name used by the token trace and the disassembler
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::LeftBrace => "left_brace",
            TokenKind::RightBrace => "right_brace",
            TokenKind::LeftBracket => "left_bracket",
            TokenKind::RightBracket => "right_bracket",
            TokenKind::Comma => "comma",
            TokenKind::Dot => "dot",
            TokenKind::Colon => "colon",
            TokenKind::Equals => "equals",
            TokenKind::Minus => "minus",
            TokenKind::Arrow => "arrow",
            TokenKind::FatArrow => "fat_arrow",
            TokenKind::ColonColon => "colon_colon",
            TokenKind::ColonEquals => "colon_equals",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Error => "error",
            TokenKind::Eof => "eof",
        }
    }
}

/// One scanned token
///
/// The lexeme borrows from the source buffer, so the source must outlive
/// every token produced from it. For `Error` tokens the lexeme is the
/// error message instead of a source span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    /// 1-based source line the token starts on (for `Error` tokens,
    /// the line at the failure point)
    pub line: usize,
}

impl<'src> Token<'src> {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}
