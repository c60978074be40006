use std::io;

use derive_more::Display;

use crate::token::TokenKind;

/// Fatal errors raised while pulling tokens and building the tree.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum ParseError {
    #[display(fmt = "Lexical error (line {}): unknown lexeme '{}'", line, lexeme)]
    UnknownLexeme { line: usize, lexeme: String },
    #[display(
        fmt = "Parse error (line {}): expected {} {}, got {} [{}]",
        line,
        expected,
        context,
        found,
        lexeme
    )]
    Unexpected {
        line:     usize,
        expected: String,
        context:  &'static str,
        found:    TokenKind,
        lexeme:   String,
    },
    #[display(fmt = "Parse error (line {}): duplicate declaration of '{}'", line, name)]
    DuplicateDeclaration { line: usize, name: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnknownLexeme { line, .. }
            | ParseError::Unexpected { line, .. }
            | ParseError::DuplicateDeclaration { line, .. } => *line,
        }
    }
}

/// Fatal errors raised while evaluating expressions or executing statements.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum RuntimeError {
    #[display(fmt = "identifier not found: {}", _0)]
    UndeclaredIdentifier(String),
    #[display(fmt = "MOD requires INTEGER operands")]
    ModRequiresInteger,
    #[display(fmt = "EXPON must only have doubles.")]
    PowerRequiresReal,
    #[display(fmt = "++/-- must apply to an identifier")]
    IncDecRequiresIdentifier,
    #[display(fmt = "Unknown unary operator")]
    UnknownUnaryOperator(TokenKind),
    #[display(fmt = "BinaryOp: Fails to match any case.")]
    UnmatchedBinaryOperator(TokenKind),
    #[display(fmt = "division by zero")]
    DivisionByZero,
    #[display(fmt = "invalid {} input: '{}'", _0, _1)]
    InvalidInput(crate::value::VarType, String),
    #[display(fmt = "unexpected end of input")]
    EndOfInput,
    #[display(fmt = "I/O error: {}", _0)]
    Io(String),
}

impl From<io::Error> for RuntimeError {
    fn from(e: io::Error) -> Self {
        RuntimeError::Io(e.to_string())
    }
}

#[derive(Debug, Display)]
pub enum TipsError {
    #[display(fmt = "{}", _0)]
    Io(io::Error),
    #[display(fmt = "{}", _0)]
    Parse(ParseError),
    #[display(fmt = "{}", _0)]
    Runtime(RuntimeError),
}

impl TipsError {
    /// Process status for this failure; parse and runtime failures share one.
    pub fn exit_code(&self) -> i32 {
        match self {
            TipsError::Io(_) => 1,
            TipsError::Parse(_) | TipsError::Runtime(_) => 2,
        }
    }
}

impl std::error::Error for ParseError {}
impl std::error::Error for RuntimeError {}
impl std::error::Error for TipsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TipsError::Io(e) => Some(e),
            TipsError::Parse(e) => Some(e),
            TipsError::Runtime(e) => Some(e),
        }
    }
}

impl From<io::Error> for TipsError {
    fn from(e: io::Error) -> Self {
        TipsError::Io(e)
    }
}

impl From<ParseError> for TipsError {
    fn from(e: ParseError) -> Self {
        TipsError::Parse(e)
    }
}

impl From<RuntimeError> for TipsError {
    fn from(e: RuntimeError) -> Self {
        TipsError::Runtime(e)
    }
}
