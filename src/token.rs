use derive_more::Display;
use phf::phf_map;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    #[display(fmt = "PROGRAM")]
    Program,
    #[display(fmt = "BEGIN")]
    Begin,
    #[display(fmt = "END")]
    End,
    #[display(fmt = "VAR")]
    Var,
    #[display(fmt = "READ")]
    Read,
    #[display(fmt = "WRITE")]
    Write,
    #[display(fmt = "IF")]
    If,
    #[display(fmt = "THEN")]
    Then,
    #[display(fmt = "ELSE")]
    Else,
    #[display(fmt = "WHILE")]
    While,

    // Data types
    #[display(fmt = "INTEGER")]
    Integer,
    #[display(fmt = "REAL")]
    Real,

    // Punctuation
    #[display(fmt = "SEMICOLON")]
    Semicolon,
    #[display(fmt = "COLON")]
    Colon,
    #[display(fmt = "OPENPAREN")]
    OpenParen,
    #[display(fmt = "CLOSEPAREN")]
    CloseParen,

    // Operators
    #[display(fmt = "PLUS")]
    Plus,
    #[display(fmt = "MINUS")]
    Minus,
    #[display(fmt = "MULTIPLY")]
    Multiply,
    #[display(fmt = "DIVIDE")]
    Divide,
    #[display(fmt = "ASSIGN")]
    Assign,
    #[display(fmt = "EQUALTO")]
    EqualTo,
    #[display(fmt = "LESSTHAN")]
    LessThan,
    #[display(fmt = "GREATERTHAN")]
    GreaterThan,
    #[display(fmt = "NOTEQUALTO")]
    NotEqualTo,
    #[display(fmt = "MOD")]
    Mod,
    #[display(fmt = "NOT")]
    Not,
    #[display(fmt = "OR")]
    Or,
    #[display(fmt = "AND")]
    And,
    /// `^^`, real-valued exponentiation
    #[display(fmt = "CUSTOM OPERATOR")]
    Power,
    #[display(fmt = "INCREMENT")]
    Increment,
    #[display(fmt = "DECREMENT")]
    Decrement,

    // Identifiers + literals
    #[display(fmt = "IDENT")]
    Ident,
    #[display(fmt = "INTLIT")]
    IntLit,
    #[display(fmt = "FLOATLIT")]
    FloatLit,
    #[display(fmt = "STRINGLIT")]
    StringLit,

    #[display(fmt = "EOF")]
    Eof,
    #[display(fmt = "UNKNOWN")]
    Unknown,
}

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "PROGRAM" => TokenKind::Program,
    "BEGIN" => TokenKind::Begin,
    "END" => TokenKind::End,
    "VAR" => TokenKind::Var,
    "READ" => TokenKind::Read,
    "WRITE" => TokenKind::Write,
    "IF" => TokenKind::If,
    "THEN" => TokenKind::Then,
    "ELSE" => TokenKind::Else,
    "WHILE" => TokenKind::While,
    "INTEGER" => TokenKind::Integer,
    "REAL" => TokenKind::Real,
    "MOD" => TokenKind::Mod,
    "NOT" => TokenKind::Not,
    "OR" => TokenKind::Or,
    "AND" => TokenKind::And,
};

impl TokenKind {
    pub fn lookup_ident(ident: &str) -> TokenKind {
        KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
    }

    /// Kinds whose lexeme is worth showing in a token dump.
    pub fn shows_lexeme(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::IntLit
                | TokenKind::FloatLit
                | TokenKind::StringLit
                | TokenKind::Unknown
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind:   TokenKind,
    pub lexeme: String,
    pub line:   usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn eof(line: usize) -> Token {
        Token::new(TokenKind::Eof, String::new(), line)
    }
}

/// Pull interface between the scanner and the parser.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Replays a prepared token list, then EOF forever.
impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or_else(|| Token::eof(0))
    }
}
