use tracing::trace;

use crate::{
    ast::{Block, Declaration, Expr, Program, Stmt},
    environment::Environment,
    error::ParseError,
    token::{Token, TokenKind, TokenSource},
    value::VarType,
};

type ParseResult<T> = Result<T, ParseError>;

/// Predictive recursive-descent parser with one token of lookahead.
///
/// Declarations are entered into `env` as they are parsed; the first
/// mismatch aborts the whole parse.
pub struct Parser<'e, S: TokenSource> {
    source: S,
    peeked: Option<Token>,
    env:    &'e mut Environment,
}

pub fn parse_program<S: TokenSource>(source: S, env: &mut Environment) -> ParseResult<Program> {
    Parser::new(source, env).parse_program()
}

impl<'e, S: TokenSource> Parser<'e, S> {
    pub fn new(source: S, env: &'e mut Environment) -> Parser<'e, S> {
        Parser {
            source,
            peeked: None,
            env,
        }
    }

    fn pull(&mut self) -> ParseResult<Token> {
        let token = self.source.next_token();
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "peek");
        if token.kind == TokenKind::Unknown {
            return Err(ParseError::UnknownLexeme {
                line:   token.line,
                lexeme: token.lexeme,
            });
        }
        Ok(token)
    }

    /// The next token, pulled from the source at most once until consumed.
    pub fn peek(&mut self) -> ParseResult<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        Ok(&*self.peeked.insert(token))
    }

    fn peek_kind(&mut self) -> ParseResult<TokenKind> {
        Ok(self.peek()?.kind)
    }

    pub fn consume(&mut self) -> ParseResult<Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        trace!(kind = %token.kind, "consume");
        Ok(token)
    }

    pub fn expect(&mut self, kind: TokenKind, context: &'static str) -> ParseResult<Token> {
        let token = self.consume()?;
        if token.kind != kind {
            trace!(wanted = %kind, got = %token.kind, "expect failed");
            return Err(unexpected(&token, &kind.to_string(), context));
        }
        Ok(token)
    }

    fn unexpected_here(&mut self, expected: &str, context: &'static str) -> ParseError {
        match self.peek() {
            Ok(token) => unexpected(token, expected, context),
            Err(e) => e,
        }
    }

    // Program := PROGRAM IDENT ';' Block EOF
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        self.expect(TokenKind::Program, "at start of program")?;
        let name = self.expect(TokenKind::Ident, "as program name")?.lexeme;
        self.expect(TokenKind::Semicolon, "after program name")?;
        let block = self.parse_block()?;
        self.expect(TokenKind::Eof, "at end of program")?;
        Ok(Program { name, block })
    }

    // Block := [ VAR { Declaration } ] Compound
    fn parse_block(&mut self) -> ParseResult<Block> {
        let mut declarations = vec![];
        if self.peek_kind()? == TokenKind::Var {
            self.consume()?;
            while self.peek_kind()? == TokenKind::Ident {
                declarations.push(self.parse_declaration()?);
            }
        }
        let compound = self.parse_compound()?;
        Ok(Block {
            declarations,
            compound,
        })
    }

    // Declaration := IDENT ':' (INTEGER | REAL) ';'
    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let ident = self.expect(TokenKind::Ident, "in declaration")?;
        self.expect(TokenKind::Colon, "after declared identifier")?;
        let var_type = match self.peek_kind()? {
            TokenKind::Integer => VarType::Integer,
            TokenKind::Real => VarType::Real,
            _ => return Err(self.unexpected_here("INTEGER or REAL", "as declared type")),
        };
        self.consume()?;
        self.expect(TokenKind::Semicolon, "after declaration")?;

        if !self.env.declare(&ident.lexeme, var_type) {
            return Err(ParseError::DuplicateDeclaration {
                line: ident.line,
                name: ident.lexeme,
            });
        }
        Ok(Declaration {
            name: ident.lexeme,
            var_type,
            line: ident.line,
        })
    }

    // Compound := BEGIN Statement { ';' Statement } END
    fn parse_compound(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::Begin, "to open compound statement")?;
        let mut stmts = vec![self.parse_statement()?];
        while self.peek_kind()? == TokenKind::Semicolon {
            self.consume()?;
            // tolerate a separator right before END
            if self.peek_kind()? == TokenKind::End {
                break;
            }
            stmts.push(self.parse_statement()?);
        }
        self.expect(TokenKind::End, "to close compound statement")?;
        Ok(Stmt::Compound(stmts))
    }

    // Statement := Assignment | Read | Write | Compound
    fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.peek_kind()? {
            TokenKind::Ident => self.parse_assignment(),
            TokenKind::Begin => self.parse_compound(),
            TokenKind::Read => self.parse_read(),
            TokenKind::Write => self.parse_write(),
            _ => Err(self.unexpected_here("IDENT, BEGIN, READ or WRITE", "to start a statement")),
        }
    }

    // Assignment := IDENT ':=' Value
    fn parse_assignment(&mut self) -> ParseResult<Stmt> {
        let target = self.expect(TokenKind::Ident, "as assignment target")?.lexeme;
        self.expect(TokenKind::Assign, "after assignment target")?;
        let value = self.parse_value()?;
        Ok(Stmt::Assign(target, value))
    }

    // Read := READ '(' IDENT ')'
    fn parse_read(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::Read, "at start of READ")?;
        self.expect(TokenKind::OpenParen, "after READ")?;
        let target = self.expect(TokenKind::Ident, "as READ target")?.lexeme;
        self.expect(TokenKind::CloseParen, "to close READ")?;
        Ok(Stmt::Read(target))
    }

    // Write := WRITE '(' (STRINGLIT | IDENT) ')'
    fn parse_write(&mut self) -> ParseResult<Stmt> {
        self.expect(TokenKind::Write, "at start of WRITE")?;
        self.expect(TokenKind::OpenParen, "after WRITE")?;
        let is_identifier = match self.peek_kind()? {
            TokenKind::Ident => true,
            TokenKind::StringLit => false,
            _ => return Err(self.unexpected_here("STRINGLIT or IDENT", "as WRITE argument")),
        };
        let content = self.consume()?.lexeme;
        self.expect(TokenKind::CloseParen, "to close WRITE")?;
        Ok(Stmt::Write(content, is_identifier))
    }

    // Value := Term { ('+'|'-') Term }
    fn parse_value(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        while let op @ (TokenKind::Plus | TokenKind::Minus) = self.peek_kind()? {
            self.consume()?;
            let right = self.parse_term()?;
            left = Expr::BinaryOp(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    // Term := Factor { ('*'|'/'|MOD|'^^') Factor }
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let op @ (TokenKind::Multiply | TokenKind::Divide | TokenKind::Mod | TokenKind::Power) =
            self.peek_kind()?
        {
            self.consume()?;
            let right = self.parse_factor()?;
            left = Expr::BinaryOp(op, Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    // Factor := [ '++' | '--' | '-' ] Primary
    fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.peek_kind()? {
            op @ (TokenKind::Increment | TokenKind::Decrement | TokenKind::Minus) => {
                self.consume()?;
                let operand = self.parse_primary()?;
                Ok(Expr::UnaryOp(op, Box::new(operand)))
            }
            _ => self.parse_primary(),
        }
    }

    // Primary := INTLIT | FLOATLIT | IDENT | '(' Value ')'
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.peek_kind()? {
            TokenKind::IntLit => {
                let token = self.consume()?;
                token
                    .lexeme
                    .parse::<i64>()
                    .map(Expr::IntegerLit)
                    .map_err(|_| unexpected(&token, "INTLIT", "within 64-bit range"))
            }
            TokenKind::FloatLit => {
                let token = self.consume()?;
                token
                    .lexeme
                    .parse::<f64>()
                    .map(Expr::RealLit)
                    .map_err(|_| unexpected(&token, "FLOATLIT", "in decimal notation"))
            }
            TokenKind::Ident => Ok(Expr::Identifier(self.consume()?.lexeme)),
            TokenKind::OpenParen => {
                self.consume()?;
                let value = self.parse_value()?;
                self.expect(TokenKind::CloseParen, "to close parenthesised value")?;
                Ok(value)
            }
            _ => Err(self.unexpected_here("INTLIT, FLOATLIT, IDENT or OPENPAREN", "in value")),
        }
    }
}

fn unexpected(token: &Token, expected: &str, context: &'static str) -> ParseError {
    ParseError::Unexpected {
        line: token.line,
        expected: expected.to_string(),
        context,
        found: token.kind,
        lexeme: token.lexeme.clone(),
    }
}
