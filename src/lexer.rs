use crate::token::{Token, TokenKind, TokenSource};

#[derive(Debug)]
pub struct Lexer {
    input:         Vec<char>,
    position:      usize,
    read_position: usize,
    ch:            char,
    line:          usize,
}

impl Lexer {
    pub fn new(input: &str) -> Lexer {
        let mut l = Lexer {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
            line: 1,
        };
        l.read_char();
        l
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied().unwrap_or('\0');
        self.position = self.read_position;
        if self.read_position <= self.input.len() {
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> char {
        self.input.get(self.read_position).copied().unwrap_or('\0')
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Token {
        if let Err(token) = self.skip_whitespace_and_comments() {
            return token;
        }
        if self.at_end() {
            return Token::eof(self.line);
        }

        let line = self.line;
        let ch = self.ch;
        let two = |kind: TokenKind, lexeme: &str| Some(Token::new(kind, lexeme, line));

        // Two-character operators first
        let token = match (ch, self.peek_char()) {
            (':', '=') => two(TokenKind::Assign, ":="),
            ('+', '+') => two(TokenKind::Increment, "++"),
            ('-', '-') => two(TokenKind::Decrement, "--"),
            ('^', '^') => two(TokenKind::Power, "^^"),
            ('<', '>') => two(TokenKind::NotEqualTo, "<>"),
            _ => None,
        };
        if let Some(token) = token {
            self.read_char();
            self.read_char();
            return token;
        }

        let kind = match ch {
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '=' => TokenKind::EqualTo,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            '"' | '\'' => return self.read_string(ch),
            _ if is_letter(ch) => {
                let ident = self.read_identifier();
                return Token::new(TokenKind::lookup_ident(&ident), ident, line);
            }
            _ if ch.is_ascii_digit() => return self.read_number(),
            _ => TokenKind::Unknown,
        };
        self.read_char();
        Token::new(kind, ch.to_string(), line)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), Token> {
        loop {
            match self.ch {
                '\n' => self.line += 1,
                ' ' | '\t' | '\r' => {}
                '{' => {
                    let line = self.line;
                    while self.ch != '}' {
                        if self.at_end() {
                            return Err(Token::new(TokenKind::Unknown, "{", line));
                        }
                        if self.ch == '\n' {
                            self.line += 1;
                        }
                        self.read_char();
                    }
                }
                _ => return Ok(()),
            }
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let position = self.position;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.read_char();
        }
        self.input[position..self.position].iter().collect()
    }

    fn read_digits(&mut self) {
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
    }

    fn read_number(&mut self) -> Token {
        let position = self.position;
        let mut kind = TokenKind::IntLit;
        self.read_digits();

        if self.ch == '.' && self.peek_char().is_ascii_digit() {
            kind = TokenKind::FloatLit;
            self.read_char();
            self.read_digits();

            if self.ch == 'e' || self.ch == 'E' {
                let mark = (self.position, self.read_position, self.ch);
                self.read_char();
                if self.ch == '+' || self.ch == '-' {
                    self.read_char();
                }
                if self.ch.is_ascii_digit() {
                    self.read_digits();
                } else {
                    // not an exponent after all
                    (self.position, self.read_position, self.ch) = mark;
                }
            }
        }

        let lexeme: String = self.input[position..self.position].iter().collect();
        Token::new(kind, lexeme, self.line)
    }

    fn read_string(&mut self, quote: char) -> Token {
        let line = self.line;
        let mut result = String::new();
        loop {
            self.read_char();
            if self.at_end() {
                let mut lexeme = quote.to_string();
                lexeme.push_str(&result);
                return Token::new(TokenKind::Unknown, lexeme, line);
            }
            match self.ch {
                c if c == quote => break,
                '\n' => {
                    self.line += 1;
                    result.push('\n');
                }
                c => result.push(c),
            }
        }
        self.read_char();
        Token::new(TokenKind::StringLit, result, line)
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        Lexer::next_token(self)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_token() {
        let input = r#"PROGRAM demo;
        VAR
          x : INTEGER;
          y : REAL;
        { a comment
          over two lines }
        BEGIN
          READ(x);
          y := ++x * 2.5 ^^ 1.0e2 MOD 3 - (x / 4);
          WRITE("hi there");
          WRITE('single')
        END
        "#;

        let expected = vec![
            (TokenKind::Program, "PROGRAM", 1),
            (TokenKind::Ident, "demo", 1),
            (TokenKind::Semicolon, ";", 1),
            (TokenKind::Var, "VAR", 2),
            (TokenKind::Ident, "x", 3),
            (TokenKind::Colon, ":", 3),
            (TokenKind::Integer, "INTEGER", 3),
            (TokenKind::Semicolon, ";", 3),
            (TokenKind::Ident, "y", 4),
            (TokenKind::Colon, ":", 4),
            (TokenKind::Real, "REAL", 4),
            (TokenKind::Semicolon, ";", 4),
            (TokenKind::Begin, "BEGIN", 7),
            (TokenKind::Read, "READ", 8),
            (TokenKind::OpenParen, "(", 8),
            (TokenKind::Ident, "x", 8),
            (TokenKind::CloseParen, ")", 8),
            (TokenKind::Semicolon, ";", 8),
            (TokenKind::Ident, "y", 9),
            (TokenKind::Assign, ":=", 9),
            (TokenKind::Increment, "++", 9),
            (TokenKind::Ident, "x", 9),
            (TokenKind::Multiply, "*", 9),
            (TokenKind::FloatLit, "2.5", 9),
            (TokenKind::Power, "^^", 9),
            (TokenKind::FloatLit, "1.0e2", 9),
            (TokenKind::Mod, "MOD", 9),
            (TokenKind::IntLit, "3", 9),
            (TokenKind::Minus, "-", 9),
            (TokenKind::OpenParen, "(", 9),
            (TokenKind::Ident, "x", 9),
            (TokenKind::Divide, "/", 9),
            (TokenKind::IntLit, "4", 9),
            (TokenKind::CloseParen, ")", 9),
            (TokenKind::Semicolon, ";", 9),
            (TokenKind::Write, "WRITE", 10),
            (TokenKind::OpenParen, "(", 10),
            (TokenKind::StringLit, "hi there", 10),
            (TokenKind::CloseParen, ")", 10),
            (TokenKind::Semicolon, ";", 10),
            (TokenKind::Write, "WRITE", 11),
            (TokenKind::OpenParen, "(", 11),
            (TokenKind::StringLit, "single", 11),
            (TokenKind::CloseParen, ")", 11),
            (TokenKind::End, "END", 12),
            (TokenKind::Eof, "", 13),
        ];

        let mut lexer = Lexer::new(input);

        for (i, (kind, lexeme, line)) in expected.into_iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(token.kind, kind, "tests[{}]: wrong kind, got {:?}", i, token);
            assert_eq!(token.lexeme, lexeme, "tests[{}]: wrong lexeme", i);
            assert_eq!(token.line, line, "tests[{}]: wrong line for {:?}", i, token);
        }
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_operators() {
        let inputs = vec![
            ("--", TokenKind::Decrement),
            ("-", TokenKind::Minus),
            ("<>", TokenKind::NotEqualTo),
            ("<", TokenKind::LessThan),
            (">", TokenKind::GreaterThan),
            ("=", TokenKind::EqualTo),
            (":", TokenKind::Colon),
            ("^", TokenKind::Unknown),
            ("@", TokenKind::Unknown),
        ];

        for (input, expected) in inputs {
            let token = Lexer::new(input).next_token();
            assert_eq!(token.kind, expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_numbers() {
        let inputs = vec![
            ("42", TokenKind::IntLit, "42"),
            ("3.25", TokenKind::FloatLit, "3.25"),
            ("6.0E-1", TokenKind::FloatLit, "6.0E-1"),
            ("7.", TokenKind::IntLit, "7"),
        ];

        for (input, kind, lexeme) in inputs {
            let token = Lexer::new(input).next_token();
            assert_eq!(token.kind, kind, "input {:?}", input);
            assert_eq!(token.lexeme, lexeme, "input {:?}", input);
        }

        // exponent marker without digits is left for the next token
        let mut lexer = Lexer::new("1.5e");
        assert_eq!(lexer.next_token().lexeme, "1.5");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(Lexer::new("\"open").next_token().kind, TokenKind::Unknown);
        assert_eq!(Lexer::new("{ never closed").next_token().kind, TokenKind::Unknown);
    }
}
