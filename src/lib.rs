use std::io::Write;

use tracing::info;

pub mod ast;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod token;
pub mod value;

pub use crate::{
    ast::Program,
    config::RunOptions,
    environment::Environment,
    error::{ParseError, RuntimeError, TipsError},
    evaluator::{Eval, Exec},
    input::InputSource,
    value::{Value, VarType},
};
use crate::{lexer::Lexer, token::TokenKind};

/// Parses a whole program, declaring its variables in `env`.
pub fn parse_source(source: &str, env: &mut Environment) -> Result<Program, ParseError> {
    parser::parse_program(Lexer::new(source), env)
}

/// Writes `line KIND [lexeme]` per token up to EOF; stops at the first
/// unknown lexeme with a lexical error.
pub fn dump_tokens(source: &str, out: &mut dyn Write) -> Result<(), TipsError> {
    let mut lexer = Lexer::new(source);
    loop {
        let token = lexer.next_token();
        if token.kind.shows_lexeme() {
            writeln!(out, "{} {} {}", token.line, token.kind, token.lexeme)?;
        } else {
            writeln!(out, "{} {}", token.line, token.kind)?;
        }
        match token.kind {
            TokenKind::Unknown => {
                return Err(ParseError::UnknownLexeme {
                    line:   token.line,
                    lexeme: token.lexeme,
                }
                .into())
            }
            TokenKind::Eof => return Ok(()),
            _ => {}
        }
    }
}

/// Parses and executes `source`, returning the final environment.
///
/// Output already written before a failure stays written.
pub fn run_source(
    source: &str,
    options: &RunOptions,
    out: &mut dyn Write,
    input: &mut InputSource,
) -> Result<Environment, TipsError> {
    let mut env = Environment::new();
    if options.tokens_only {
        dump_tokens(source, out)?;
        return Ok(env);
    }

    let program = parse_source(source, &mut env)?;
    info!(program = %program.name, slots = env.len(), "parsed");
    if options.print_ast {
        write!(out, "{}", program)?;
    }

    program.exec(&mut env, out, input)?;
    info!(program = %program.name, "executed");

    if options.dump_symbols {
        write!(out, "{}", env)?;
    }
    Ok(env)
}
