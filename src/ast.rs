use std::fmt::{self, Display, Formatter};

use derive_more::Unwrap;

use crate::{environment::Environment, token::TokenKind, value::VarType};

#[derive(Debug, Clone, PartialEq, Unwrap)]
pub enum Expr {
    IntegerLit(i64),
    RealLit(f64),
    Identifier(String),
    /// operator, operand
    UnaryOp(TokenKind, Box<Expr>),
    /// operator, left, right
    BinaryOp(TokenKind, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, PartialEq, Unwrap)]
pub enum Stmt {
    /// target, value
    Assign(String, Expr),
    Read(String),
    /// content, content names an identifier
    Write(String, bool),
    Compound(Vec<Stmt>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name:     String,
    pub var_type: VarType,
    pub line:     usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub declarations: Vec<Declaration>,
    /// Always a `Stmt::Compound`.
    pub compound:     Stmt,
}

impl Block {
    /// A freshly initialised environment holding this block's declarations.
    pub fn environment(&self) -> Environment {
        let mut env = Environment::new();
        for decl in &self.declarations {
            env.declare(&decl.name, decl.var_type);
        }
        env
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name:  String,
    pub block: Block,
}

fn ast_line(out: &mut dyn fmt::Write, prefix: &str, last: bool, label: &str) -> fmt::Result {
    writeln!(out, "{}{}{}", prefix, if last { "└── " } else { "├── " }, label)
}

fn child_prefix(prefix: &str, last: bool) -> String {
    format!("{}{}", prefix, if last { "    " } else { "│   " })
}

impl Expr {
    pub fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        match self {
            Expr::IntegerLit(v) => ast_line(out, prefix, is_last, &format!("IntegerLiteral {}", v)),
            Expr::RealLit(v) => ast_line(out, prefix, is_last, &format!("RealLiteral {:?}", v)),
            Expr::Identifier(name) => ast_line(out, prefix, is_last, &format!("Identifier {}", name)),
            Expr::UnaryOp(op, operand) => {
                ast_line(out, prefix, is_last, &format!("Unary {}", op))?;
                operand.render(out, &child_prefix(prefix, is_last), true)
            }
            Expr::BinaryOp(op, left, right) => {
                ast_line(out, prefix, is_last, &format!("Binary {}", op))?;
                let prefix = child_prefix(prefix, is_last);
                left.render(out, &prefix, false)?;
                right.render(out, &prefix, true)
            }
        }
    }
}

impl Stmt {
    pub fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        match self {
            Stmt::Assign(target, value) => {
                ast_line(out, prefix, is_last, &format!("Assign {} :=", target))?;
                value.render(out, &child_prefix(prefix, is_last), true)
            }
            Stmt::Read(target) => ast_line(out, prefix, is_last, &format!("Read {}", target)),
            Stmt::Write(content, true) => {
                ast_line(out, prefix, is_last, &format!("Write (IDENT) {}", content))
            }
            Stmt::Write(content, false) => {
                ast_line(out, prefix, is_last, &format!("Write (STRING) {:?}", content))
            }
            Stmt::Compound(stmts) => {
                ast_line(out, prefix, is_last, "Compound")?;
                let prefix = child_prefix(prefix, is_last);
                for (i, stmt) in stmts.iter().enumerate() {
                    stmt.render(out, &prefix, i + 1 == stmts.len())?;
                }
                Ok(())
            }
        }
    }
}

impl Block {
    pub fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        ast_line(out, prefix, is_last, "Block")?;
        let prefix = child_prefix(prefix, is_last);
        if !self.declarations.is_empty() {
            ast_line(out, &prefix, false, "Symbol Table:")?;
            let table_prefix = child_prefix(&prefix, false);
            for (i, decl) in self.declarations.iter().enumerate() {
                let label = format!("{} : {}", decl.name, decl.var_type);
                ast_line(out, &table_prefix, i + 1 == self.declarations.len(), &label)?;
            }
        }
        self.compound.render(out, &prefix, true)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "Program")?;
        ast_line(f, "", false, &format!("name: {}", self.name))?;
        self.block.render(f, "", true)
    }
}
