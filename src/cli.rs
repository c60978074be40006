use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tips")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interpreter for the TIPS teaching language subset", long_about = None)]
pub struct Args {
    /// Program source; stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the AST after parsing
    #[arg(short = 'p')]
    pub print_ast: bool,

    /// Tokenize only (dump tokens) and exit
    #[arg(short = 't')]
    pub tokens: bool,

    /// Print the symbol table after interpretation
    #[arg(short = 's')]
    pub symbols: bool,

    /// Enable debug traces on stderr
    #[arg(short = 'd')]
    pub debug: bool,
}
