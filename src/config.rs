use crate::cli::Args;

/// What a run does besides executing the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the AST after parsing.
    pub print_ast:    bool,
    /// Print every slot after the run.
    pub dump_symbols: bool,
    /// Only dump tokens.
    pub tokens_only:  bool,
    pub debug:        bool,
}

impl RunOptions {
    pub fn from_args(args: &Args) -> Self {
        RunOptions {
            print_ast:    args.print_ast,
            dump_symbols: args.symbols,
            tokens_only:  args.tokens,
            debug:        args.debug,
        }
    }
}
