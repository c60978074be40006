use std::{
    fs,
    io::{self, Read, Write},
    process,
};

use clap::Parser;
use tips::{cli::Args, logging, run_source, InputSource, RunOptions, TipsError};

fn main() {
    let args = Args::parse();
    let options = RunOptions::from_args(&args);
    logging::init(options.debug);

    if let Err(e) = run(&args, &options) {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}

fn run(args: &Args, options: &RunOptions) -> Result<(), TipsError> {
    let source = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = InputSource::new(stdin.lock());

    let result = run_source(&source, options, &mut out, &mut input);
    out.flush()?;
    result.map(|_| ())
}
