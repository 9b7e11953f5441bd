use std::fs;

use clap::Parser;
use turtlec::{compiler::evaluator::core::Context, parse};

/// turtlec compiles a small turtle-graphics language into plotter commands,
/// printed one per line on standard output.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells turtlec to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let program = match parse(&script) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    let mut context = Context::new();
    let result = program.iter()
                        .try_for_each(|statement| context.eval_statement(statement));

    // Whatever was emitted before a failure still goes out.
    for command in &context.commands {
        println!("{command}");
    }

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
