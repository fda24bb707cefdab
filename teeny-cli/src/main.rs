//! Entrypoint for CLI
mod error;

use std::{env, fs, process};

use log::{error, info, LevelFilter};
use teeny_compiler::{constants::DEFAULT_OUTPUT, prelude::*};

use self::error::AppResult;

static USAGE: &str = r#"
usage: teeny FILE

Compiles the Teeny Tiny program in FILE to C source.
The output is always written to out.c in the working directory.

examples:
    teeny hello.teeny
    teeny fib.teeny && cc out.c -o fib
"#;

/// FreeBSD EX_USAGE
const EXIT_USAGE: i32 = 64;

fn main() {
    if let Err(err) = init_logger() {
        eprintln!("{err}");
        process::exit(1);
    }

    let filepath = match parse_args() {
        Some(filepath) => filepath,
        None => {
            print_usage();
            process::exit(EXIT_USAGE)
        }
    };

    if let Err(err) = run_compiler(&filepath) {
        error!("{err}");
        // The logger may be filtered off by `RUST_LOG`.
        eprintln!("{err}");
        process::exit(1);
    }
}

/// Level defaults to `Info`, and can be overridden with `RUST_LOG`.
fn init_logger() -> AppResult<()> {
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;
    Ok(())
}

fn run_compiler(filepath: &str) -> AppResult<()> {
    info!("Teeny Tiny Compiler");
    info!("compiling {filepath}");

    let source_code = fs::read_to_string(filepath)?;

    // Output is only written when the whole program compiled.
    let emitter = compile_with(source_code, CompileConf::default())?;
    emitter.flush()?;

    info!("compiling completed, wrote {DEFAULT_OUTPUT}");

    Ok(())
}

/// Exactly one argument, the source file path.
fn parse_args() -> Option<String> {
    let mut args = env::args().skip(1);
    let filepath = args.next()?;
    match args.next() {
        Some(_) => None,
        None => Some(filepath),
    }
}

fn print_usage() {
    println!("Teeny Tiny Compiler v{}", env!("CARGO_PKG_VERSION"));
    println!("{USAGE}");
}
