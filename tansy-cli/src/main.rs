//! Tansy CLI - command-line REPL and script runner.
//!
//! This is a thin host around tansy-core that builds the executable: run
//! a file, evaluate a one-liner with `-e`, execute piped stdin, or start
//! an interactive REPL.

mod repl;

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process;

use tansy_core::Interpreter;

fn main() {
    let args: Vec<String> = env::args().collect();

    let result = if args.len() > 1 {
        match args[1].as_str() {
            "-e" => {
                if args.len() < 3 {
                    eprintln!("Usage: {} -e <code>", args[0]);
                    process::exit(1);
                }
                run_and_print_top(&args[2])
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                Ok(())
            }
            file_path => match fs::read_to_string(file_path) {
                Ok(code) => run_source(&code),
                Err(err) => Err(format!("Failed to read '{}': {}", file_path, err)),
            },
        }
    } else if !io::stdin().is_terminal() {
        let mut code = String::new();
        match io::stdin().read_to_string(&mut code) {
            Ok(_) => run_source(&code),
            Err(err) => Err(err.to_string()),
        }
    } else {
        repl::run().map_err(|err| err.to_string())
    };

    if let Err(message) = result {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn run_source(code: &str) -> Result<(), String> {
    let mut interp = Interpreter::new();
    let result = interp.execute(code);
    print!("{}", interp.output());
    result.map_err(|err| format!("Error: {}", err))
}

// Evaluate mode: execute code, then print the top of the stack.
fn run_and_print_top(code: &str) -> Result<(), String> {
    let mut interp = Interpreter::new();
    let result = interp.execute(code);
    print!("{}", interp.output());
    result.map_err(|err| format!("Error: {}", err))?;
    if let Some(value) = interp.get_stack().last() {
        println!("{}", value);
    }
    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage: {} [file | -e <code>]", program);
    println!();
    println!("With no arguments and a terminal on stdin, starts the REPL.");
    println!("Piped stdin is executed as a script.");
}
