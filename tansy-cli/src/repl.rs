// Interactive REPL built on rustyline. Each line is a full evaluation
// session: its output is printed, then the stack and register are echoed.

use std::io::{self, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tansy_core::Interpreter;

pub fn run() -> rustyline::Result<()> {
    println!("Tansy v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Type WORDS to list the dictionary, Ctrl-D to exit.");

    let mut interp = Interpreter::new();
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(trimmed);

                let result = interp.execute(trimmed);
                print!("{}", interp.output());
                if !interp.output().is_empty() && !interp.output().ends_with('\n') {
                    println!();
                }
                match result {
                    Ok(()) => show_state(&interp),
                    Err(err) => {
                        io::stdout().flush().ok();
                        eprintln!("Error: {}", err);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Input error: {}", err);
                break;
            }
        }
    }

    Ok(())
}

fn show_state(interp: &Interpreter) {
    if !interp.get_stack().is_empty() {
        print!("Stack:");
        for value in interp.get_stack() {
            print!(" {}", value);
        }
        println!();
    }
    if let Some(value) = interp.get_register() {
        println!("Register: {}", value);
    }
}
