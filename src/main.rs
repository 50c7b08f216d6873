use std::io::{self, BufRead, Write};

use clap::Parser;
use summa::{evaluate, util::fmt::format_result};

/// summa is a command-line arithmetic expression evaluator. It computes
/// space-separated expressions such as `2 + 3 * 4`, applying `*` and `/`
/// before `+` and `-`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive shell.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(value) => println!("{}", format_result(value)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }

        return;
    }

    if let Err(e) = run_shell() {
        eprintln!("Error reading from stdin: {e}");
        std::process::exit(1);
    }
}

/// Runs the interactive shell until `quit` or end of input.
///
/// Each line is evaluated independently; the result or the error message is
/// printed and the shell moves on to the next line.
fn run_shell() -> io::Result<()> {
    println!("Enter an expression to be evaluated!");
    println!("Valid operators are + - * /");
    println!("Valid operands are integers or floating point numbers.");
    println!("Operands and operators must be space-separated.");
    println!("Type quit and hit enter when you are finished.");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("\nInput expression: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input behaves like quit.
            break;
        }

        let expression = line.trim_end_matches(['\r', '\n']);

        if expression == "quit" {
            break;
        }

        match evaluate(expression) {
            Ok(value) => println!("Result: {}", format_result(value)),
            Err(e) => println!("{e}"),
        }
    }

    println!("Goodbye!");

    Ok(())
}
