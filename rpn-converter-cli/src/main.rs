use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use rpn_converter::interpreter::convert;
use std::io;
use std::io::{BufRead, Write};

const PROMPT: &str =
    "Enter expression with +, -, *, /, ^, sin, cos, (, ), 0, 1, 2, 3, 4, 5, 6, 7, 8, 9";

/// Converts an infix expression into reverse Polish notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to convert, read from standard input when left out
    expression: Option<String>,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let expression = match args.expression {
        Some(expression) => expression,
        None => read_expression(&mut io::stdin().lock(), &mut io::stdout().lock())?,
    };
    report(&expression, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Prompts for and reads a single line.
fn read_expression(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}\n>", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read expression")?;
    Ok(line
        .trim_end_matches(|character: char| character == '\n' || character == '\r')
        .to_string())
}

/// Writes the conversion of `expression`, or why it failed. Conversion errors are
/// reported but not returned; only failing to write is an error here.
fn report(expression: &str, output: &mut impl Write, errors: &mut impl Write) -> Result<()> {
    debug!("converting {:?}", expression);
    match convert(expression) {
        Ok(conversion) => {
            writeln!(output, "Tokens: {}", conversion.tokens_string())?;
            writeln!(output, "Result: {}", conversion.postfix_string()?)?;
        }
        Err(error) => writeln!(errors, "Error: {}", error)?,
    }
    Ok(())
}
