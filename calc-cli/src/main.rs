use anyhow::{bail, Result};
use calc::{is_safe_number, ops};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Command-line calculator
#[derive(Parser)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output result as JSON
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

// Operands span the full safe-integer range, so every subcommand must
// accept leading-hyphen positionals like `calc add 5 -3`.
#[derive(Subcommand)]
enum Commands {
    /// Add two numbers
    #[command(allow_negative_numbers = true)]
    Add { num1: f64, num2: f64 },

    /// Subtract the second number from the first
    #[command(allow_negative_numbers = true)]
    Subtract { num1: f64, num2: f64 },

    /// Multiply two numbers
    #[command(allow_negative_numbers = true)]
    Multiply { num1: f64, num2: f64 },

    /// Divide the first number by the second
    #[command(allow_negative_numbers = true)]
    Divide { num1: f64, num2: f64 },

    /// Raise a base to an exponent
    #[command(allow_negative_numbers = true)]
    Power { base: f64, exponent: f64 },

    /// Square root of a number
    #[command(allow_negative_numbers = true)]
    Sqrt { num: f64 },

    /// Remainder of dividing the first number by the second
    #[command(allow_negative_numbers = true)]
    Mod { num1: f64, num2: f64 },
}

#[derive(Serialize)]
struct Output {
    result: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add { num1, num2 } => {
            check(num1)?;
            check(num2)?;
            ops::add(num1, num2)
        }
        Commands::Subtract { num1, num2 } => {
            check(num1)?;
            check(num2)?;
            ops::subtract(num1, num2)
        }
        Commands::Multiply { num1, num2 } => {
            check(num1)?;
            check(num2)?;
            ops::multiply(num1, num2)
        }
        Commands::Divide { num1, num2 } => {
            check(num1)?;
            check(num2)?;
            ops::divide(num1, num2)?
        }
        Commands::Power { base, exponent } => {
            check(base)?;
            check(exponent)?;
            ops::power(base, exponent)?
        }
        Commands::Sqrt { num } => {
            check(num)?;
            ops::sqrt(num)?
        }
        Commands::Mod { num1, num2 } => {
            check(num1)?;
            check(num2)?;
            ops::modulo(num1, num2)?
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string(&Output { result })?);
    } else {
        println!("{result}");
    }

    Ok(())
}

/// Reject operands outside the safe-integer range before computing.
fn check(value: f64) -> Result<()> {
    if !is_safe_number(value) {
        bail!("operand {value} is not a number within the safe integer range (±9007199254740991)");
    }
    Ok(())
}
