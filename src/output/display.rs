//! Display functions for command results

use super::formatters::format_value;
use crate::commands::CheckResult;
use colored::Colorize;

/// Print the result of checking a candidate equation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Checking: {}", result.text.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Ok(sides) => {
            println!(
                "\n{} {} = {} = {}",
                "✅".green(),
                sides.left,
                format_value(sides.value).bright_cyan(),
                sides.right
            );
            println!("{}", "Target-eligible: both sides balance".green().bold());
        }
        Err(err) => {
            println!("\n{} {}", "❌".red(), err.to_string().red().bold());
        }
    }
}
