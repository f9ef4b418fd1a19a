//! Interactive terminal game
//!
//! Prompt loop: read a guess, submit it to the session, render the colored
//! feedback, repeat until the session leaves `InProgress`, then offer a
//! fresh game.

use crate::core::Equation;
use crate::output::{feedback_tiles, feedback_to_emoji, keyboard_line};
use crate::session::{GameSession, GameStatus, SessionError};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive game against the given corpus
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// corpus has no candidates.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play(corpus: &[Equation]) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Numberle - Guess the Equation              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find the hidden arithmetic equation (7 characters) in at most 6 guesses.");
    println!("Every guess must itself be a balanced equation, e.g. 6+4=2*5.\n");
    println!("After each guess every character is marked:");
    println!("  🟩 green  = correct position");
    println!("  🟨 yellow = in the equation, but somewhere else");
    println!("  ⬜ grey   = not in the equation\n");
    println!("Commands: 'quit' to exit, 'new' to restart with a fresh equation\n");

    let mut session = GameSession::new(corpus).map_err(|e| e.to_string())?;

    loop {
        println!(
            "You have {}/{} attempts remaining",
            session.attempts_remaining(),
            session.max_attempts()
        );

        let input = get_user_input("Enter your guess")?;

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.start_new_game(corpus).map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&input) {
            Ok(feedback) => {
                if let Some(record) = session.history().last() {
                    println!("\n  {}", feedback_tiles(record.equation(), feedback));
                }
                println!("  {}\n", feedback_to_emoji(feedback));
                println!("Keyboard: {}\n", keyboard_line(session.hints()));
            }
            Err(SessionError::InvalidGuess(err)) => {
                println!("\n{} {err}\n", "❌".red());
                continue;
            }
            Err(err) => return Err(err.to_string()),
        }

        if session.is_over() {
            print_game_over(&session);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.start_new_game(corpus).map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Final banner: celebrate a win or reveal the target on a loss
fn print_game_over(session: &GameSession) {
    let attempts_used = session.max_attempts() - session.attempts_remaining();

    match session.status() {
        GameStatus::Won => {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "    🎉 🎊 ✨  E Q U A T I O N   S O L V E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());

            let performance = match attempts_used {
                1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
                2 => ("⭐ Excellent!", "Outstanding arithmetic!"),
                3 => ("💫 Great!", "Very well played!"),
                4 => ("✨ Good!", "Nice work!"),
                5 => ("👍 Solved!", "Got it!"),
                _ => ("✓ Complete!", "Success!"),
            };

            println!("\n  {}", performance.0.bright_yellow().bold());
            println!("  {}", performance.1.bright_white());
            println!(
                "\n  Solution found in {} {}",
                attempts_used.to_string().bright_cyan().bold(),
                if attempts_used == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!("{}", "  Game over! You ran out of attempts.".red().bold());
            if let Some(target) = session.target() {
                println!(
                    "  The target equation was: {}",
                    target.text().bright_yellow().bold()
                );
            }
            println!("{}", "═".repeat(70).bright_cyan());
        }
        GameStatus::InProgress => {}
    }

    println!("\n  Guess history:");
    for (i, record) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.equation().text().bright_white().bold(),
            feedback_to_emoji(record.feedback())
        );
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
