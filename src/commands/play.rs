//! Interactive CLI mode
//!
//! Suggests a guess, reads the feedback the game gave, narrows and repeats.

use crate::core::{Error, Pattern, Result};
use crate::output::formatters::pattern_to_emoji;
use crate::solver::{EntropySolver, SolverState};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// One game in progress, with the feedback history needed for undo
pub struct Session<'a> {
    solver: EntropySolver<'a>,
    history: Vec<(String, Pattern)>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(mut solver: EntropySolver<'a>) -> Self {
        solver.reset();
        Self {
            solver,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn solver(&self) -> &EntropySolver<'a> {
        &self.solver
    }

    #[must_use]
    pub fn history(&self) -> &[(String, Pattern)] {
        &self.history
    }

    /// Number of the next guess, starting at 1
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    /// Apply feedback for `guess` and remember it
    ///
    /// # Errors
    /// See [`EntropySolver::apply_feedback`]. Nothing is recorded on error.
    pub fn record(&mut self, guess: &str, pattern: Pattern) -> Result<usize> {
        let removed = self.solver.apply_feedback(guess, &pattern)?;
        self.history.push((guess.to_string(), pattern));
        Ok(removed)
    }

    /// Forget the last feedback
    ///
    /// Narrowing cannot be reversed in place, so the candidates are rebuilt by
    /// replaying the remaining history. Returns `false` if there was nothing
    /// to undo.
    ///
    /// # Errors
    /// Only if replaying previously accepted feedback fails.
    pub fn undo(&mut self) -> Result<bool> {
        if self.history.pop().is_none() {
            return Ok(false);
        }

        self.solver.reset();
        for (guess, pattern) in &self.history {
            self.solver.apply_feedback(guess, pattern)?;
        }
        Ok(true)
    }

    pub fn restart(&mut self) {
        self.history.clear();
        self.solver.reset();
    }
}

/// A line typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    New,
    Undo,
    /// Feedback for a guess, either the suggestion or a word the player chose
    Feedback { guess: String, pattern: Pattern },
}

/// Interpret a feedback-prompt line for the suggested `guess`
///
/// Accepts a command, `win`, a feedback string (`20110`, `GY-G-`), or a
/// different guess followed by its feedback (`crane 20110`).
///
/// # Errors
/// Returns the parse error for unusable feedback.
pub fn parse_input(guess: &str, line: &str) -> Result<Input> {
    let line = line.trim().to_lowercase();

    match line.as_str() {
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        "new" | "n" => return Ok(Input::New),
        "undo" | "u" => return Ok(Input::Undo),
        "win" | "correct" | "yes" | "solved" => {
            return Ok(Input::Feedback {
                guess: guess.to_string(),
                pattern: Pattern::solved(guess)?,
            });
        }
        _ => {}
    }

    let mut parts = line.split_whitespace();
    let (word, feedback) = match (parts.next(), parts.next(), parts.next()) {
        (Some(feedback), None, None) => (guess, feedback),
        (Some(word), Some(feedback), None) => (word, feedback),
        _ => return Err(Error::InvalidFeedback(line.clone())),
    };

    Ok(Input::Feedback {
        guess: word.to_string(),
        pattern: Pattern::parse(word, feedback)?,
    })
}

/// Run the interactive loop over `input`
///
/// # Errors
///
/// Returns `Io` if reading input or flushing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<B, R>(session: &mut Session<'_>, input: &mut B, rng: &mut R) -> Result<()>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess that reveals the most information.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use 2/G/🟩 for green (correct position)");
    println!("  - Use 1/Y/🟨 for yellow (wrong position)");
    println!("  - Use 0/-/⬜ for gray (not in word)");
    println!("  - Prefix another word to record a guess of your own: 'crane 20110'");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    loop {
        if session.solver().state() == SolverState::Exhausted {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            let Some(line) = get_user_input("Command", input)? else {
                return Ok(());
            };
            match line.to_lowercase().as_str() {
                "undo" | "u" => {
                    session.undo()?;
                    println!("✓ Undone! Back to turn {}\n", session.turn());
                }
                "new" | "n" => {
                    session.restart();
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => return Ok(()),
                _ => {}
            }
            continue;
        }

        let solver = session.solver();
        let remaining = solver.remaining_count();
        let guess = solver.best_guess_with(rng)?.to_string();
        let metrics = solver.metrics_of(&guess)?;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {remaining} candidates remaining ({:.1}% each)",
            session.turn(),
            solver.confidence() * 100.0
        );
        println!("────────────────────────────────────────────────────────────");

        println!("\n📊 Suggested guess: {}", guess.to_uppercase());
        println!("   Entropy:          {:.3} bits", metrics.entropy);
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!(
            "   Worst case:       {} candidates\n",
            metrics.max_partition
        );

        if remaining <= 10 {
            println!("Remaining candidates:");
            for candidate in solver.remaining_words() {
                println!("  • {}", candidate.to_uppercase());
            }
            println!();
        }

        let (played, pattern) = loop {
            let Some(line) = get_user_input("Enter feedback (G/Y/-, 'win', or command)", input)?
            else {
                return Ok(());
            };

            match parse_input(&guess, &line) {
                Ok(Input::Quit) => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Ok(Input::New) => {
                    session.restart();
                    println!("\n🔄 New game started!\n");
                    break (None, None);
                }
                Ok(Input::Undo) => {
                    if session.undo()? {
                        println!("✓ Undone! Back to turn {}\n", session.turn());
                        break (None, None);
                    }
                    println!("Nothing to undo!\n");
                }
                Ok(Input::Feedback { guess, pattern }) => break (Some(guess), Some(pattern)),
                Err(err) => println!("❌ {err}\n"),
            }
        };

        let (Some(played), Some(pattern)) = (played, pattern) else {
            continue;
        };

        let solved = pattern.is_solved();
        if let Err(err) = session.record(&played, pattern) {
            println!("❌ {err}\n");
            continue;
        }

        if solved {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());

            let turns = session.history().len();
            println!(
                "\n  Solution found in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );

            println!("\n  Guess history:");
            for (i, (word, pat)) in session.history().iter().enumerate() {
                println!(
                    "    {}. {} {}",
                    (i + 1).to_string().bright_black(),
                    word.to_uppercase().bright_white().bold(),
                    pattern_to_emoji(pat)
                );
            }
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!();

            match get_user_input("Play again? (yes/no)", input)?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.restart();
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

/// Get user input with a prompt, `None` at end of input
fn get_user_input<B: BufRead>(prompt: &str, input: &mut B) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
