//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::word_length;
use crate::game::{GameSession, Submission};
use crate::output::formatters::{create_progress_bar, length_badge, rejection_line};
use crate::validation::SpellChecker;
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// round cannot be started.
pub fn run_simple<S, W>(session: &mut GameSession<S>, source: &W) -> Result<()>
where
    S: SpellChecker,
    W: WordSource,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, source, stdin.lock(), stdout.lock())
}

/// Play rounds reading words from `input` and writing to `output`
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// round cannot be started.
pub fn play<S, W, R, O>(
    session: &mut GameSession<S>,
    source: &W,
    input: R,
    mut output: O,
) -> Result<()>
where
    S: SpellChecker,
    W: WordSource,
    R: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the root word.")?;
    writeln!(output, "Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit\n")?;

    print_root(session, &mut output)?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                session.start_round(source)?;
                writeln!(output, "\n🔄 New round started!\n")?;
                print_root(session, &mut output)?;
            }
            ":words" | ":w" => print_words(session, &mut output)?,
            _ => match session.submit(&line) {
                Submission::Ignored => {}
                Submission::Accepted { word, score } => {
                    writeln!(
                        output,
                        "  {} {} {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("(score: {score})").bright_black()
                    )?;
                }
                Submission::Rejected(rejection) => {
                    writeln!(
                        output,
                        "  {} {}",
                        "✗".red().bold(),
                        rejection_line(rejection, session.root_word()).red()
                    )?;
                }
            },
        }

        prompt(&mut output)?;
    }

    writeln!(output)?;
    Ok(())
}

fn print_root<S: SpellChecker, O: Write>(session: &GameSession<S>, output: &mut O) -> Result<()> {
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    writeln!(
        output,
        "Root word: {}",
        session.root_word().text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

fn print_words<S: SpellChecker, O: Write>(session: &GameSession<S>, output: &mut O) -> Result<()> {
    if session.used_words().is_empty() {
        writeln!(output, "  No words yet!")?;
        return Ok(());
    }

    // Longest possible word is the root minus one letter
    let best = session.root_word().letter_count().saturating_sub(1).max(1);

    for word in session.used_words() {
        let length = word_length(word);
        writeln!(
            output,
            "  {} {:<12} {}",
            length_badge(length).cyan(),
            word,
            create_progress_bar(length as f64, best as f64, 10).bright_black()
        )?;
    }
    writeln!(output, "  Score: {}", session.score().to_string().bright_yellow().bold())?;
    Ok(())
}

fn prompt<O: Write>(output: &mut O) -> Result<()> {
    write!(output, "Word: ")?;
    output.flush()?;
    Ok(())
}
