//! Display functions for command results

use super::formatters::{length_badge, rejection_line};
use crate::commands::{CheckResult, SolutionsResult};
use crate::core::{MIN_WORD_LENGTH, word_length};
use crate::game::Submission;
use colored::Colorize;

/// Print the verdict for every checked word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        match &step.submission {
            Submission::Ignored => {
                println!("  {} {}", "·".bright_black(), "(empty)".bright_black());
            }
            Submission::Accepted { word, score } => {
                println!(
                    "  {} {} {} {}",
                    "✓".green().bold(),
                    length_badge(word_length(word)).cyan(),
                    word.bright_white().bold(),
                    format!("(score: {score})").bright_black()
                );
            }
            Submission::Rejected(rejection) => {
                println!(
                    "  {} {:<14} {}",
                    "✗".red().bold(),
                    step.input.trim(),
                    rejection_line(*rejection, &result.root_word).red()
                );
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} of {} accepted, score {}",
            result.accepted_count(),
            result.steps.len(),
            result.score
        )
        .bold()
    );
}

/// Print every acceptable word for a root
pub fn print_solutions_result(result: &SolutionsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR:".bright_cyan().bold(),
        result.root_word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n  No acceptable words in the dictionary.");
        return;
    }

    println!(
        "\n📊 {} words, maximum score {}",
        result.words.len().to_string().bright_yellow(),
        result.max_score.to_string().bright_yellow().bold()
    );

    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for length in (MIN_WORD_LENGTH..=result.root_word.letter_count()).rev() {
        if let Some(&count) = result.distribution.get(&length) {
            let pct = (count as f64 / result.words.len() as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {length:>2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    println!("\n📝 {}", "Words:".bright_cyan().bold());
    let shown = limit.unwrap_or(result.words.len());
    for word in result.words.iter().take(shown) {
        println!("   {} {}", length_badge(word_length(word)).cyan(), word);
    }

    if shown < result.words.len() {
        println!(
            "   {}",
            format!("... and {} more", result.words.len() - shown).bright_black()
        );
    }
}
