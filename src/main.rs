//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: spell words from the letters of a root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{check_words, find_solutions, run_simple},
    config::{GameConfig, ListSource},
    game::GameSession,
    output::{print_check_result, print_solutions_result},
    validation::Dictionary,
    wordlists::StartWords,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'all' (default, embedded list) or path to file
    #[arg(
        short = 'w',
        long,
        global = true,
        default_value = "all",
        env = "WORD_SCRAMBLE_START_WORDS"
    )]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to file with one word per line
    #[arg(
        short = 'd',
        long,
        global = true,
        default_value = "embedded",
        env = "WORD_SCRAMBLE_DICTIONARY"
    )]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Check words against a root word
    Check {
        /// The root word to spell from
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every acceptable word for a root word
    Solutions {
        /// The root word to spell from
        root: String,

        /// Limit number of words shown
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Set up logging to stderr
///
/// `RUST_LOG` overrides `default_filter`.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Logs would draw over the TUI, so keep them off there unless asked for
    init_tracing(match command {
        Commands::Play => "off",
        _ => "word_scramble=warn",
    });

    let config = GameConfig::new(
        ListSource::from_arg(&cli.start_words, "all"),
        ListSource::from_arg(&cli.dictionary, "embedded"),
    );

    let dictionary = config
        .load_dictionary()
        .context("Could not load dictionary")?;

    match command {
        Commands::Play => {
            let start_words = load_start_words(&config)?;
            run_play_command(&dictionary, &start_words)
        }
        Commands::Simple => {
            let start_words = load_start_words(&config)?;
            run_simple_command(&dictionary, &start_words)
        }
        Commands::Check { root, words } => run_check_command(&root, &words, &dictionary),
        Commands::Solutions { root, limit } => run_solutions_command(&root, limit, &dictionary),
    }
}

fn load_start_words(config: &GameConfig) -> Result<StartWords> {
    config
        .load_start_words()
        .context("Could not load start words")
}

fn run_play_command(dictionary: &Dictionary, start_words: &StartWords) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(dictionary, start_words)?;
    run_tui(app)
}

fn run_simple_command(dictionary: &Dictionary, start_words: &StartWords) -> Result<()> {
    let mut session =
        GameSession::new(dictionary, start_words).context("Could not start a round")?;
    run_simple(&mut session, start_words)
}

fn run_check_command(root: &str, words: &[String], dictionary: &Dictionary) -> Result<()> {
    let result = check_words(root, words, dictionary)?;
    print_check_result(&result);
    Ok(())
}

fn run_solutions_command(root: &str, limit: Option<usize>, dictionary: &Dictionary) -> Result<()> {
    let result = find_solutions(root, dictionary)?;
    print_solutions_result(&result, limit);
    Ok(())
}
