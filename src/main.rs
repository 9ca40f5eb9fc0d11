//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build words from the letters of a root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{check_words, find_solutions, is_known_root, run_simple, run_survey},
    core::{GameConfig, RoundEngine},
    dictionary::{ENGLISH, WordSet},
    output::{print_check_report, print_solutions, print_survey},
    source::RandomSource,
    wordlists::{
        START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'all' (default, embedded list) or path to file
    #[arg(short = 's', long, global = true, default_value = "all")]
    start_words: String,

    /// Dictionary: 'all' (default, embedded English list) or path to file
    #[arg(short = 'd', long, global = true, default_value = "all")]
    dictionary: String,

    /// Language the dictionary is asked about
    #[arg(short = 'l', long, global = true, default_value = ENGLISH)]
    language: String,

    /// Root word for the first round (default: random from the root word list)
    #[arg(short = 'r', long = "first-root", global = true)]
    first_root: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Submit words against a root and report each outcome
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every acceptable word for a root
    Solutions {
        /// The root word
        root: String,
    },

    /// Rank root words by maximum achievable score
    Survey {
        /// Number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Number of top roots to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(&cli.log_level, matches!(command, Commands::Play));

    let start_words = load_start_words(&cli.start_words)?;
    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;
    let config = GameConfig {
        language: cli.language,
        ..GameConfig::default()
    };

    match command {
        Commands::Play => run_play_command(
            dictionary,
            config,
            start_words,
            cli.first_root.as_deref(),
        ),
        Commands::Simple => run_simple_command(
            dictionary,
            config,
            start_words,
            cli.first_root.as_deref(),
        ),
        Commands::Check { root, words } => {
            run_check_command(dictionary, config, &root, &words);
            Ok(())
        }
        Commands::Solutions { root } => {
            run_solutions_command(&dictionary, &config, &root);
            Ok(())
        }
        Commands::Survey { limit, top } => {
            run_survey_command(&dictionary, &config, &start_words, limit, top);
            Ok(())
        }
    }
}

/// Install the tracing subscriber on stderr
///
/// The TUI owns the terminal, so it only logs when `RUST_LOG` asks for it.
fn init_logging(level: &str, interactive: bool) {
    if interactive && std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Load root words based on the -s flag
fn load_start_words(mode: &str) -> Result<Vec<String>> {
    match mode {
        "all" => Ok(words_from_slice(START_WORDS)),
        path => load_from_file(path).context("could not load root words"),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(mode: &str, language: &str) -> Result<WordSet> {
    match mode {
        "all" => {
            let dictionary = WordSet::embedded();
            if !language.eq_ignore_ascii_case(dictionary.language()) {
                tracing::warn!(
                    language,
                    embedded = dictionary.language(),
                    "embedded dictionary does not cover this language; no word will be recognized"
                );
            }
            Ok(dictionary)
        }
        path => {
            let words = load_from_file(path).context("could not load dictionary")?;
            Ok(WordSet::new(language, words))
        }
    }
}

fn new_engine(
    dictionary: WordSet,
    config: GameConfig,
    source: &mut RandomSource,
    first_root: Option<&str>,
) -> RoundEngine<WordSet> {
    let mut engine = RoundEngine::with_config(dictionary, config);
    match first_root {
        Some(root) => engine.start_round(Some(root)),
        None => engine.next_round(source),
    }
    engine
}

fn run_play_command(
    dictionary: WordSet,
    config: GameConfig,
    start_words: Vec<String>,
    first_root: Option<&str>,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let mut source = RandomSource::new(start_words);
    let engine = new_engine(dictionary, config, &mut source, first_root);

    let app = run_tui(App::new(engine, source))?;
    println!(
        "Session score: {} over {} round(s)",
        app.engine.session_score(),
        app.rounds_played
    );
    Ok(())
}

fn run_simple_command(
    dictionary: WordSet,
    config: GameConfig,
    start_words: Vec<String>,
    first_root: Option<&str>,
) -> Result<()> {
    let mut source = RandomSource::new(start_words);
    let mut engine = new_engine(dictionary, config, &mut source, first_root);

    run_simple(&mut engine, &mut source)?;
    Ok(())
}

fn run_check_command(dictionary: WordSet, config: GameConfig, root: &str, words: &[String]) {
    let mut engine = RoundEngine::with_config(dictionary, config);
    engine.start_round(Some(root));

    let report = check_words(&mut engine, words);
    print_check_report(&report);
}

fn run_solutions_command(dictionary: &WordSet, config: &GameConfig, root: &str) {
    if !is_known_root(root, dictionary, config) {
        tracing::warn!(root, "root word is not in the dictionary");
    }

    let result = find_solutions(root, dictionary, config);
    print_solutions(&result);
}

fn run_survey_command(
    dictionary: &WordSet,
    config: &GameConfig,
    start_words: &[String],
    limit: Option<usize>,
    top: usize,
) {
    println!("\n{}", "═".repeat(60));
    println!(" Root Word Survey ");
    println!("{}", "═".repeat(60));
    println!(
        "\nSurveying {} root words against {} dictionary words\n",
        limit.unwrap_or(start_words.len()).min(start_words.len()),
        dictionary.len()
    );

    let stats = run_survey(start_words, dictionary, config, limit);
    print_survey(&stats, top);
}
