//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::{RoundEngine, normalize};
use crate::dictionary::Dictionary;
use crate::output::formatters::{length_badge, score_line};
use crate::source::WordSource;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary, S: WordSource + ?Sized>(
    engine: &mut RoundEngine<D>,
    source: &mut S,
) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(engine, source, stdin.lock(), stdout.lock())
}

/// Run the game loop over arbitrary input and output
///
/// Lines starting with `:` are commands; anything else is submitted as a word.
/// End of input ends the session.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<D, S, R, W>(
    engine: &mut RoundEngine<D>,
    source: &mut S,
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    D: Dictionary,
    S: WordSource + ?Sized,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(out, "Words must be real, at least 3 letters, and not the root itself.\n")?;
    writeln!(out, "Commands: ':new' new root word, ':words' list words, ':quit' to exit\n")?;

    print_round_header(engine, &mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "{}", "> ".bright_black())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                engine.next_round(source);
                writeln!(out, "\n🔄 New round!\n")?;
                print_round_header(engine, &mut out)?;
            }
            ":words" | ":w" => print_used_words(engine, &mut out)?,
            ":help" | ":h" => {
                writeln!(out, "Commands: ':new' new root word, ':words' list words, ':quit' to exit")?;
            }
            candidate => match engine.submit(candidate) {
                Ok(Some(scores)) => {
                    let word = &engine.used_words()[0];
                    writeln!(
                        out,
                        "{} {} {}   {}",
                        "✓".green().bold(),
                        length_badge(word.chars().count()),
                        word.bright_white().bold(),
                        score_line(scores)
                    )?;
                }
                Ok(None) => {}
                Err(rejection) => {
                    let word = normalize(candidate);
                    writeln!(
                        out,
                        "{} {}: {}",
                        "✗".red().bold(),
                        rejection.title().red().bold(),
                        rejection.message(&word, engine.root_word())
                    )?;
                }
            },
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Session score: {}\n",
        engine.session_score().to_string().bright_cyan().bold()
    )?;
    Ok(())
}

fn print_round_header<D: Dictionary, W: Write>(
    engine: &RoundEngine<D>,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Root word: {}",
        engine.root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    Ok(())
}

fn print_used_words<D: Dictionary, W: Write>(
    engine: &RoundEngine<D>,
    out: &mut W,
) -> io::Result<()> {
    if engine.used_words().is_empty() {
        writeln!(out, "No words yet!")?;
        return Ok(());
    }

    for word in engine.used_words() {
        writeln!(out, "  {} {word}", length_badge(word.chars().count()))?;
    }
    writeln!(out, "  {}", score_line(engine.scores()))?;
    Ok(())
}
