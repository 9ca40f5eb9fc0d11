//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, score_line};
use crate::commands::{CheckReport, SolutionsResult, SurveyStatistics};
use crate::core::normalize;
use colored::Colorize;

/// Print the outcome of checking a list of words
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        report.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for entry in &report.entries {
        let word = normalize(&entry.input);
        match entry.outcome {
            Ok(Some(scores)) => println!(
                "  {} {} {} {}",
                "✓".green().bold(),
                length_badge(word.chars().count()),
                format!("{word:<16}").bright_white(),
                format!("+{} → {}", word.chars().count(), scores.round).bright_black()
            ),
            Ok(None) => println!("  {} {}", "·".bright_black(), "(blank)".bright_black()),
            Err(rejection) => println!(
                "  {} {:<18} {} {}",
                "✗".red().bold(),
                word,
                rejection.title().red(),
                format!("({})", rejection.message(&word, &report.root)).bright_black()
            ),
        }
    }

    println!();
    println!(
        "{} accepted, {} rejected",
        report.accepted_count().to_string().green().bold(),
        report.rejected_count().to_string().red().bold()
    );
    println!("{}", score_line(report.scores).bright_cyan());
}

/// Print every acceptable word for a root
pub fn print_solutions(result: &SolutionsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No acceptable words for this root.".yellow());
        return;
    }

    let mut current_len = 0;
    for word in &result.words {
        let len = word.chars().count();
        if len != current_len {
            current_len = len;
            print!("\n {} ", length_badge(len).bright_cyan());
        }
        print!(" {word}");
    }
    println!("\n");

    println!("📊 {} words", result.count().to_string().bright_yellow().bold());
    println!(
        "   Maximum score:  {}",
        result.max_score.to_string().bright_yellow().bold()
    );
    if let Some(longest) = result.longest() {
        println!("   Longest word:   {}", longest.green());
    }
}

/// Print a survey of root words
pub fn print_survey(stats: &SurveyStatistics, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Roots surveyed:     {}", stats.total_roots);
    println!(
        "   Average solutions:  {}",
        format!("{:.1}", stats.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:         {:.2}s", stats.total_time.as_secs_f64());

    let best = stats.ranked.first().map_or(0, |s| s.max_score);

    println!("\n🏆 {}", "Top roots:".bright_cyan().bold());
    for (i, summary) in stats.top(top).iter().enumerate() {
        let bar = create_progress_bar(summary.max_score as f64, best as f64, 30);
        println!(
            "   {:>2}. {:<12} {} {:>4} pts {:>3} words",
            i + 1,
            summary.root,
            bar.green(),
            summary.max_score,
            summary.solutions
        );
    }

    if !stats.dead_roots.is_empty() {
        println!("\n⚠️  {}", "Roots with no solutions:".yellow().bold());
        for root in &stats.dead_roots {
            println!("   • {root}");
        }
    }
}
