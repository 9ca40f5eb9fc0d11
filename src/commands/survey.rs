//! Survey command
//!
//! Ranks root words by how many acceptable words they allow.

use super::solutions::find_solutions;
use crate::core::GameConfig;
use crate::dictionary::WordSet;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Solution totals for one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub solutions: usize,
    pub max_score: usize,
    pub longest: Option<String>,
}

/// Statistics over a set of root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    /// Sorted by max score, best first
    pub ranked: Vec<RootSummary>,
    /// Roots with no acceptable words
    pub dead_roots: Vec<String>,
    pub average_solutions: f64,
    pub total_time: Duration,
}

impl SurveyStatistics {
    /// Best `n` roots
    #[must_use]
    pub fn top(&self, n: usize) -> &[RootSummary] {
        &self.ranked[..n.min(self.ranked.len())]
    }
}

/// Survey the given roots (or the first `limit` of them)
///
/// Shows a progress bar on stderr while scanning.
#[must_use]
pub fn run_survey(
    roots: &[String],
    dictionary: &WordSet,
    config: &GameConfig,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots = &roots[..limit.unwrap_or(roots.len()).min(roots.len())];

    let pb = ProgressBar::new(roots.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut ranked = Vec::with_capacity(roots.len());

    for root in roots {
        pb.set_message(root.clone());
        let result = find_solutions(root, dictionary, config);
        ranked.push(RootSummary {
            longest: result.longest().map(str::to_string),
            root: result.root,
            solutions: result.words.len(),
            max_score: result.max_score,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = start.elapsed();

    let dead_roots = ranked
        .iter()
        .filter(|s| s.solutions == 0)
        .map(|s| s.root.clone())
        .collect();

    let average_solutions = if ranked.is_empty() {
        0.0
    } else {
        ranked.iter().map(|s| s.solutions).sum::<usize>() as f64 / ranked.len() as f64
    };

    ranked.sort_by(|a, b| b.max_score.cmp(&a.max_score).then_with(|| a.root.cmp(&b.root)));

    tracing::info!(
        roots = ranked.len(),
        elapsed_ms = total_time.as_millis() as u64,
        "survey complete"
    );

    SurveyStatistics {
        total_roots: ranked.len(),
        ranked,
        dead_roots,
        average_solutions,
        total_time,
    }
}
