//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;
pub mod survey;

pub use check::{CheckEntry, CheckReport, check_words};
pub use simple::{run_simple, run_simple_with};
pub use solutions::{SolutionsResult, find_solutions, is_known_root};
pub use survey::{RootSummary, SurveyStatistics, run_survey};
