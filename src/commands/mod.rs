//! Command implementations

pub mod check;
pub mod simple;
pub mod solutions;

pub use check::{CheckResult, CheckStep, check_words};
pub use simple::run_simple;
pub use solutions::{SolutionsResult, find_solutions};
