pub mod analyzer;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod recommend;
pub mod remediate;
pub mod scanner;
pub mod score;
pub mod standards;
pub mod validation;

pub use error::{GuardError, Result};
pub use validation::{ValidationResult, validate};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
