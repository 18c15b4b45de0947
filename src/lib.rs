pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod report;
pub mod scanner;
pub mod table;
pub mod validator;

pub use error::{AuditError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_COMPLIANCE_BELOW_THRESHOLD: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
