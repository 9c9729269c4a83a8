pub mod config;
pub mod core;
pub mod domain;
pub mod repl;
pub mod utils;

pub use crate::core::engine::evaluate_line;
pub use config::CliConfig;
pub use domain::model::{Expression, Operand, Operator};
pub use repl::{Repl, ReplOptions, SessionSummary};
pub use utils::error::{CalcError, Result};
