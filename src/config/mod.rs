use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "strcalc")]
#[command(about = "Line calculator for integer arithmetic and letter-string operations")]
pub struct CliConfig {
    /// Evaluate a single expression and exit instead of reading stdin
    pub expression: Option<String>,

    /// Suppress the "> " prompt (useful when piping input)
    #[arg(long)]
    pub no_prompt: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
