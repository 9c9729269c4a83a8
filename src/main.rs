use std::io::{self, Cursor};

use anyhow::Context;
use clap::Parser;
use strcalc::repl::{Repl, ReplOptions};
use strcalc::utils::logger;
use strcalc::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("starting strcalc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let options = ReplOptions {
        show_prompt: !config.no_prompt && config.expression.is_none(),
    };

    let summary = match &config.expression {
        Some(expression) => {
            let input = Cursor::new(format!("{}\n", expression));
            let mut repl = Repl::new(input, io::stdout().lock(), options);
            repl.run().context("failed to evaluate expression")?
        }
        None => {
            let mut repl = Repl::new(io::stdin().lock(), io::stdout().lock(), options);
            repl.run().context("session ended by an I/O failure")?
        }
    };

    tracing::info!(
        "session finished: {} lines read, {} ok, {} errors in {:?}",
        summary.lines_read,
        summary.ok,
        summary.errors,
        summary.elapsed
    );

    // One-shot mode reports evaluation errors through the exit code.
    if config.expression.is_some() && summary.errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
