use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dialog_grammar::cli::GrammarCli;
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = GrammarCli::parse();
    let grammar = cli.grammar()?;

    let sentences = if cli.sentences.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()?
    } else {
        cli.sentences.clone()
    };

    let mut failures = 0usize;
    for sentence in sentences.iter().filter(|s| !s.trim().is_empty()) {
        match grammar.parse(sentence) {
            Ok(parse) => println!("{}", cli.render(&parse)?),
            Err(error) => {
                tracing::debug!(%sentence, ?error, "parse failed");
                eprintln!("{sentence}: {error}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        tracing::info!(failures, total = sentences.len(), "some sentences did not parse");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
