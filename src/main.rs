mod cli;
mod logging;

use std::process;

use anyhow::Result;
use calendar_diff::{DiffOptions, Validation, diff_with};
use clap::Parser;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(days) => println!("{days} days elapsed"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<i64> {
    let validation = if cli.strict {
        Validation::Strict
    } else {
        Validation::Loose
    };
    info!(date1 = %cli.date1, date2 = %cli.date2, %validation, "computing day count");

    let options = DiffOptions::default().with_validation(validation);
    Ok(diff_with(&cli.date1, &cli.date2, options)?)
}
