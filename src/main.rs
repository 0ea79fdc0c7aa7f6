use std::process::ExitCode;

use conundrum::cli::Opts;
use conundrum::prelude::*;
use conundrum::totals;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("{actual} (value) != {expected} (expected)")]
    Mismatch { actual: Totals, expected: Totals },
}

fn main() -> Result<ExitCode> {
    let opts = Opts::parse()?;

    let stdout = std::io::stdout();
    let mut o = opts.output(stdout.lock());

    match run(&opts) {
        Ok(totals) => {
            o.report(&totals)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            o.error(format_args!("{error:#}"))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(opts: &Opts) -> Result<Totals> {
    let path = opts.path();
    let data = conundrum::env::input(path)?;

    let totals = totals::run(IStr::new(&data), &opts.budget())
        .map_err(|error| conundrum::Error::malformed(path, &data, error))?;

    if let Some(expected) = opts.expect() {
        if totals != expected {
            return Err(Error::Mismatch {
                actual: totals,
                expected,
            }
            .into());
        }
    }

    Ok(totals)
}
