//! CLI helpers.

mod output;
mod stdout_logger;


use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, ensure, Context, Result};

use crate::cube::CubeSet;
use crate::input::{IStr, Split};
use crate::totals::Totals;

pub use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input used when no path is given.
pub const DEFAULT_PATH: &str = "inputs/example.txt";

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Path to the input.
    path: Option<PathBuf>,
    /// Bag to check games against.
    budget: Option<CubeSet>,
    /// Totals which the run is expected to produce.
    expect: Option<Totals>,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set log: {error}"))?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();
        let mut rest = false;

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            if rest {
                opts.set_path(arg)?;
                continue;
            }

            match arg {
                "--budget" => {
                    ensure!(opts.budget.is_none(), "duplicate `--budget` arguments");
                    let budget = it.next().context("missing argument to `--budget`")?;
                    let budget = budget
                        .to_str()
                        .context("missing string argument to `--budget`")?;
                    let [red, green, blue] =
                        parse_list::<3, u32>(budget).context("bad argument to `--budget`")?;
                    opts.budget = Some(CubeSet::new(red, green, blue));
                }
                "--expect" => {
                    ensure!(opts.expect.is_none(), "duplicate `--expect` arguments");
                    let expect = it.next().context("missing argument to `--expect`")?;
                    let expect = expect
                        .to_str()
                        .context("missing string argument to `--expect`")?;
                    let [possible, power] =
                        parse_list::<2, u64>(expect).context("bad argument to `--expect`")?;
                    opts.expect = Some(Totals::new(possible, power));
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    rest = true;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                path => {
                    opts.set_path(path)?;
                }
            }
        }

        Ok(opts)
    }

    /// Path to the input.
    pub fn path(&self) -> &Path {
        match &self.path {
            Some(path) => path,
            None => Path::new(DEFAULT_PATH),
        }
    }

    /// Bag to check games against, defaults to [CubeSet::BUDGET].
    pub fn budget(&self) -> CubeSet {
        self.budget.unwrap_or(CubeSet::BUDGET)
    }

    /// Totals the run is expected to produce, if any.
    pub fn expect(&self) -> Option<Totals> {
        self.expect
    }

    /// Construct the output to report to.
    pub fn output<O>(&self, out: O) -> Output<O>
    where
        O: Write,
    {
        let kind = if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        Output::new(out, kind)
    }

    fn set_path(&mut self, path: &str) -> Result<()> {
        ensure!(self.path.is_none(), "duplicate input path: {path}");
        self.path = Some(PathBuf::from(path));
        Ok(())
    }
}

/// Parse exactly `N` comma-separated integers.
fn parse_list<const N: usize, T>(value: &str) -> Result<[T; N]>
where
    T: for<'a> crate::input::FromInput<'a>,
{
    let mut input = IStr::new(value.as_bytes());
    let Split(values) = input.next::<Split<',', [T; N]>>()?;
    ensure!(input.is_blank(), "trailing input `{}`", input.as_bstr());
    Ok(values)
}
