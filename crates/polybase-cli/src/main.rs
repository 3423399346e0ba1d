//! polybase CLI - keep a numbered list of polynomials in a text file and
//! combine them by number.

mod diagnostic;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info, warn};

use polybase::Collection;
use polybase_poly::{parse, Polynomial};

#[derive(Parser)]
#[command(
    name = "polybase",
    version,
    about = "Store polynomials in a line-delimited file and operate on them by number"
)]
struct Cli {
    /// Polynomial file, one polynomial per line
    #[arg(short, long, env = "POLYBASE_FILE", default_value = "polynomials.pln")]
    file: PathBuf,

    /// Log level; overrides RUST_LOG when given
    #[arg(long, value_enum, env = "POLYBASE_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print every stored polynomial, numbered from 1
    List,
    /// Parse a polynomial and store it
    Push {
        /// Polynomial text, e.g. "4x^2 + 3x - 7"
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Insert after this number instead of appending
        #[arg(long)]
        after: Option<usize>,
    },
    /// Check a polynomial without storing it
    Check {
        /// Polynomial text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print the coefficient of a given degree
    Coeff { index: usize, degree: u32 },
    /// Store the sum of two polynomials
    Sum { lhs: usize, rhs: usize },
    /// Store the product of two polynomials
    Product { lhs: usize, rhs: usize },
    /// Store the n-th derivative of a polynomial
    Derive {
        index: usize,
        #[arg(default_value_t = 1)]
        n: u32,
    },
    /// Print the integer roots of a polynomial
    Roots { index: usize },
    /// Evaluate a polynomial at an integer point
    Eval {
        index: usize,
        #[arg(allow_hyphen_values = true)]
        x: i64,
    },
    /// Delete a polynomial
    Delete { index: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger(cli.log_level).init();

    let mut base = load(&cli.file)?;
    let changed = run(&mut base, cli.command)?;
    if changed {
        save(&base, &cli.file)?;
    }
    Ok(())
}

/// Logger reading `RUST_LOG` (default `warn`), unless a level is forced.
fn logger(level: Option<LogLevel>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level.filter());
    }
    builder
}

/// Executes one command. Returns true if the collection changed.
fn run(base: &mut Collection, command: Command) -> Result<bool> {
    match command {
        Command::List => {
            for (i, poly) in base.iter().enumerate() {
                println!("{}. {poly}", i + 1);
            }
            Ok(false)
        }
        Command::Push { text, after } => {
            let result = match after {
                Some(after) => {
                    let at = position(base, after)?;
                    base.parse_and_insert_after(at, &text).map_err(|e| match e {
                        polybase::CollectionError::Parse(err) => {
                            anyhow!(diagnostic::render(&text, &err))
                        }
                        other => other.into(),
                    })
                }
                None => base
                    .parse_and_push(&text)
                    .map_err(|err| anyhow!(diagnostic::render(&text, &err))),
            };
            result?;
            println!("Polynomial was successfully added!");
            Ok(true)
        }
        Command::Check { text } => {
            match parse(&text) {
                Ok(poly) => println!("OK (variable {}): {poly}", poly.variable()),
                Err(err) => bail!(diagnostic::render(&text, &err)),
            }
            Ok(false)
        }
        Command::Coeff { index, degree } => {
            let at = position(base, index)?;
            println!("Coefficient: {}", base.coefficient(at, degree)?);
            Ok(false)
        }
        Command::Sum { lhs, rhs } => {
            let sum = base.add(position(base, lhs)?, position(base, rhs)?)?;
            store(base, sum);
            Ok(true)
        }
        Command::Product { lhs, rhs } => {
            let product = base.multiply(position(base, lhs)?, position(base, rhs)?)?;
            store(base, product);
            Ok(true)
        }
        Command::Derive { index, n } => {
            let derivative = base.derivative(position(base, index)?, n)?;
            store(base, derivative);
            Ok(true)
        }
        Command::Roots { index } => {
            let roots = base.integer_roots(position(base, index)?)?;
            let list: Vec<String> = roots.iter().map(ToString::to_string).collect();
            println!("Roots: {}", list.join(", "));
            Ok(false)
        }
        Command::Eval { index, x } => {
            match base.evaluate(position(base, index)?, x)? {
                Some(value) => println!("{value}"),
                None => bail!("value at {x} does not fit in 64 bits"),
            }
            Ok(false)
        }
        Command::Delete { index } => {
            let removed = base.remove(position(base, index)?)?;
            println!("Deleted {removed}");
            Ok(true)
        }
    }
}

/// Converts a 1-based user index into a collection position.
fn position(base: &Collection, index: usize) -> Result<usize> {
    if index == 0 || index > base.len() {
        bail!("index {index} out of bounds (1..={})", base.len());
    }
    Ok(index - 1)
}

fn store(base: &mut Collection, poly: Polynomial) {
    println!("{}. {poly}", base.len() + 1);
    base.push(poly);
}

fn load(path: &Path) -> Result<Collection> {
    let mut base = Collection::new();
    if !path.exists() {
        info!("{} does not exist yet, starting empty", path.display());
        return Ok(base);
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let report = base
        .load(BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))?;
    for failure in &report.failures {
        warn!(
            "{}:{}: skipped: {}",
            path.display(),
            failure.line,
            failure.error
        );
    }
    debug!("loaded {} polynomials from {}", report.loaded, path.display());
    Ok(base)
}

fn save(base: &Collection, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    base.save(BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!("saved {} polynomials to {}", base.len(), path.display());
    Ok(())
}
