use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use anyhow::{Context, Result};
use calcline::{EvalError, evaluate_expression};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};

/// Log level for the application.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// calcline evaluates one line of arithmetic at a time, keeping track of
/// whether each result is an integer or a float.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. Without it, calcline reads expressions from
    /// standard input, one per line.
    expression: Option<String>,

    /// Prints the elapsed evaluation time in seconds after each result.
    #[arg(short, long)]
    time: bool,

    /// Prompt shown before each line when reading from standard input.
    #[arg(short, long, default_value = "Your example: ")]
    prompt: String,

    /// Log level (default: warn).
    #[arg(short, long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_default_env().filter_level(args.log_level.into())
                                            .init();

    let outcome = match args.expression.as_deref() {
        Some(expression) => evaluate_once(expression, args.time),
        None => run_prompt(io::stdin().lock(),
                           &mut io::stdout(),
                           &mut io::stderr(),
                           &args.prompt,
                           args.time),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Evaluates a single line and renders the result, optionally followed by
/// the elapsed time.
fn render(line: &str, show_time: bool) -> Result<String, EvalError> {
    let start = Instant::now();
    let value = evaluate_expression(line)?;

    if show_time {
        Ok(format!("{value} {}", start.elapsed().as_secs_f64()))
    } else {
        Ok(value.to_string())
    }
}

fn evaluate_once(expression: &str, show_time: bool) -> Result<()> {
    let rendered = render(expression, show_time)
        .with_context(|| format!("Failed to evaluate '{expression}'"))?;
    println!("{rendered}");
    Ok(())
}

/// Reads expressions from `input` until it is exhausted.
///
/// Results go to `out` and evaluation errors to `err`; an error does not
/// stop the loop.
fn run_prompt<R, W, E>(input: R,
                       out: &mut W,
                       err: &mut E,
                       prompt: &str,
                       show_time: bool)
                       -> Result<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut lines = input.lines();

    loop {
        write!(out, "{prompt}").context("Failed to write the prompt")?;
        out.flush().context("Failed to flush standard output")?;

        let Some(line) = lines.next() else {
            writeln!(out).context("Failed to write to standard output")?;
            info!("Reached end of input");
            return Ok(());
        };
        let line = line.context("Failed to read from standard input")?;

        if line.trim().is_empty() {
            continue;
        }

        match render(&line, show_time) {
            Ok(rendered) => writeln!(out, "{rendered}").context("Failed to write the result")?,
            Err(e) => writeln!(err, "{e}").context("Failed to write the error")?,
        }
    }
}
