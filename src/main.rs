use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::config::Config;
use zcalc::{CalcResult, OperatorPolicy, evaluate_expression};

/// Evaluate calculator expressions strictly left to right.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Expression tokens, e.g. `1 + 2 * 3`. Reads stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    expression: Vec<String>,

    /// Accept expressions without any operator
    #[arg(long)]
    lenient: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let policy = if cli.lenient {
        OperatorPolicy::Lenient
    } else {
        config.operator_policy()
    };

    let all_ok = if cli.expression.is_empty() {
        run_stdin(policy, cli.json)?
    } else {
        report(&evaluate_expression(&cli.expression.join(" "), policy), cli.json)?
    };

    if !all_ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Evaluate one expression per non-blank stdin line.
fn run_stdin(policy: OperatorPolicy, json: bool) -> Result<bool> {
    let stdin = std::io::stdin();
    let mut all_ok = true;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= report(&evaluate_expression(&line, policy), json)?;
    }

    Ok(all_ok)
}

fn report(result: &CalcResult, json: bool) -> Result<bool> {
    tracing::debug!("{} => {:?}", result.expression(), result);

    if json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer(&mut stdout, result)?;
        writeln!(stdout)?;
    } else if result.is_success() {
        println!("{}", result.display());
    } else {
        eprintln!("{}", result.display());
    }

    Ok(result.is_success())
}
