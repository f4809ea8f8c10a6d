use anyhow::{Context, Ok, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};

use pluralize::cli::{BatchArgs, Cli, Command, FormatArgs};
use pluralize::{pluralize_jsonl, pluralized, write_pluralized};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn run_format(args: &FormatArgs) -> Result<()> {
    let out = pluralized(args.count, &args.singular, &args.plural);
    let mut stdout = io::stdout().lock();
    write_pluralized(&mut stdout, &out, &args.options)
}

fn run_batch(args: &BatchArgs) -> Result<()> {
    let input = args.input_path();
    tracing::debug!("batch input: {input:?}");

    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            Box::new(BufReader::with_capacity(256 * (1 << 10), file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let writer = BufWriter::new(io::stdout().lock());

    let stats = pluralize_jsonl(reader, writer, &args.options)?;

    if let Some(msg) = args.summary(&stats) {
        eprintln!("{msg}");
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Format(args) => run_format(args)?,
        Command::Batch(args) => run_batch(args)?,
    }

    Ok(())
}
