use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::BatchStats;
use crate::count::Quantity;
use crate::utils::batch_summary;

#[derive(Debug, Parser)]
#[command(version, about = "Print a count followed by the matching singular or plural noun")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pluralize a single count
    Format(FormatArgs),

    /// Pluralize every jsonline request of a file (or stdin)
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Count to print. Integer or real, may be negative
    #[arg(value_parser = parse_finite_count, allow_negative_numbers = true)]
    pub count: Quantity,

    /// Noun used when the count is 1 or -1
    pub singular: String,

    /// Noun used otherwise
    pub plural: String,

    #[command(flatten)]
    pub options: Options,
}

#[derive(Parser, Debug, Default)]
pub struct BatchArgs {
    /// Jsonlines input, e.g. {"count": 2, "singular": "item", "plural": "items"}.
    /// Reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub options: Options,

    /// Do not print the summary
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Parser, Debug, Default)]
pub struct Options {
    /// Print a json object (count, form, text) instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Write jsons with whitespace.
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

impl BatchArgs {
    /// `None` means stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }

    /// Summary line for stderr, `None` with `--quiet`.
    pub fn summary(&self, stats: &BatchStats) -> Option<String> {
        (!self.quiet).then(|| batch_summary(stats, self.input_path()))
    }
}

// The library formats NaN and infinities; the command line refuses them.
fn parse_finite_count(s: &str) -> Result<Quantity, String> {
    let count = s.parse::<Quantity>().map_err(|e| e.to_string())?;
    if count.is_finite() {
        Ok(count)
    } else {
        Err(format!("{s} is not a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_commands() {
        assert!(Cli::try_parse_from(["pluralize", "format", "2", "item", "items"]).is_ok());
        assert!(Cli::try_parse_from(["pluralize", "batch"]).is_ok());
        assert!(Cli::try_parse_from(["pluralize", "batch", "requests.jsonl", "-v"]).is_ok());
    }

    #[test]
    fn format_needs_both_forms() {
        assert!(Cli::try_parse_from(["pluralize", "format", "2", "item"]).is_err());
    }

    #[test]
    fn negative_and_real_counts() {
        let cli = Cli::try_parse_from(["pluralize", "format", "-1", "item", "items"]).unwrap();
        let Command::Format(args) = cli.command else {
            panic!("expected format");
        };
        assert_eq!(args.count, Quantity::Int(-1));

        let args = FormatArgs::try_parse_from(["_pname", "1.0", "item", "items"]).unwrap();
        assert_eq!(args.count, Quantity::Float(1.0));
    }

    #[test]
    fn non_finite_counts_are_rejected() {
        assert!(FormatArgs::try_parse_from(["_pname", "NaN", "item", "items"]).is_err());
        assert!(FormatArgs::try_parse_from(["_pname", "inf", "item", "items"]).is_err());
        assert!(FormatArgs::try_parse_from(["_pname", "two", "item", "items"]).is_err());
    }

    #[test]
    fn pretty_requires_json() {
        assert!(FormatArgs::try_parse_from(["_pname", "2", "a", "b", "--pretty"]).is_err());
        assert!(FormatArgs::try_parse_from(["_pname", "2", "a", "b", "--json", "--pretty"]).is_ok());
    }

    #[test]
    fn dash_means_stdin() {
        let args = BatchArgs::try_parse_from(["_pname", "-"]).unwrap();
        assert_eq!(args.input_path(), None);
        let args = BatchArgs::try_parse_from(["_pname"]).unwrap();
        assert_eq!(args.input_path(), None);
        let args = BatchArgs::try_parse_from(["_pname", "in.jsonl"]).unwrap();
        assert_eq!(args.input_path(), Some(Path::new("in.jsonl")));
    }

    #[test]
    fn quiet_drops_summary() {
        let stats = BatchStats {
            lines: 2,
            formatted: 2,
        };

        let args = BatchArgs::try_parse_from(["_pname", "in.jsonl"]).unwrap();
        let msg = args.summary(&stats).unwrap();
        assert!(msg.contains("Processed 2 lines"), "{msg}");
        assert!(msg.ends_with("in.jsonl"));

        let args = BatchArgs::try_parse_from(["_pname", "in.jsonl", "--quiet"]).unwrap();
        assert_eq!(args.summary(&stats), None);
        let args = BatchArgs::try_parse_from(["_pname", "-q"]).unwrap();
        assert_eq!(args.summary(&stats), None);
    }
}
