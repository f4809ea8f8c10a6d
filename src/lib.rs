pub mod cli;
pub mod count;
pub mod models;
pub mod utils;

use anyhow::{Context, Ok, Result};
#[allow(unused)]
use tracing::{debug, info, trace, warn};

use std::io::{BufRead, Write};

use crate::cli::Options;
use crate::count::{Count, Quantity};
use crate::models::{Form, Pluralized, Request};

/// Format `count` followed by the noun form matching it.
///
/// The singular form is used when the absolute value of `count` is exactly one, the plural form
/// otherwise (zero included). The count itself is printed verbatim, sign and all.
///
/// ```
/// use pluralize::pluralize;
///
/// assert_eq!(pluralize(1, "item", "items"), "1 item");
/// assert_eq!(pluralize(-1, "item", "items"), "-1 item");
/// assert_eq!(pluralize(0, "item", "items"), "0 items");
/// assert_eq!(pluralize(1.0, "item", "items"), "1 item");
/// ```
pub fn pluralize<C: Count>(count: C, singular: &str, plural: &str) -> String {
    let noun = select_form(&count).pick(singular, plural);
    format!("{count} {noun}")
}

/// Which noun form `count` takes.
pub fn select_form<C: Count + ?Sized>(count: &C) -> Form {
    if count.is_one_in_magnitude() {
        Form::Singular
    } else {
        Form::Plural
    }
}

/// Like `pluralize`, but keeps the count and the chosen form around (for json output).
pub fn pluralized(count: Quantity, singular: &str, plural: &str) -> Pluralized {
    let form = select_form(&count);
    Pluralized {
        count,
        form,
        text: format!("{count} {}", form.pick(singular, plural)),
    }
}

/// Write a `Pluralized` either as plain text or as json, followed by a newline.
pub fn write_pluralized<W: Write>(
    writer: &mut W,
    out: &Pluralized,
    options: &Options,
) -> Result<()> {
    if options.json {
        if options.pretty {
            serde_json::to_writer_pretty(&mut *writer, out)?;
        } else {
            serde_json::to_writer(&mut *writer, out)?;
        }
        writer.write_all(b"\n")?;
    } else {
        writeln!(writer, "{}", out.text)?;
    }
    Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Lines read, blank ones included
    pub lines: usize,
    pub formatted: usize,
}

/// Pluralize every jsonline `Request` in `reader`, writing one result per line to `writer`.
///
/// Blank lines are skipped. The first line that fails to decode aborts the run.
#[tracing::instrument(skip_all)]
pub fn pluralize_jsonl<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    options: &Options,
) -> Result<BatchStats> {
    let mut line = Vec::with_capacity(1 << 10);
    let mut stats = BatchStats::default();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break; // EOF
        }

        stats.lines += 1;

        if line.iter().all(u8::is_ascii_whitespace) {
            trace!("skipping blank line {}", stats.lines);
            continue;
        }

        let request: Request = serde_json::from_slice(&line)
            .with_context(|| format!("Error decoding JSON @ line {}", stats.lines))?;

        let out = pluralized(request.count, &request.singular, &request.plural);
        write_pluralized(&mut writer, &out, options)?;
        stats.formatted += 1;
    }

    writer.flush()?;
    debug!("{stats:?}");

    Ok(stats)
}
