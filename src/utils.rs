use std::path::Path;

use crate::{BatchStats, pluralize};

// Some pretty printing codepoints
pub const CHECK_C: &str = "✓";

/// One line summary of a batch run. `input` is `None` for stdin.
pub fn batch_summary(stats: &BatchStats, input: Option<&Path>) -> String {
    let at = "\x1b[1;36m@\x1b[0m"; // bold + cyan
    let source = input.map_or_else(|| "stdin".to_string(), |path| path.display().to_string());
    format!(
        "{CHECK_C} Processed {} ({} formatted) {at} {source}",
        pluralize(stats.lines, "line", "lines"),
        stats.formatted,
    )
}
