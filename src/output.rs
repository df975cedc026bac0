//! Result emission: stdout or a file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Writes `json` to `path`, or to stdout when no path is given.
pub fn emit(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "result written");
        }
        None => write_json(&mut std::io::stdout().lock(), json)?,
    }
    Ok(())
}

/// Writes `json` plus a trailing newline; a closed pipe is an error, not a panic.
fn write_json(out: &mut impl Write, json: &str) -> Result<()> {
    writeln!(out, "{json}")
        .and_then(|()| out.flush())
        .context("failed to write result to stdout")
}
