// src/output.rs
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};
use tracing::info;

/// Serialize `value` as pretty JSON (2-space indent, non-ASCII kept as-is)
/// and move it into place atomically: the full document is written to a
/// sibling `.tmp` file first, then renamed over the target. An interrupted
/// run therefore never leaves a half-written dataset behind.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create output directory `{}`", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(value).context("serializing output to JSON")?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .with_context(|| format!("could not write temporary file `{}`", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to rename `{}` to `{}`",
            tmp_path.display(),
            path.display()
        )
    })?;

    info!(path = %path.display(), bytes = json.len(), "wrote JSON");
    Ok(())
}
