//! Output sinks for the command stream

use anyhow::{Context, Result};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Run `emit` against the selected sink
///
/// With no `target` the stream goes to buffered stdout. With a `target` it
/// is staged in a temp file next to it and persisted only after `emit`
/// succeeds, so the target never holds a partial stream.
pub fn with_sink<T>(
    target: Option<&Path>,
    emit: impl FnOnce(&mut dyn Write) -> Result<T>,
) -> Result<T> {
    match target {
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            let value = emit(&mut out)?;
            out.flush().context("Failed to flush stdout")?;
            Ok(value)
        }
        Some(path) => write_atomic(path, emit),
    }
}

fn write_atomic<T>(path: &Path, emit: impl FnOnce(&mut dyn Write) -> Result<T>) -> Result<T> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create output dir {}", parent.display()))?;

    let mut temp_file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;

    let value = {
        let mut out = BufWriter::new(temp_file.as_file_mut());
        let value = emit(&mut out)?;
        out.flush().context("Failed to write temp file")?;
        value
    };

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temp file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist output to {}", path.display()))?;

    // Fsync parent directory for durability (Unix only)
    #[cfg(unix)]
    {
        std::fs::File::open(parent)
            .and_then(|dir| dir.sync_all())
            .with_context(|| format!("Failed to sync output dir {}", parent.display()))?;
    }

    Ok(value)
}
