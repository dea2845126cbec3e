// JSON export of chart figures.

use crate::charts::ChartSet;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Attempts at a unique file name before giving up.
const MAX_NAME_ATTEMPTS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize charts: {0}")]
    Json(#[from] serde_json::Error),
}

/// File contents: the chart set plus when it was produced.
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    generated_at: String,
    #[serde(flatten)]
    charts: &'a ChartSet,
}

/// Write `charts` as pretty JSON to `{dir}/comparison-{timestamp}.json`,
/// creating `dir` if needed. Returns the written path.
///
/// Never overwrites: a name already taken gets a `-1`, `-2`, ... suffix.
pub fn write_chart_set(dir: &Path, charts: &ChartSet) -> Result<PathBuf, ExportError> {
    let now = chrono::Utc::now();

    std::fs::create_dir_all(dir).map_err(|e| ExportError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let doc = ExportDocument {
        generated_at: now.to_rfc3339(),
        charts,
    };
    let body = serde_json::to_string_pretty(&doc)?;

    let stem = format!("comparison-{}", now.format("%Y%m%dT%H%M%S%3fZ"));
    let (path, mut file) = create_unique(dir, &stem)?;
    file.write_all(body.as_bytes()).map_err(|e| ExportError::Io {
        path: path.clone(),
        source: e,
    })?;

    info!("Exported charts for {} to {}", charts.season, path.display());
    Ok(path)
}

/// Create `{stem}.json` in `dir`, or the first free `{stem}-{n}.json`.
fn create_unique(dir: &Path, stem: &str) -> Result<(PathBuf, File), ExportError> {
    let mut last_err = None;
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = if attempt == 0 {
            format!("{stem}.json")
        } else {
            format!("{stem}-{attempt}.json")
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => last_err = Some((path, e)),
            Err(e) => return Err(ExportError::Io { path, source: e }),
        }
    }
    let (path, source) = match last_err {
        Some(pair) => pair,
        None => (
            dir.join(format!("{stem}.json")),
            std::io::Error::from(ErrorKind::AlreadyExists),
        ),
    };
    Err(ExportError::Io { path, source })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
