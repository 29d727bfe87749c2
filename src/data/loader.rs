use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use serde::Deserialize;

use super::model::{Startup, StartupDataset};
use super::money::{parse_funding, parse_valuation};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to read or parse the startup source file.
///
/// A *missing* file is not an error: [`load_file`] returns an empty dataset
/// so the UI can show a "no data" notice instead of crashing.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// JSON loading / flattening
// ---------------------------------------------------------------------------

/// One record as it appears in the source file. Every field is optional:
/// an absent field becomes an empty string / zero rather than a load error.
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawStartup {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Loc", default)]
    location: String,
    #[serde(rename = "Desc", default)]
    description: String,
    #[serde(rename = "Year", default)]
    year: i32,
    #[serde(rename = "Money", default)]
    money: Option<String>,
}

/// Load and flatten the startup source file.
///
/// Expected shape: a top-level JSON object mapping category name to an
/// array of records:
///
/// ```json
/// {
///   "Foundation Models": [
///     { "Name": "...", "Loc": "...", "Desc": "...", "Year": 2021,
///       "Money": "Raised $1.2B • Valuation: $6B" }
///   ]
/// }
/// ```
///
/// Each record is tagged with its category and gets `funding_b` /
/// `valuation_b` derived from its money text. A missing file yields an
/// empty dataset; malformed JSON is a [`LoadError`].
pub fn load_file(path: &Path) -> Result<StartupDataset, LoadError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(StartupDataset::default());
        }
        Err(e) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    parse_dataset(&text).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Flatten the category → records mapping into a [`StartupDataset`].
/// Categories iterate in sorted order, records keep their source order.
fn parse_dataset(text: &str) -> Result<StartupDataset, serde_json::Error> {
    let root: BTreeMap<String, Vec<RawStartup>> = serde_json::from_str(text)?;

    let mut startups = Vec::new();
    for (category, records) in root {
        for raw in records {
            let money_text = raw.money.unwrap_or_default();
            startups.push(Startup {
                funding_b: parse_funding(&money_text),
                valuation_b: parse_valuation(&money_text),
                name: raw.name,
                location: raw.location,
                description: raw.description,
                year: raw.year,
                category: category.clone(),
                money_text,
            });
        }
    }
    Ok(StartupDataset::from_startups(startups))
}

// ---------------------------------------------------------------------------
// Memoized loading
// ---------------------------------------------------------------------------

/// Cheap content fingerprint: modification time plus byte length.
/// Enough to tell "same unchanged file" from "file was rewritten".
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    modified: Option<SystemTime>,
    len: u64,
}

fn fingerprint(path: &Path) -> Option<Fingerprint> {
    let meta = fs::metadata(path).ok()?;
    Some(Fingerprint {
        modified: meta.modified().ok(),
        len: meta.len(),
    })
}

/// Memoizes the flattened dataset for one source file.
///
/// The cached value is an `Arc` to an immutable dataset, so repeated loads
/// of an unchanged file are free and safe to share. A changed file (new
/// mtime or length) is re-read; a vanished file yields an empty dataset
/// without disturbing the cache entry.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entry: Option<(PathBuf, Fingerprint, Arc<StartupDataset>)>,
}

impl DatasetCache {
    /// Load `path` through the cache.
    pub fn load(&mut self, path: &Path) -> Result<Arc<StartupDataset>, LoadError> {
        let Some(fp) = fingerprint(path) else {
            return Ok(Arc::new(StartupDataset::default()));
        };

        if let Some((cached_path, cached_fp, dataset)) = &self.entry {
            if cached_path == path && *cached_fp == fp {
                return Ok(Arc::clone(dataset));
            }
        }

        let dataset = Arc::new(load_file(path)?);
        self.entry = Some((path.to_path_buf(), fp, Arc::clone(&dataset)));
        Ok(dataset)
    }
}
