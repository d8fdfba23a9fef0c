use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use walkdir::WalkDir;

use bindlint_core::types::Manifest;

/// Errors raised while locating or parsing manifest files.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("manifest path not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid ignore pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// A parsed manifest together with the path it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub manifest: Manifest,
}

/// Parse one manifest file.
pub fn load_file(path: &Path) -> Result<LoadedManifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedManifest {
        path: path.to_path_buf(),
        manifest,
    })
}

/// Collect manifest files under the given paths.
///
/// Explicit files are taken as-is; directories are walked for `*.json`
/// entries, skipping anything matching `ignore_patterns`. The result is
/// sorted and de-duplicated so runs are deterministic regardless of
/// filesystem order.
pub fn discover(
    paths: &[PathBuf],
    ignore_patterns: &[String],
) -> Result<Vec<PathBuf>, ManifestError> {
    let ignore = build_ignore_set(ignore_patterns)?;

    let mut found = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(ManifestError::NotFound(path.clone()));
        }
        if path.is_file() {
            found.push(path.clone());
            continue;
        }
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let entry_path = entry.path();
            if entry_path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if ignore.is_match(entry_path) {
                continue;
            }
            found.push(entry_path.to_path_buf());
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}

/// Load every manifest under `paths` in parallel.
///
/// Parsing is fanned out with rayon; results come back in discovery order,
/// and the first IO or parse failure aborts the whole load.
pub fn load_all(
    paths: &[PathBuf],
    ignore_patterns: &[String],
) -> Result<Vec<LoadedManifest>, ManifestError> {
    let files = discover(paths, ignore_patterns)?;
    files.par_iter().map(|p| load_file(p)).collect()
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, ManifestError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| ManifestError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ManifestError::Pattern {
        pattern: patterns.join(", "),
        source,
    })
}
