//! Aggregate report assembly and JSON persistence.

use crate::dispatch::QueryType;
use crate::error::LookupError;
use crate::registry::SourceRegistry;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// One aggregate report per run. Field names follow the persisted wire
/// format so reports remain comparable across tool versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub identificador: String,
    pub tipo: String,
    /// ISO-8601 local timestamp of when the dispatch started assembling.
    pub timestamp: String,
    /// Source-handler name → source result. A key present here was attempted
    /// exactly once this run; an absent key was never attempted.
    pub fontes: Map<String, Value>,
    /// Full registry snapshot for manual follow-up.
    pub urls_referencias: Value,
}

impl Report {
    pub fn new(
        identifier: &str,
        query_type: QueryType,
        fontes: Map<String, Value>,
        registry: &SourceRegistry,
    ) -> Self {
        Self {
            identificador: identifier.to_string(),
            tipo: query_type.as_str().to_string(),
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            fontes,
            urls_referencias: registry.as_json(),
        }
    }

    /// Number of sources attempted during this run (listings included).
    pub fn source_count(&self) -> usize {
        self.fontes.len()
    }

    /// Pretty JSON rendering, non-ASCII preserved literally.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Default report filename for the current instant:
/// `relatorio_patrimonio_<YYYYMMDD_HHMMSS>.json`.
pub fn default_filename() -> PathBuf {
    PathBuf::from(format!(
        "relatorio_patrimonio_{}.json",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Persist the report as indented UTF-8 JSON, returning the path written.
///
/// With no explicit path, a timestamped default filename in the working
/// directory is used. Single-writer CLI context; no locking needed.
pub fn save(report: &Report, path: Option<&Path>) -> Result<PathBuf, LookupError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_filename);

    let json = report.to_pretty_json().map_err(|e| LookupError::ReportWrite {
        path: path.clone(),
        source: e.into(),
    })?;
    fs::write(&path, json).map_err(|e| LookupError::ReportWrite {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
