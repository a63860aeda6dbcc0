//! telegen
//!
//! Fetches the Telegram Bot API reference, extracts its type model and
//! writes the generated Go sources.
//!
//! - Compiler entry points (re-exported from `telegen-compiler`)
//! - `fetch_document` for retrieving the page over HTTP
//! - `write_artifacts` / `catalogue_to_json` for output

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

pub use telegen_compiler::error::GenError;
pub use telegen_compiler::{
    compile_catalogue_to_go, compile_document, compile_to_go, Artifacts, Lexicon, RenderOptions,
    DEFAULT_SOURCE_URL,
};
pub use telegen_schema::{Catalogue, EntityKind, Field, ResultType, Type, TypeRef};

/// Download the reference page. A non-success status is an error.
pub fn fetch_document(url: &str) -> Result<String, GenError> {
    let response = reqwest::blocking::get(url).map_err(|e| GenError::Fetch(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(GenError::Fetch(format!("{} returned {}", url, status)));
    }
    let body = response.text().map_err(|e| GenError::Fetch(e.to_string()))?;
    info!("fetched {} byte(s) from {}", body.len(), url);
    Ok(body)
}

/// Serialize the catalogue into pretty-printed JSON.
pub fn catalogue_to_json(catalogue: &Catalogue) -> Result<String, GenError> {
    Ok(serde_json::to_string_pretty(catalogue)?)
}

/// Write each generated file into `dir`, one after the other.
/// Returns the written paths in write order.
pub fn write_artifacts(dir: &Path, artifacts: &Artifacts) -> Result<Vec<PathBuf>, GenError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (name, content) in artifacts.files() {
        let path = dir.join(name);
        fs::write(&path, content)?;
        info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

pub mod error {
    pub use telegen_compiler::error::GenError;
}

pub mod schema {
    pub use telegen_schema::{Catalogue, EntityKind, Field, ResultType, Type, TypeRef};
}
