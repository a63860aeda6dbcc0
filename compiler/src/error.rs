use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Missing anchor \"{0}\"; the reference page layout has changed")]
    MissingAnchor(String),

    #[error("Missing \"{selector}\" in {context}")]
    MissingElement {
        context:  String,
        selector: String,
    },

    #[error("Row {row} of the table under \"{entity}\" has {cells} cell(s), expected at least 2")]
    MalformedRow {
        entity: String,
        row:    usize,
        cells:  usize,
    },

    #[error("Invalid selector \"{0}\"")]
    InvalidSelector(String),

    #[error("Lexicon error: {0}")]
    Lexicon(String),
}
