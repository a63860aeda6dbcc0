use serde_json;

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Folds newlines into spaces.
pub fn one_line(text: &str) -> String {
    text.replace('\n', " ")
}
