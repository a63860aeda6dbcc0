use scraper::Html;
use telegen_schema::Catalogue;
use tracing::info;

use crate::{
    error::GenError,
    extractor::extract,
    gen_go::{compile_catalogue_to_go, Artifacts, RenderOptions},
    lexicon::Lexicon,
};

/// Published location of the reference page; also the base of every permalink.
pub const DEFAULT_SOURCE_URL: &str = "https://core.telegram.org/bots/api";

/// Parse an HTML reference page into its entity catalogue.
/// Returns `Err(GenError)` if the page no longer follows the expected layout.
pub fn compile_document(html: &str, source_url: &str) -> Result<Catalogue, GenError> {
    let document = Html::parse_document(html);
    info!("parsed {} byte(s) of HTML from {}", html.len(), source_url);
    extract(&document, source_url)
}

/// Parse an HTML reference page and render it into `(Catalogue, Artifacts)`.
pub fn compile_to_go(
    html: &str,
    source_url: &str,
    lexicon: &Lexicon,
    options: &RenderOptions,
) -> Result<(Catalogue, Artifacts), GenError> {
    let catalogue = compile_document(html, source_url)?;
    let artifacts = compile_catalogue_to_go(&catalogue, lexicon, options);
    Ok((catalogue, artifacts))
}
