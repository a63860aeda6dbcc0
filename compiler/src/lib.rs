//! telegen-compiler
//!
//! This crate implements:
//!  1) A type lexicon mapping prose type names onto Go types,
//!  2) Tree-walking helpers over a parsed HTML document,
//!  3) The catalogue extractor (`extract` → operations + definitions),
//!  4) Return-type inference from operation descriptions,
//!  5) Go code generation (`compile_catalogue_to_go` → `Artifacts`),
//!  6) The error type (`GenError`).

pub mod error;
pub mod utils;
pub mod lexicon;
pub mod walker;
pub mod extractor;
pub mod infer;
pub mod compiler;
pub mod gen_go;

pub use compiler::{compile_document, compile_to_go, DEFAULT_SOURCE_URL};
pub use extractor::extract;
pub use gen_go::{compile_catalogue_to_go, Artifacts, RenderOptions};
pub use infer::{infer, infer_with};
pub use lexicon::{resolve, Lexicon};
