use std::collections::HashMap;

use lazy_static::lazy_static;
use telegen_schema::TypeRef;

use crate::{error::GenError, utils::quote};

/// Scalar names used by the reference page and their Go spelling.
pub const SCALARS: [(&str, &str); 7] = [
    ("String",       "string"),
    ("Integer",      "int"),
    ("Int",          "int"),
    ("Float number", "float64"),
    ("Float",        "float64"),
    ("Boolean",      "bool"),
    ("True",         "bool"),
];

pub const ARRAY_PREFIX: &str = "Array of ";

lazy_static! {
    pub static ref DEFAULT_LEXICON: Lexicon = Lexicon::default();
}

/// Maps the type names found in prose and tables onto target-language types.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    scalars: HashMap<String, String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            scalars: SCALARS
                .iter()
                .map(|(raw, target)| (raw.to_string(), target.to_string()))
                .collect(),
        }
    }
}

impl Lexicon {
    /// Built-in table with entries from a JSON object (`{"Raw name": "target"}`)
    /// added on top, replacing built-ins of the same name.
    pub fn with_overrides_json(text: &str) -> Result<Self, GenError> {
        let overrides: HashMap<String, String> = serde_json::from_str(text)?;
        let mut lexicon = Lexicon::default();
        for (raw, target) in overrides {
            if raw.is_empty() || target.trim().is_empty() {
                return Err(GenError::Lexicon(format!(
                    "Entry {} maps to an empty type",
                    quote(&raw)
                )));
            }
            lexicon.scalars.insert(raw, target);
        }
        Ok(lexicon)
    }

    pub fn scalar(&self, raw: &str) -> Option<&str> {
        self.scalars.get(raw).map(String::as_str)
    }

    /// Resolves a raw type description. Never fails: names missing from the
    /// table become an indirection to a structured type of that name.
    pub fn resolve(&self, raw: &str) -> TypeRef {
        if let Some(element) = raw.strip_prefix(ARRAY_PREFIX) {
            return TypeRef::sequence_of(self.resolve(element));
        }
        let base = first_alternative(raw);
        match self.scalar(base) {
            Some(target) => TypeRef::Scalar(target.to_string()),
            None         => TypeRef::Indirection(base.to_string()),
        }
    }
}

/// "Integer or String" → "Integer"; the page lists the primary type first.
fn first_alternative(raw: &str) -> &str {
    let base = raw.split(" or ").next().unwrap_or(raw);
    base.split(" and ").next().unwrap_or(base)
}

/// Resolves against the built-in table.
pub fn resolve(raw: &str) -> TypeRef {
    DEFAULT_LEXICON.resolve(raw)
}
