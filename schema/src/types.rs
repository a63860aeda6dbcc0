use serde::Serialize;

use crate::{OPTIONAL_MARKER, REQUEST_POSTFIX};

/// Which accumulator an entity heading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Definition,
    Operation,
}

impl EntityKind {
    /// Classifies a heading name by the case of its first character.
    /// Returns `None` for empty names and names starting with a caseless character.
    pub fn classify(name: &str) -> Option<EntityKind> {
        let first = name.chars().next()?;
        if first.is_uppercase() {
            Some(EntityKind::Definition)
        } else if first.is_lowercase() {
            Some(EntityKind::Operation)
        } else {
            None
        }
    }
}

/// One documented attribute of a type, or one parameter of an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name:        String,
    pub type_:       String,
    pub description: String,
    pub required:    bool,
}

impl Field {
    /// `required` is always derived from the description, never passed in.
    pub fn new(name: impl Into<String>, type_: impl Into<String>, description: impl Into<String>) -> Self {
        let description = description.into();
        Field {
            name:     name.into(),
            type_:    type_.into(),
            required: !description.starts_with(OPTIONAL_MARKER),
            description,
        }
    }
}

/// A data definition or an operation, as introduced by a level-4 heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Type {
    pub name:        String,
    pub url:         String,
    pub description: String,
    pub fields:      Vec<Field>,
    pub postfix:     String,
}

impl Type {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        let name = name.into();
        let postfix = match EntityKind::classify(&name) {
            Some(EntityKind::Operation) => REQUEST_POSTFIX.to_string(),
            _ => String::new(),
        };
        Type {
            name,
            url: url.into(),
            description: String::new(),
            fields: Vec::new(),
            postfix,
        }
    }

    pub fn kind(&self) -> Option<EntityKind> {
        EntityKind::classify(&self.name)
    }

    /// True when the type carries at least one field. Operations without
    /// parameters get no request declaration.
    pub fn exists(&self) -> bool {
        !self.fields.is_empty()
    }

    /// The heading name with its first character upper-cased, e.g. `sendMessage` → `SendMessage`.
    pub fn exported_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        }
    }

    /// Name of the rendered declaration, including the postfix.
    pub fn declaration_name(&self) -> String {
        format!("{}{}", self.exported_name(), self.postfix)
    }
}

/// A raw type description resolved into target-language terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeRef {
    /// A known scalar, already spelled in the target language.
    Scalar(String),
    SequenceOf(Box<TypeRef>),
    /// Reference to another structured type by name.
    Indirection(String),
}

impl TypeRef {
    pub fn sequence_of(inner: TypeRef) -> TypeRef {
        TypeRef::SequenceOf(Box::new(inner))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, TypeRef::SequenceOf(_))
    }
}

/// What an operation returns, as far as its prose tells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResultType {
    Resolved(TypeRef),
    Unknown,
}

/// Everything extracted from one reference page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalogue {
    pub operations:  Vec<Type>,
    pub definitions: Vec<Type>,
}

impl Catalogue {
    pub fn len(&self) -> usize {
        self.operations.len() + self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
