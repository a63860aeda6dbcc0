//! Type model for the Telegram Bot API reference.
//!
//! The extractor in `telegen-compiler` fills these values in a single forward
//! pass over the reference page; the renderer only reads them.
//!
//! ```
//! use telegen_schema::*;
//!
//! let mut send = Type::new("sendMessage", "https://core.telegram.org/bots/api#sendmessage");
//! assert_eq!(send.kind(), Some(EntityKind::Operation));
//! assert!(!send.exists());
//!
//! send.fields.push(Field::new("chat_id", "Integer or String", "Unique identifier"));
//! send.fields.push(Field::new("parse_mode", "String", "Optional. Mode for parsing entities"));
//! assert!(send.exists());
//! assert!(send.fields[0].required);
//! assert!(!send.fields[1].required);
//! ```

pub mod types;

pub use types::*;

/// Description prefix marking a field as not required.
pub const OPTIONAL_MARKER: &str = "Optional.";

/// Declaration-name suffix appended to operation parameter types.
pub const REQUEST_POSTFIX: &str = "Request";
