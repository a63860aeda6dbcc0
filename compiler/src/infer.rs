//! Recovers an operation's result type from its description.
//!
//! The reference renders results with a closed set of sentence templates.
//! They are tried in order and the first match wins; several are textual
//! subsets of later ones, so the order is part of the behavior.

use lazy_static::lazy_static;
use regex::Regex;
use telegen_schema::ResultType;
use tracing::{debug, warn};

use crate::lexicon::{Lexicon, ARRAY_PREFIX, DEFAULT_LEXICON};

/// How a pattern's capture maps onto a type description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The capture is a type description as-is.
    Single,
    /// The capture is the singular element name of an array.
    ArrayElement,
}

pub struct ResultPattern {
    pub regex:   Regex,
    pub capture: Capture,
}

impl ResultPattern {
    fn new(pattern: &str, capture: Capture) -> Self {
        ResultPattern {
            regex: Regex::new(pattern).unwrap(),
            capture,
        }
    }
}

/// Captures that acknowledge success rather than name a result.
pub const ACKNOWLEDGEMENTS: [&str; 1] = ["True"];

lazy_static! {
    pub static ref RESULT_PATTERNS: Vec<ResultPattern> = vec![
        ResultPattern::new(r"Returns basic information about the bot in form of a ([\w\s]+) object", Capture::Single),
        ResultPattern::new(r"On success, if the edited message was sent by the bot, the edited (\w+) is returned, otherwise True is returned", Capture::Single),
        ResultPattern::new(r"On success, if edited message is sent by the bot, the edited (\w+) is returned, otherwise True is returned", Capture::Single),
        ResultPattern::new(r"On success, if the message was sent by the bot, the sent (\w+) is returned, otherwise True is returned", Capture::Single),
        ResultPattern::new(r"On success, if the message was sent by the bot, returns the edited (\w+), otherwise returns True", Capture::Single),
        ResultPattern::new(r"On success, the stopped (\w+) with the final results is returned", Capture::Single),
        // Must precede "the sent ... is returned" or the array is lost.
        ResultPattern::new(r"On success, an array of the sent (\w+?)'?s is returned", Capture::ArrayElement),
        ResultPattern::new(r"On success, an array of (\w+?)s that were sent is returned", Capture::ArrayElement),
        ResultPattern::new(r"Returns the new invite link as ([\w\s]+) on success", Capture::Single),
        ResultPattern::new(r"Returns the uploaded (\w+) on success", Capture::Single),
        ResultPattern::new(r"Returns an? ([\w\s]+) objects? on success", Capture::Single),
        ResultPattern::new(r"Returns ([\w\s]+) on success", Capture::Single),
        ResultPattern::new(r"On success, the sent ([\w\s]+) is returned", Capture::Single),
        ResultPattern::new(r"On success, returns an? ([\w\s]+) objects?", Capture::Single),
        ResultPattern::new(r"On success, a ([\w\s]+) object is returned", Capture::Single),
        ResultPattern::new(r"On success, ([\w\s]+) is returned", Capture::Single),
        ResultPattern::new(r"An ([\w\s]+) objects is returned", Capture::Single),
    ];
}

/// Infers with the built-in lexicon.
pub fn infer(description: &str) -> ResultType {
    infer_with(&DEFAULT_LEXICON, description)
}

pub fn infer_with(lexicon: &Lexicon, description: &str) -> ResultType {
    for (index, pattern) in RESULT_PATTERNS.iter().enumerate() {
        let Some(captures) = pattern.regex.captures(description) else {
            continue;
        };
        let name = captures.get(1).map_or("", |m| m.as_str()).trim();
        if name.is_empty() || ACKNOWLEDGEMENTS.contains(&name) {
            continue;
        }
        debug!("result pattern {} matched {:?}", index, name);
        let resolved = match pattern.capture {
            Capture::Single       => lexicon.resolve(name),
            Capture::ArrayElement => lexicon.resolve(&format!("{}{}", ARRAY_PREFIX, name)),
        };
        return ResultType::Resolved(resolved);
    }
    warn!("no result pattern matched: {}", description);
    ResultType::Unknown
}
