//! Webhook event specifiers and resource-code validation.
//!
//! An event list is written as comma-separated entries. Context-driven events
//! carry the resources they apply to after a colon, pipe-delimited:
//! `bucket.created,lead.created:bucket-one|bucket-two`.

use std::fmt;

use crate::error::ErrorKind;

/// Events that only make sense when scoped to one or more resources.
pub const CONTEXT_DRIVEN_EVENTS: &[&str] = &["lead.created"];

pub const MAX_CODE_LEN: usize = 40;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EventSpecError {
    #[error("context driven event must contain a single colon : character")]
    ColonCount { entry: String },

    #[error("resource code {code:?} {reason}")]
    InvalidCode { code: String, reason: &'static str },

    #[error("event {name} requires a context, e.g. {name}:resource-one|resource-two")]
    MissingContext { name: String },

    #[error("event {name} does not take a context")]
    UnexpectedContext { name: String },

    #[error("empty event entry")]
    EmptyEntry,
}

impl EventSpecError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::MalformedInput
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventSpecifier {
    pub name: String,
    pub resources: Vec<String>,
}

impl fmt::Display for EventSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.resources.is_empty() {
            write!(f, ":{}", self.resources.join("|"))?;
        }
        Ok(())
    }
}

/// Parses a comma-separated event list. Entries are trimmed; order is kept and
/// duplicates are not removed.
pub fn parse_event_specs(spec: &str) -> Result<Vec<EventSpecifier>, EventSpecError> {
    let mut out = Vec::new();
    for entry in spec.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(EventSpecError::EmptyEntry);
        }
        if entry.contains(':') {
            let parts = entry.split(':').collect::<Vec<_>>();
            let [name, list] = parts.as_slice() else {
                return Err(EventSpecError::ColonCount {
                    entry: entry.to_string(),
                });
            };
            let name = name.trim();
            if !CONTEXT_DRIVEN_EVENTS.contains(&name) {
                return Err(EventSpecError::UnexpectedContext {
                    name: name.to_string(),
                });
            }
            let mut resources = Vec::new();
            for code in list.split('|') {
                let (ok, reason) = is_valid_code(code);
                if !ok {
                    return Err(EventSpecError::InvalidCode {
                        code: code.to_string(),
                        reason,
                    });
                }
                resources.push(code.to_string());
            }
            out.push(EventSpecifier {
                name: name.to_string(),
                resources,
            });
            continue;
        }

        if CONTEXT_DRIVEN_EVENTS.contains(&entry) {
            return Err(EventSpecError::MissingContext {
                name: entry.to_string(),
            });
        }
        out.push(EventSpecifier {
            name: entry.to_string(),
            resources: Vec::new(),
        });
    }
    Ok(out)
}

/// Checks a bucket resource name or webhook code. Returns `(true, "")` when
/// valid, otherwise `false` and the rule that failed.
pub fn is_valid_code(code: &str) -> (bool, &'static str) {
    if code.contains("--") {
        return (false, "has two or more adjacent hyphens");
    }
    if code.is_empty() {
        return (false, "must be at least 1 character in length");
    }
    if code.chars().count() > MAX_CODE_LEN {
        return (false, "exceeds 40 characters");
    }
    if code.starts_with('-') {
        return (false, "starts with hyphen character");
    }
    if code.ends_with('-') {
        return (false, "ends with hyphen character");
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return (
            false,
            "must contain lower case characters a-z including the hyphen only",
        );
    }
    (true, "")
}

/// Webhook targets must be absolute `https` URLs.
pub fn is_valid_secure_webhook_url(s: &str) -> bool {
    match reqwest::Url::parse(s) {
        Ok(url) => url.scheme() == "https" && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
