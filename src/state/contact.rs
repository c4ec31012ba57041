//! Contact form validation.
//!
//! Validation is synchronous and total: every field is checked on every
//! attempt, and the result carries one message per failing field.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::FormMessages;

/// Deliberately loose: something, `@`, something, `.`, something.
const EMAIL_PATTERN_SRC: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN_SRC) {
    Ok(re) => Some(re),
    Err(err) => {
        log::error!("email pattern failed to compile: {err}");
        None
    }
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Control name in the form, also the `data-for` key of its error slot.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// One submission attempt, with surrounding whitespace already trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: trim_field(name).to_owned(),
            email: trim_field(email).to_owned(),
            message: trim_field(message).to_owned(),
        }
    }
}

/// Strip surrounding whitespace the way the browser's `String.trim` does,
/// which also counts the byte-order mark (U+FEFF).
fn trim_field(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Per-field error messages from one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_owned());
    }
}

/// Check the basic `local@domain.tld` shape. No further grammar is applied.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(raw))
}

/// Validate every field of `submission`.
///
/// `min_message_chars` counts Unicode scalar values of the trimmed message.
pub fn validate(
    submission: &ContactSubmission,
    messages: &FormMessages,
    min_message_chars: usize,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if submission.name.is_empty() {
        errors.insert(Field::Name, &messages.name_required);
    }

    if submission.email.is_empty() {
        errors.insert(Field::Email, &messages.email_required);
    } else if !is_valid_email(&submission.email) {
        errors.insert(Field::Email, &messages.email_invalid);
    }

    if submission.message.is_empty() || submission.message.chars().count() < min_message_chars {
        errors.insert(Field::Message, &messages.message_too_short);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
