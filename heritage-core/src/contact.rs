//! Client-side checks for the contact form. Submission is simulated only.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Alert shown when any field is missing or the e-mail is malformed.
pub const INVALID_NOTICE: &str =
    "Por favor, preencha todos os campos corretamente. Verifique seu e-mail.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Message,
    ];

    /// Element id of the field in the form markup.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field is empty: {0}")]
    MissingField(ContactField),
    #[error("e-mail address is malformed")]
    InvalidEmail,
}

impl ContactError {
    /// Message presented to the visitor; the same for every failure.
    pub fn notice(&self) -> &'static str {
        INVALID_NOTICE
    }
}

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Trimmed values that passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ValidContact {
    pub fn notice(&self) -> String {
        success_notice(&self.name)
    }
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<ValidContact, ContactError> {
        for field in ContactField::ALL {
            if field_is_invalid(self.value(field)) {
                return Err(ContactError::MissingField(field));
            }
        }

        let email = trim_js(&self.email);
        if !is_email_shaped(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(ValidContact {
            name: trim_js(&self.name).to_string(),
            email: email.to_string(),
            message: trim_js(&self.message).to_string(),
        })
    }
}

/// Whitespace as the browser's `String.prototype.trim` and regex `\s` see it:
/// Unicode `White_Space` plus U+FEFF, minus U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

fn trim_js(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// A field is flagged invalid when it is blank after trimming.
pub fn field_is_invalid(value: &str) -> bool {
    trim_js(value).is_empty()
}

/// `local@domain.tld` shape: runs without whitespace or `@`, an `@`, and a dot
/// with at least one character on each side in the domain.
pub fn is_email_shaped(value: &str) -> bool {
    // One run of non-whitespace, non-`@` characters, whitespace per `is_js_whitespace`.
    const RUN: &str = r"[[^\s@\x{FEFF}]\x{85}]+";
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(&format!(r"^{RUN}@{RUN}\.{RUN}$")).expect("e-mail pattern is a valid regex")
        })
        .is_match(value)
}

pub fn success_notice(name: &str) -> String {
    format!("Obrigado, {name}! Sua mensagem foi enviada com sucesso. (Simulação)")
}
