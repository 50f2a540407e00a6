//! Contact form submission

use anyhow::{anyhow, Context};
use serde_json::{Map, Value};

use super::ContactError;

const NAME: &str = "nome";
const EMAIL: &str = "email";
const PHONE: &str = "telefone";
const SUBJECT: &str = "assunto";
const MESSAGE: &str = "mensagem";

/// A validated contact form submission
///
/// Name, email and message are guaranteed to be non-empty. Phone and subject
/// are `None` when the sender left them out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    name: String,
    email: String,
    phone: Option<String>,
    subject: Option<String>,
    message: String,
}

impl Submission {
    /// Create a new submission, rejecting it when a required field is empty.
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactError> {
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::Validation);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: optional(phone),
            subject: optional(subject),
            message: message.to_string(),
        })
    }

    /// Parse a submission from a raw request body.
    ///
    /// An empty body counts as a submission with every field empty. Text that
    /// is not valid JSON is an internal error, not a validation failure.
    pub fn parse(body: &[u8]) -> Result<Self, ContactError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Self::from_json(&Value::Null);
        }

        let value: Value =
            serde_json::from_slice(body).context("request body is not valid JSON")?;

        Self::from_json(&value)
    }

    /// Build a submission from a decoded JSON payload.
    ///
    /// Anything other than an object is treated as an empty form. Required
    /// fields are checked before any value is read, so a missing field is
    /// always a validation error whatever shape the other fields have.
    pub fn from_json(value: &Value) -> Result<Self, ContactError> {
        let empty = Map::new();
        let fields = value.as_object().unwrap_or(&empty);

        if [NAME, EMAIL, MESSAGE].iter().any(|key| is_blank(fields.get(*key))) {
            return Err(ContactError::Validation);
        }

        Self::new(
            &field(fields, NAME)?,
            &field(fields, EMAIL)?,
            &field(fields, PHONE)?,
            &field(fields, SUBJECT)?,
            &field(fields, MESSAGE)?,
        )
    }

    /// The sender's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sender's email, exactly as submitted
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The sender's phone number, if given
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// The message subject, if given
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// The message text
    pub fn message(&self) -> &str {
        &self.message
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Absent, null, empty strings and empty collections all count as not filled in.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(entries)) => entries.is_empty(),
        Some(Value::Bool(_) | Value::Number(_)) => false,
    }
}

/// Reads a form field as text. Scalars are rendered as their JSON text, blank
/// values count as absent, and nested values are rejected.
fn field(fields: &Map<String, Value>, key: &str) -> Result<String, ContactError> {
    let value = fields.get(key);

    if is_blank(value) {
        return Ok(String::new());
    }

    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Array(_) | Value::Object(_)) => Err(ContactError::Internal(anyhow!(
            "field `{key}` has an unexpected shape"
        ))),
    }
}
