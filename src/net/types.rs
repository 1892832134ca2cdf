//! Wire DTOs for the `createContact` GraphQL mutation.
//!
//! DESIGN
//! ======
//! Response types are lenient (`#[serde(default)]` everywhere) so a partial
//! or error-only body still deserializes and can be mapped to a readable
//! [`SubmissionError`] instead of a JSON parse failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback summary when the server gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";

/// Extension code the server uses for per-field input validation failures.
pub const BAD_USER_INPUT_CODE: &str = "BAD_USER_INPUT";

/// Mutation input, sent exactly as the user typed it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// `variables` object of the mutation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateContactVariables {
    pub input: CreateContactInput,
}

/// Standard GraphQL-over-HTTP request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<V> {
    pub operation_name: &'static str,
    pub query: &'static str,
    pub variables: V,
}

/// Standard GraphQL-over-HTTP response body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphqlErrorExtensions>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphqlErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub properties: Option<GraphqlErrorProperties>,
}

/// Per-field server messages, keyed by input field name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphqlErrorProperties {
    #[serde(default)]
    pub messages: BTreeMap<String, Vec<String>>,
}

/// `data` object of the mutation response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactData {
    #[serde(default)]
    pub create_contact: Option<CreateContactPayload>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreateContactPayload {
    pub id: ContactId,
}

/// Server-assigned id of the created contact record. Opaque to the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Int(id) => write!(f, "{id}"),
            ContactId::Text(id) => f.write_str(id),
        }
    }
}

/// Failure of the remote call, displayed verbatim above the form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmissionError {
    /// Summary line.
    pub message: String,
    /// Extra lines, one per server-side field message.
    pub details: Vec<String>,
    /// Server-side messages keyed by input field name, as sent by the server.
    pub field_messages: BTreeMap<String, Vec<String>>,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), details: Vec::new(), field_messages: BTreeMap::new() }
    }

    /// Transport or decoding failure; `message` is kept as reported.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// Non-2xx response carrying no GraphQL errors.
    pub fn http_status(status: u16) -> Self {
        Self::new(format!("Response not successful: Received status code {status}"))
    }

    /// Build from the `errors` array of a GraphQL response.
    ///
    /// The first error provides the summary. When it is a `BAD_USER_INPUT`
    /// error, its per-field messages are kept by field and also listed as
    /// detail lines.
    pub fn from_graphql(errors: &[GraphqlError]) -> Self {
        let Some(first) = errors.first() else {
            return Self::new(GENERIC_ERROR_MESSAGE);
        };
        let message = if first.message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_owned()
        } else {
            first.message.clone()
        };
        let field_messages: BTreeMap<String, Vec<String>> = first
            .extensions
            .as_ref()
            .filter(|ext| ext.code.as_deref() == Some(BAD_USER_INPUT_CODE))
            .and_then(|ext| ext.properties.as_ref())
            .map(|props| props.messages.clone())
            .unwrap_or_default();
        let details = field_messages.values().flat_map(|messages| messages.iter().cloned()).collect();
        Self { message, details, field_messages }
    }
}
