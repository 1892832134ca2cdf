//! The `createContact` mutation call.
//!
//! Client-side (hydrate): a real HTTP POST via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since submissions only
//! happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure path becomes a [`SubmissionError`] so the page can render
//! it verbatim instead of panicking mid-hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::{CreateContactData, GraphqlResponse, GENERIC_ERROR_MESSAGE};
use super::types::{CreateContactInput, CreateContactPayload, CreateContactVariables, GraphqlRequest, SubmissionError};

pub const CREATE_CONTACT_OPERATION: &str = "CreateContactMutation";

pub const CREATE_CONTACT_MUTATION: &str = "mutation CreateContactMutation($input: CreateContactInput!) {
  createContact(input: $input) {
    id
  }
}";

/// Build the request body for one submission.
pub fn create_contact_request(input: CreateContactInput) -> GraphqlRequest<CreateContactVariables> {
    GraphqlRequest {
        operation_name: CREATE_CONTACT_OPERATION,
        query: CREATE_CONTACT_MUTATION,
        variables: CreateContactVariables { input },
    }
}

/// Map a decoded response to the created record or a displayable error.
///
/// GraphQL errors win over the HTTP status, since servers commonly pair a
/// 400/500 with an `errors` body describing the real problem.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_create_contact_response(
    ok: bool,
    status: u16,
    body: GraphqlResponse<CreateContactData>,
) -> Result<CreateContactPayload, SubmissionError> {
    if !body.errors.is_empty() {
        return Err(SubmissionError::from_graphql(&body.errors));
    }
    if !ok {
        return Err(SubmissionError::http_status(status));
    }
    body.data
        .and_then(|data| data.create_contact)
        .ok_or_else(|| SubmissionError::new(GENERIC_ERROR_MESSAGE))
}

/// Decode a raw response body; unparseable bodies on error statuses report the status.
#[cfg(any(test, feature = "hydrate"))]
fn parse_create_contact_response(ok: bool, status: u16, text: &str) -> Result<CreateContactPayload, SubmissionError> {
    match serde_json::from_str::<GraphqlResponse<CreateContactData>>(text) {
        Ok(body) => interpret_create_contact_response(ok, status, body),
        Err(_) if !ok => Err(SubmissionError::http_status(status)),
        Err(e) => Err(SubmissionError::network(e.to_string())),
    }
}

/// Submit one contact via `POST <endpoint>`.
///
/// # Errors
///
/// Returns a [`SubmissionError`] if the request cannot be sent, the server
/// reports GraphQL errors, responds with a non-OK status, or omits the
/// created record.
pub async fn create_contact(endpoint: &str, input: CreateContactInput) -> Result<CreateContactPayload, SubmissionError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = create_contact_request(input);
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&payload)
            .map_err(|e| SubmissionError::network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmissionError::network(e.to_string()))?;
        let text = resp
            .text()
            .await
            .map_err(|e| SubmissionError::network(e.to_string()))?;
        parse_create_contact_response(resp.ok(), resp.status(), &text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, create_contact_request(input));
        Err(SubmissionError::network("not available on server"))
    }
}
