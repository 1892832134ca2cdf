//! Networking for the contact mutation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single `createContact` call and `types` defines the
//! GraphQL request/response schema plus the error surfaced to the page.

pub mod api;
pub mod types;
