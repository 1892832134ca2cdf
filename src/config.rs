//! Page configuration shared through Leptos context.
//!
//! Defaults reproduce the stock contact page. `App` provides them; a host
//! mounting the page elsewhere passes its own `ContactConfig` to `App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "/.redwood/functions/graphql";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for your submission!";
pub const DEFAULT_TOAST_DURATION_MS: u32 = 2_000;
pub const DEFAULT_PAGE_TITLE: &str = "Contact";
pub const DEFAULT_PAGE_DESCRIPTION: &str = "Contact page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub graphql_endpoint: String,
    pub success_message: String,
    pub toast_duration_ms: u32,
    pub page_title: String,
    pub page_description: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_owned(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            page_title: DEFAULT_PAGE_TITLE.to_owned(),
            page_description: DEFAULT_PAGE_DESCRIPTION.to_owned(),
        }
    }
}
