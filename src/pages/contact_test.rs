use super::*;
use crate::net::types::ContactId;

#[test]
fn success_outcome_shows_configured_message() {
    let outcome = SubmitOutcome::Succeeded { id: ContactId::Int(1) };
    assert_eq!(
        outcome_toast(Some(&outcome), "Thank you for your submission!"),
        Some("Thank you for your submission!")
    );
}

#[test]
fn failed_outcome_shows_no_toast() {
    assert_eq!(outcome_toast(Some(&SubmitOutcome::Failed), "Thanks"), None);
}

#[test]
fn ignored_response_shows_no_toast() {
    assert_eq!(outcome_toast(None, "Thanks"), None);
}

#[test]
fn submit_button_label() {
    assert_eq!(SUBMIT_LABEL, "Save");
}
