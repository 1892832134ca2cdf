//! Contact form state and submission lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page keeps one `RwSignal<ContactFormState>`. DOM events call the
//! transition methods below; the only async step (the network call) happens
//! between [`ContactFormState::begin_submit`] and
//! [`ContactFormState::finish_submit`].
//!
//! LIFECYCLE
//! =========
//! `Idle -> begin_submit -> Blocked | Submitting -> finish_submit -> Idle`.
//! Success clears the values. Failure keeps them so the user can retry.
//! `Submitting` admits no second submission.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;

use crate::forms::field::Field;
use crate::forms::validation::{ValidationError, validate_field};
use crate::net::types::{ContactId, CreateContactInput, CreateContactPayload, SubmissionError};

/// Raw field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

impl From<&FormValues> for CreateContactInput {
    fn from(values: &FormValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            message: values.message.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// A mutation is in flight; further submits are ignored.
    Submitting,
}

/// Result of asking to submit the current values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// All fields valid; send exactly this input once.
    Ready(CreateContactInput),
    /// At least one field failed; nothing is sent.
    Blocked { first_invalid: Field },
    /// A previous submission is still in flight; nothing is sent.
    AlreadySubmitting,
}

/// How an in-flight submission ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were cleared; the caller should show the success toast.
    Succeeded { id: ContactId },
    /// Values were kept; the error is in [`ContactFormState::submission_error`].
    Failed,
}

/// Form values, per-field errors, and submission progress for the contact page.
#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub values: FormValues,
    pub errors: BTreeMap<Field, ValidationError>,
    /// Per-field messages from the last failed submission, shown until the
    /// field is edited or the form is submitted again.
    pub server_errors: BTreeMap<Field, String>,
    pub phase: SubmitPhase,
    pub submission_error: Option<SubmissionError>,
    /// Submit attempts since mount or the last successful submission.
    pub submit_count: u32,
}

impl ContactFormState {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn field_error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Message to show under `field`: its validation error, else its server error.
    pub fn displayed_error(&self, field: Field) -> Option<String> {
        self.field_error(field)
            .map(ToString::to_string)
            .or_else(|| self.server_errors.get(&field).cloned())
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains_key(&field) || self.server_errors.contains_key(&field)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Record a keystroke. Once a submit has been attempted the field is
    /// re-validated on every change; before that, errors only move on blur.
    pub fn input(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.server_errors.remove(&field);
        if self.submit_count > 0 {
            let _ = self.revalidate(field);
        }
    }

    /// Validate one field after it loses focus and update only its error.
    ///
    /// # Errors
    ///
    /// Returns the field's validation error, which is also stored for display.
    pub fn blur(&mut self, field: Field) -> Result<(), ValidationError> {
        self.revalidate(field)
    }

    /// Validate every field in render order and return the first one that failed.
    pub fn validate_all(&mut self) -> Option<Field> {
        let mut first_invalid = None;
        for field in Field::ALL {
            if self.revalidate(field).is_err() && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }
        first_invalid
    }

    /// Start a submission if nothing is in flight and every field is valid.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::AlreadySubmitting;
        }
        self.submit_count = self.submit_count.saturating_add(1);
        self.server_errors.clear();
        if let Some(first_invalid) = self.validate_all() {
            return SubmitAttempt::Blocked { first_invalid };
        }
        self.phase = SubmitPhase::Submitting;
        self.submission_error = None;
        SubmitAttempt::Ready(CreateContactInput::from(&self.values))
    }

    /// Apply the response of the in-flight submission.
    ///
    /// Returns `None` when no submission is in flight, so a late or duplicate
    /// response cannot reset the form or trigger a second toast.
    pub fn finish_submit(&mut self, result: Result<CreateContactPayload, SubmissionError>) -> Option<SubmitOutcome> {
        if !self.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        match result {
            Ok(payload) => {
                self.values = FormValues::default();
                self.errors.clear();
                self.server_errors.clear();
                self.submission_error = None;
                self.submit_count = 0;
                Some(SubmitOutcome::Succeeded { id: payload.id })
            }
            Err(error) => {
                self.server_errors = server_field_errors(&error);
                self.submission_error = Some(error);
                Some(SubmitOutcome::Failed)
            }
        }
    }

    fn revalidate(&mut self, field: Field) -> Result<(), ValidationError> {
        match validate_field(field, self.values.get(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                Ok(())
            }
            Err(error) => {
                self.errors.insert(field, error.clone());
                Err(error)
            }
        }
    }
}

/// First server message for each known field; unknown keys stay summary-only.
fn server_field_errors(error: &SubmissionError) -> BTreeMap<Field, String> {
    error
        .field_messages
        .iter()
        .filter_map(|(name, messages)| Some((Field::from_name(name)?, messages.first()?.clone())))
        .collect()
}
