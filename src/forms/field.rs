//! Field identifiers for the contact form.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::fmt;

/// One input on the contact form, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// All fields in the order they are rendered and validated.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form/wire name of the field (`name`, `email`, `message`).
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Visible label text.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Whether the field renders as a multi-line textarea.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }

    /// Look a field up by its form name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
