//! Contact form fields and their validation rules.
//!
//! DESIGN
//! ======
//! Rules are plain data keyed by field so the page, the form state and the
//! tests all read the same table. Nothing here touches the DOM.

pub mod field;
pub mod validation;
