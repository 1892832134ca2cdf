//! Form and notification components used by the contact page.
//!
//! ARCHITECTURE
//! ============
//! Components only read state signals and forward DOM events to state
//! transition methods; the page owns submission orchestration.

pub mod form_error;
pub mod form_field;
pub mod toaster;
