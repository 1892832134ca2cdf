//! Reactive state held in `RwSignal`s and shared through context.
//!
//! DESIGN
//! ======
//! State types are plain structs with synchronous transition methods, so the
//! submission lifecycle can be exercised in unit tests without a browser.

pub mod contact;
pub mod toast;
