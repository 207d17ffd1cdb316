//! Event creation form.
//!
//! # Responsibility
//! - Hold raw user input for a new event between keystrokes.
//! - Validate input and hand valid drafts to the store.
//!
//! # Invariants
//! - Invalid submissions never reach the store and keep the user's input.
//! - Successful submissions reset every field to its default.

pub mod event_form;
