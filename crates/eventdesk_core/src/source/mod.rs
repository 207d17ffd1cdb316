//! Initial-data collaborators.
//!
//! # Responsibility
//! - Define the async contract that yields the session's starting events.
//! - Ship the empty, fixture and failing variants used by callers and tests.
//!
//! # Invariants
//! - A failed fetch surfaces one human-readable message and no events.

pub mod event_source;
