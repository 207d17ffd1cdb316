//! Domain model for the personal event manager.
//!
//! # Responsibility
//! - Define the canonical `Event` record and its closed value sets.
//! - Keep wire names (`work`, `upcoming`, ...) stable across serde and parsing.
//!
//! # Invariants
//! - Every stored event is identified by a unique `EventId`.
//! - `category` and `status` can only hold members of their closed sets.

pub mod event;
