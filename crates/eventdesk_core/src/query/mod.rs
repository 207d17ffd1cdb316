//! Filter and sort derivation over the event sequence.
//!
//! # Responsibility
//! - Turn the store's insertion-ordered events into the displayed order.
//!
//! # Invariants
//! - Derivation is pure: the store sequence is never reordered in place.

pub mod criteria;
