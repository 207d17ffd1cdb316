//! Bounded windows over a derived event sequence.
//!
//! # Invariants
//! - There is always at least one page, even for an empty sequence.
//! - Out-of-range page indexes are clamped on access, never rejected.

pub mod paginator;
