//! Event store abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the four store operations (`list`/`add`/`update`/`delete`).
//! - Own id assignment so uniqueness holds across every mutation path.
//!
//! # Invariants
//! - Store order is insertion order; readers derive sorted copies.
//! - `update`/`delete` on an unknown id are silent no-ops.

pub mod event_repo;
