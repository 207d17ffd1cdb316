//! Use-case orchestration over the event store.
//!
//! # Responsibility
//! - Map user actions to store, query, paging and edit operations.
//! - Keep UI layers decoupled from state ownership details.

pub mod event_manager;
