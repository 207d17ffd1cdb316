//! Inline edit workflow for table rows.

pub mod edit_session;
