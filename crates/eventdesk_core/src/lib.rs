//! Core logic for the personal event manager.
//! This crate is the single source of truth for event invariants.

pub mod clock;
pub mod config;
pub mod edit;
pub mod form;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod query;
pub mod repo;
pub mod service;
pub mod source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, LoggingConfig, ManagerConfig};
pub use edit::edit_session::{EditSession, FieldChange};
pub use form::event_form::{EventForm, FieldError, FormErrors, FormField};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{Category, Event, EventId, EventStatus, ModelError, NewEvent};
pub use pagination::paginator::{page_count, paginate, Page, PageNav, Paginator};
pub use query::criteria::{
    apply_criteria, CategoryFilter, EventCriteria, SortOrder, StatusFilter,
};
pub use repo::event_repo::{EventRepository, InMemoryEventRepository};
pub use service::event_manager::{CriteriaChange, EventManager, LoadState, ManagerView};
pub use source::event_source::{
    fixture_events, EmptySource, EventSource, FailingSource, FixtureSource, LoadError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
