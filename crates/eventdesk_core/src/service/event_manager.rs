//! Event manager controller.
//!
//! # Responsibility
//! - Own every piece of session state: store, criteria, paging, edit
//!   session, form input, details selection and load status.
//! - Expose one command handler per user action.
//! - Recompute the visible table on demand from current state.
//!
//! # Invariants
//! - All store mutation goes through `EventRepository`.
//! - `view()` is derived; it never mutates state.
//! - Deleting a row clears any edit session or details selection on it.

use crate::clock::{Clock, SystemClock};
use crate::config::ManagerConfig;
use crate::edit::edit_session::{EditSession, FieldChange};
use crate::form::event_form::{EventForm, FormErrors};
use crate::model::event::{Event, EventId};
use crate::pagination::paginator::{PageNav, Paginator};
use crate::query::criteria::{
    apply_criteria, CategoryFilter, EventCriteria, SortOrder, StatusFilter,
};
use crate::repo::event_repo::{EventRepository, InMemoryEventRepository};
use crate::source::event_source::{EventSource, LoadError};
use log::{debug, info, warn};

/// Status of the initial data fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    Loading,
    #[default]
    Ready,
    /// Fetch failed; the message replaces the table.
    Failed(String),
}

/// One filter/sort edit from the table toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaChange {
    NameQuery(String),
    Category(CategoryFilter),
    Status(StatusFilter),
    SortOrder(SortOrder),
    /// Back to match-all with the configured sort order.
    Reset,
}

/// Snapshot of what the table should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerView {
    pub rows: Vec<Event>,
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Rows matching the criteria across all pages.
    pub total_rows: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub editing_id: Option<EventId>,
}

/// Single-user controller over an event store.
pub struct EventManager<R: EventRepository = InMemoryEventRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
    config: ManagerConfig,
    criteria: EventCriteria,
    paginator: Paginator,
    edit: EditSession,
    form: EventForm,
    form_errors: Option<FormErrors>,
    details: Option<EventId>,
    load_state: LoadState,
}

impl EventManager {
    /// Empty in-memory manager using the local date for validation.
    pub fn new(config: ManagerConfig) -> Self {
        Self::with_parts(InMemoryEventRepository::new(), SystemClock, config)
    }
}

impl<R: EventRepository, C: Clock> EventManager<R, C> {
    pub fn with_parts(repo: R, clock: C, config: ManagerConfig) -> Self {
        let criteria = EventCriteria {
            sort_order: config.sort_order,
            ..EventCriteria::default()
        };
        let paginator = Paginator::new(config.page_size);
        Self {
            repo,
            clock,
            config,
            criteria,
            paginator,
            edit: EditSession::Idle,
            form: EventForm::new(),
            form_errors: None,
            details: None,
            load_state: LoadState::Ready,
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn events(&self) -> &[Event] {
        self.repo.list()
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn criteria(&self) -> &EventCriteria {
        &self.criteria
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    /// Mutable form input for field bindings.
    pub fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    /// Errors from the last rejected submission.
    pub fn form_errors(&self) -> Option<&FormErrors> {
        self.form_errors.as_ref()
    }

    /// Marks the initial fetch as in flight.
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Applies the initial fetch result.
    pub fn finish_load(&mut self, result: Result<Vec<Event>, LoadError>) {
        match result {
            Ok(events) => {
                info!(
                    "event=load_events module=manager status=ok count={}",
                    events.len()
                );
                // Ids from the previous collection may not survive a reload.
                self.edit.cancel();
                self.details = None;
                self.repo.replace_all(events);
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                warn!(
                    "event=load_events module=manager status=error detail={}",
                    err.detail()
                );
                self.load_state = LoadState::Failed(err.message().to_string());
            }
        }
    }

    /// Fetches the starting events from `source`. Not retried on failure.
    pub async fn load<S: EventSource>(&mut self, source: &S) {
        self.begin_load();
        let result = source.fetch_events().await;
        self.finish_load(result);
    }

    /// Submits the add-event form.
    pub fn on_add(&mut self) -> Result<Event, FormErrors> {
        let today = self.clock.today();
        match self.form.submit(&mut self.repo, today) {
            Ok(event) => {
                self.form_errors = None;
                Ok(event)
            }
            Err(errors) => {
                self.form_errors = Some(errors.clone());
                Err(errors)
            }
        }
    }

    /// Starts editing `id`. Returns `false` when the id is unknown.
    pub fn on_begin_edit(&mut self, id: EventId) -> bool {
        let Some(event) = self.repo.get(id) else {
            debug!("event=edit_begin module=manager status=skipped reason=not_found id={id}");
            return false;
        };
        self.edit.begin(event);
        true
    }

    pub fn on_edit_field(&mut self, change: FieldChange) -> bool {
        self.edit.apply(change)
    }

    pub fn on_commit_edit(&mut self) -> Option<Event> {
        self.edit.commit(&mut self.repo)
    }

    pub fn on_cancel_edit(&mut self) -> Option<EventId> {
        self.edit.cancel()
    }

    /// Deletes `id`, dropping any edit or details state pointing at it.
    pub fn on_delete(&mut self, id: EventId) -> bool {
        if self.edit.editing_id() == Some(id) {
            self.edit.cancel();
        }
        if self.details == Some(id) {
            self.details = None;
        }
        self.repo.delete(id)
    }

    pub fn on_filter_change(&mut self, change: CriteriaChange) {
        match change {
            CriteriaChange::NameQuery(query) => self.criteria.name_query = query,
            CriteriaChange::Category(category) => self.criteria.category = category,
            CriteriaChange::Status(status) => self.criteria.status = status,
            CriteriaChange::SortOrder(order) => self.criteria.sort_order = order,
            CriteriaChange::Reset => {
                self.criteria = EventCriteria {
                    sort_order: self.config.sort_order,
                    ..EventCriteria::default()
                };
            }
        }
    }

    /// Navigates pages of the current filtered view. Returns the new index.
    pub fn on_page_change(&mut self, nav: PageNav) -> usize {
        let len = apply_criteria(self.repo.list(), &self.criteria).len();
        self.paginator.navigate(nav, len)
    }

    /// Switches page size and returns to the first page.
    ///
    /// Returns `false` when `page_size` is not an offered option.
    pub fn on_page_size_change(&mut self, page_size: usize) -> bool {
        if !self.config.allows_page_size(page_size) {
            debug!("event=page_size module=manager status=rejected page_size={page_size}");
            return false;
        }
        self.paginator.set_page_size(page_size);
        true
    }

    /// Selects an event for the details dialog.
    pub fn on_show_details(&mut self, id: EventId) -> Option<&Event> {
        let event = self.repo.get(id)?;
        self.details = Some(id);
        Some(event)
    }

    pub fn on_close_details(&mut self) {
        self.details = None;
    }

    /// Current values of the selected event.
    pub fn details(&self) -> Option<&Event> {
        self.details.and_then(|id| self.repo.get(id))
    }

    /// Recomputes the visible table from current state.
    pub fn view(&self) -> ManagerView {
        let editing_id = self.edit.editing_id();
        let error = match &self.load_state {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        };

        let derived = if error.is_some() {
            Vec::new()
        } else {
            apply_criteria(self.repo.list(), &self.criteria)
        };
        let page = self.paginator.page(&derived);

        ManagerView {
            rows: page.rows.to_vec(),
            page_index: page.page_index,
            page_count: page.page_count,
            page_size: page.page_size,
            total_rows: page.total_rows,
            can_go_previous: page.can_go_previous,
            can_go_next: page.can_go_next,
            is_loading: self.load_state == LoadState::Loading,
            error,
            editing_id,
        }
    }
}
