//! Inline edit session state machine.
//!
//! # Responsibility
//! - Track the single row being edited and its uncommitted draft.
//! - Commit drafts through the repository `update` contract.
//!
//! # Invariants
//! - At most one event is in edit state at any time.
//! - Field changes only touch the draft; the store changes on commit only.
//! - Beginning a new edit drops the previous draft without committing it.

use crate::model::event::{Category, Event, EventId, EventStatus};
use crate::repo::event_repo::EventRepository;
use chrono::NaiveDate;
use log::{debug, info};

/// Single-field replacement applied to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Description(String),
    Category(Category),
    Date(NaiveDate),
    Status(EventStatus),
}

impl FieldChange {
    fn apply_to(self, draft: &mut Event) {
        match self {
            Self::Name(value) => draft.name = value,
            Self::Description(value) => draft.description = value,
            Self::Category(value) => draft.category = value,
            Self::Date(value) => draft.date = value,
            Self::Status(value) => draft.status = value,
        }
    }
}

/// Edit state for the event table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { id: EventId, draft: Event },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<EventId> {
        match self {
            Self::Idle => None,
            Self::Editing { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&Event> {
        match self {
            Self::Idle => None,
            Self::Editing { draft, .. } => Some(draft),
        }
    }

    /// Starts editing `event` with a draft copy of its current values.
    ///
    /// Returns the id of a previous uncommitted draft that was discarded.
    pub fn begin(&mut self, event: &Event) -> Option<EventId> {
        let discarded = self.editing_id().filter(|id| *id != event.id);
        if let Some(previous) = discarded {
            info!(
                "event=edit_discarded module=edit status=ok id={} replaced_by={}",
                previous, event.id
            );
        }

        *self = Self::Editing {
            id: event.id,
            draft: event.clone(),
        };
        debug!("event=edit_begin module=edit status=ok id={}", event.id);
        discarded
    }

    /// Replaces one draft field. Returns `false` when nothing is being edited.
    pub fn apply(&mut self, change: FieldChange) -> bool {
        match self {
            Self::Idle => false,
            Self::Editing { draft, .. } => {
                change.apply_to(draft);
                true
            }
        }
    }

    /// Writes the draft to `repo` and returns to idle.
    ///
    /// Returns the committed event, or `None` when idle or when the edited
    /// row no longer exists in the store.
    pub fn commit<R: EventRepository + ?Sized>(&mut self, repo: &mut R) -> Option<Event> {
        let Self::Editing { id, draft } = std::mem::take(self) else {
            return None;
        };

        if repo.update(draft.clone()) {
            debug!("event=edit_commit module=edit status=ok id={id}");
            Some(draft)
        } else {
            debug!("event=edit_commit module=edit status=skipped reason=not_found id={id}");
            None
        }
    }

    /// Drops the draft without touching the store. Returns the cancelled id.
    pub fn cancel(&mut self) -> Option<EventId> {
        let cancelled = self.editing_id();
        *self = Self::Idle;
        if let Some(id) = cancelled {
            debug!("event=edit_cancel module=edit status=ok id={id}");
        }
        cancelled
    }
}
