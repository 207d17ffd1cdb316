//! Event repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the canonical ordered event sequence for one session.
//! - Assign fresh, monotonic, time-derived ids on `add`.
//!
//! # Invariants
//! - No two live events share an `id`.
//! - Store operations never fail; a missing id reports `false`.

use crate::model::event::{Event, EventId, NewEvent};
use chrono::Utc;
use log::{debug, warn};
use std::collections::HashSet;

/// Repository interface for event CRUD operations.
pub trait EventRepository {
    /// Returns events in insertion order.
    fn list(&self) -> &[Event];
    fn get(&self, id: EventId) -> Option<&Event>;
    /// Assigns a fresh id, appends and returns the stored event.
    fn add(&mut self, draft: NewEvent) -> Event;
    /// Replaces the event with the same id. Returns `false` when absent.
    fn update(&mut self, event: Event) -> bool;
    /// Removes the event with the given id. Returns `false` when absent.
    fn delete(&mut self, id: EventId) -> bool;
    /// Replaces the whole collection, e.g. with data-source results.
    fn replace_all(&mut self, events: Vec<Event>);

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Monotonic id source based on wall-clock milliseconds.
#[derive(Debug, Clone, Default)]
struct IdGenerator {
    last: EventId,
}

impl IdGenerator {
    /// Returns `None` once the counter has reached `EventId::MAX`.
    fn next(&mut self) -> Option<EventId> {
        let floor = self.last.checked_add(1)?;
        // Two adds within the same millisecond must still get distinct ids.
        self.last = Utc::now().timestamp_millis().max(floor);
        Some(self.last)
    }

    fn observe(&mut self, id: EventId) {
        self.last = self.last.max(id);
    }
}

/// Vec-backed event store owned by a single controller.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    events: Vec<Event>,
    ids: IdGenerator,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store seeded with existing events.
    pub fn with_events(events: Vec<Event>) -> Self {
        let mut repo = Self::new();
        repo.replace_all(events);
        repo
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|event| event.id == id)
    }

    /// Smallest positive id not held by a live event.
    fn smallest_unused_id(&self) -> EventId {
        let taken: HashSet<EventId> = self.events.iter().map(|event| event.id).collect();
        let mut id = 1;
        while taken.contains(&id) {
            id += 1;
        }
        id
    }
}

impl EventRepository for InMemoryEventRepository {
    fn list(&self) -> &[Event] {
        &self.events
    }

    fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    fn add(&mut self, draft: NewEvent) -> Event {
        let id = match self.ids.next() {
            Some(id) => id,
            None => {
                warn!("event=store_add module=store status=fallback reason=id_exhausted");
                self.smallest_unused_id()
            }
        };

        let event = draft.into_event(id);
        self.events.push(event.clone());
        debug!(
            "event=store_add module=store status=ok id={} total={}",
            id,
            self.events.len()
        );
        event
    }

    fn update(&mut self, event: Event) -> bool {
        let Some(index) = self.position(event.id) else {
            debug!(
                "event=store_update module=store status=skipped reason=not_found id={}",
                event.id
            );
            return false;
        };

        debug!("event=store_update module=store status=ok id={}", event.id);
        self.events[index] = event;
        true
    }

    fn delete(&mut self, id: EventId) -> bool {
        let Some(index) = self.position(id) else {
            debug!("event=store_delete module=store status=skipped reason=not_found id={id}");
            return false;
        };

        self.events.remove(index);
        debug!(
            "event=store_delete module=store status=ok id={} total={}",
            id,
            self.events.len()
        );
        true
    }

    fn replace_all(&mut self, events: Vec<Event>) {
        let mut seen = HashSet::with_capacity(events.len());
        let mut kept = Vec::with_capacity(events.len());
        for event in events {
            if !seen.insert(event.id) {
                warn!(
                    "event=store_seed module=store status=skipped reason=duplicate_id id={}",
                    event.id
                );
                continue;
            }
            self.ids.observe(event.id);
            kept.push(event);
        }

        self.events = kept;
        debug!(
            "event=store_seed module=store status=ok total={}",
            self.events.len()
        );
    }
}
