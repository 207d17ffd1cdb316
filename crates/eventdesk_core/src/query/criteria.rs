//! Event criteria and the pure query engine.
//!
//! # Responsibility
//! - Model name/category/status filters plus date sort order.
//! - Apply criteria to an event slice, returning a derived copy.
//!
//! # Invariants
//! - Sorting is stable: equal dates keep their input order.
//! - Same `(events, criteria)` always yields the same output.

use crate::model::event::{Category, Event, EventStatus, ModelError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ALL_KEYWORD: &str = "all";

/// Sort direction by event date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewestFirst => f.write_str("newest_first"),
            Self::OldestFirst => f.write_str("oldest_first"),
        }
    }
}

/// Category filter: every category, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

/// Status filter: every status, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus),
}

impl StatusFilter {
    pub fn matches(self, status: EventStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

/// Combined filter and sort parameters for the event table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventCriteria {
    /// Case-insensitive substring of `Event::name`. Empty matches all.
    pub name_query: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub sort_order: SortOrder,
}

impl EventCriteria {
    /// Returns whether one event passes every filter.
    pub fn matches(&self, event: &Event) -> bool {
        self.category.matches(event.category)
            && self.status.matches(event.status)
            && name_contains(&event.name, &self.name_query)
    }
}

/// Filters then stably sorts `events` by date according to `criteria`.
pub fn apply_criteria(events: &[Event], criteria: &EventCriteria) -> Vec<Event> {
    let mut rows: Vec<Event> = events
        .iter()
        .filter(|event| criteria.matches(event))
        .cloned()
        .collect();

    // `sort_by` is stable; reversing the comparator (not the output) keeps
    // equal dates in input order for both directions.
    match criteria.sort_order {
        SortOrder::OldestFirst => rows.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::NewestFirst => rows.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    rows
}

fn name_contains(name: &str, query: &str) -> bool {
    let needle = query.trim();
    needle.is_empty() || name.to_lowercase().contains(&needle.to_lowercase())
}
