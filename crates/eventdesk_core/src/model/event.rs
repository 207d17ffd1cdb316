//! Event domain model.
//!
//! # Responsibility
//! - Define the `Event` record shared by the store, query and edit layers.
//! - Provide string conversions for category/status used by form inputs.
//!
//! # Invariants
//! - `id` is assigned once by the store and never changes afterwards.
//! - `status` defaults to `Upcoming` and is never transitioned automatically.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Store-assigned identifier. Derived from epoch milliseconds at creation.
pub type EventId = i64;

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Work,
    Personal,
    Leisure,
}

/// Closed set of event statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Scheduled and not yet happened. Assigned on creation.
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

/// Error for values outside the closed model sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownCategory(String),
    UnknownStatus(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(value) => {
                write!(f, "unknown category `{value}`; expected work|personal|leisure")
            }
            Self::UnknownStatus(value) => {
                write!(
                    f,
                    "unknown status `{value}`; expected upcoming|completed|cancelled"
                )
            }
        }
    }
}

impl Error for ModelError {}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Leisure];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Leisure => "leisure",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "leisure" => Ok(Self::Leisure),
            _ => Err(ModelError::UnknownCategory(value.to_string())),
        }
    }
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Upcoming,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ModelError::UnknownStatus(value.to_string())),
        }
    }
}

/// Canonical event record held by the store.
///
/// `date` travels as an ISO `YYYY-MM-DD` string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: EventStatus,
}

/// Event fields without an identity, accepted by the store's `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub status: EventStatus,
}

impl NewEvent {
    /// Creates an upcoming event with an empty description.
    pub fn new(name: impl Into<String>, category: Category, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            date,
            status: EventStatus::Upcoming,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Binds this draft to a store-assigned id.
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            date: self.date,
            status: self.status,
        }
    }
}
