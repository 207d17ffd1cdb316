//! Event data sources.

use crate::model::event::{Category, Event, EventStatus};
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::time::Duration;

pub const LOAD_ERROR_MESSAGE: &str = "Error fetching events";
pub const DEFAULT_FIXTURE_DELAY: Duration = Duration::from_millis(1000);

/// Initial fetch failure. Displayed as a single top-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    detail: String,
}

impl LoadError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Diagnostic detail for logs. Never shown to the user.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// The user-facing message.
    pub fn message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(LOAD_ERROR_MESSAGE)
    }
}

impl Error for LoadError {}

/// Asynchronous provider of the starting event sequence.
pub trait EventSource {
    fn fetch_events(&self) -> impl Future<Output = Result<Vec<Event>, LoadError>> + Send;
}

/// Source with no events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySource;

impl EventSource for EmptySource {
    async fn fetch_events(&self) -> Result<Vec<Event>, LoadError> {
        Ok(Vec::new())
    }
}

/// Source yielding the bundled sample events after a simulated delay.
#[derive(Debug, Clone, Copy)]
pub struct FixtureSource {
    delay: Duration,
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new(DEFAULT_FIXTURE_DELAY)
    }
}

impl FixtureSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl EventSource for FixtureSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, LoadError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        fixture_events()
    }
}

/// Source whose fetch always fails.
#[derive(Debug, Clone, Default)]
pub struct FailingSource {
    detail: String,
}

impl FailingSource {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl EventSource for FailingSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, LoadError> {
        Err(LoadError::new(self.detail.clone()))
    }
}

/// The five sample events served by `FixtureSource`.
pub fn fixture_events() -> Result<Vec<Event>, LoadError> {
    let rows = [
        (1, "Event 1", "A fun event", Category::Leisure, (2024, 10, 20)),
        (2, "Event 2", "Another exciting event", Category::Leisure, (2024, 11, 15)),
        (3, "Event 3", "A thrilling adventure", Category::Personal, (2024, 12, 1)),
        (4, "Event 4", "Networking opportunity", Category::Work, (2024, 10, 25)),
        (5, "Event 5", "A cultural experience", Category::Personal, (2024, 11, 10)),
    ];

    rows.into_iter()
        .map(|(id, name, description, category, (year, month, day))| {
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| LoadError::new(format!("invalid fixture date for id {id}")))?;
            Ok(Event {
                id,
                name: name.to_string(),
                description: description.to_string(),
                category,
                date,
                status: EventStatus::Upcoming,
            })
        })
        .collect()
}
