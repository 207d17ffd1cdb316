//! Form submission handler for new events.

use crate::model::event::{Category, Event, EventStatus, NewEvent};
use crate::repo::event_repo::EventRepository;
use chrono::NaiveDate;
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const NAME_REQUIRED: &str = "Event name is required";
pub const DATE_REQUIRED: &str = "Date is required";
pub const DATE_INVALID: &str = "Date must be a valid date (YYYY-MM-DD)";
pub const DATE_IN_PAST: &str = "Date must be in the future";

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Date,
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Date => f.write_str("date"),
        }
    }
}

/// One validation message bound to its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// All validation failures of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message shown beside `field`, if it is invalid.
    pub fn message_for(&self, field: FormField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl Error for FormErrors {}

/// Raw input of the "add event" form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventForm {
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Date text as typed, expected as `YYYY-MM-DD`.
    pub date: String,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks input against `today` and returns the draft to store.
    pub fn validate(&self, today: NaiveDate) -> Result<NewEvent, FormErrors> {
        let mut errors = Vec::new();

        let name = normalize_name(&self.name);
        if name.is_empty() {
            errors.push(FieldError {
                field: FormField::Name,
                message: NAME_REQUIRED,
            });
        }

        let date = match parse_form_date(&self.date, today) {
            Ok(date) => Some(date),
            Err(message) => {
                errors.push(FieldError {
                    field: FormField::Date,
                    message,
                });
                None
            }
        };

        match date {
            Some(date) if errors.is_empty() => Ok(NewEvent {
                name,
                description: self.description.clone(),
                category: self.category,
                date,
                status: EventStatus::Upcoming,
            }),
            _ => Err(FormErrors { errors }),
        }
    }

    /// Validates, adds the event to `repo` and clears the form.
    ///
    /// On failure nothing is stored and the entered values stay as they were.
    pub fn submit<R: EventRepository + ?Sized>(
        &mut self,
        repo: &mut R,
        today: NaiveDate,
    ) -> Result<Event, FormErrors> {
        let draft = match self.validate(today) {
            Ok(draft) => draft,
            Err(errors) => {
                debug!(
                    "event=form_submit module=form status=rejected errors={}",
                    errors.len()
                );
                return Err(errors);
            }
        };

        let event = repo.add(draft);
        self.reset();
        info!(
            "event=form_submit module=form status=ok id={} category={}",
            event.id, event.category
        );
        Ok(event)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Trims the name and collapses inner whitespace runs to one space.
pub fn normalize_name(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

fn parse_form_date(value: &str, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DATE_REQUIRED);
    }
    if !ISO_DATE_RE.is_match(trimmed) {
        return Err(DATE_INVALID);
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| DATE_INVALID)?;
    if date < today {
        return Err(DATE_IN_PAST);
    }
    Ok(date)
}
