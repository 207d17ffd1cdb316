use chrono::NaiveDate;
use eventdesk_core::form::event_form::{DATE_IN_PAST, DATE_REQUIRED, NAME_REQUIRED};
use eventdesk_core::{
    Category, EventForm, EventRepository, EventStatus, FormField, InMemoryEventRepository,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

#[test]
fn empty_name_and_past_date_yield_two_messages_and_no_add() {
    let mut repo = InMemoryEventRepository::new();
    let mut form = EventForm {
        name: "   ".to_string(),
        description: "keep me".to_string(),
        category: Category::Personal,
        date: "2020-01-01".to_string(),
    };
    let entered = form.clone();

    let errors = form.submit(&mut repo, today()).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.message_for(FormField::Name), Some(NAME_REQUIRED));
    assert_eq!(errors.message_for(FormField::Date), Some(DATE_IN_PAST));
    assert!(repo.is_empty());
    assert_eq!(form, entered);
}

#[test]
fn missing_date_is_reported_as_required() {
    let mut repo = InMemoryEventRepository::new();
    let mut form = EventForm {
        name: "Trip".to_string(),
        ..EventForm::default()
    };

    let errors = form.submit(&mut repo, today()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message_for(FormField::Date), Some(DATE_REQUIRED));
    assert_eq!(errors.message_for(FormField::Name), None);
    assert!(errors.to_string().contains("date: Date is required"));
}

#[test]
fn valid_submission_adds_upcoming_event_and_resets_form() {
    let mut repo = InMemoryEventRepository::new();
    let mut form = EventForm {
        name: "  Trip   north ".to_string(),
        description: "ski weekend".to_string(),
        category: Category::Leisure,
        date: "2099-01-01".to_string(),
    };

    let event = form.submit(&mut repo, today()).unwrap();

    assert_eq!(event.name, "Trip north");
    assert_eq!(event.description, "ski weekend");
    assert_eq!(event.category, Category::Leisure);
    assert_eq!(event.status, EventStatus::Upcoming);
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
    assert_eq!(repo.list(), &[event]);
    assert_eq!(form, EventForm::default());
    assert_eq!(form.category, Category::Work);
}

#[test]
fn date_equal_to_today_is_accepted() {
    let mut repo = InMemoryEventRepository::new();
    let mut form = EventForm {
        name: "Today".to_string(),
        date: "2026-10-16".to_string(),
        ..EventForm::default()
    };

    assert!(form.submit(&mut repo, today()).is_ok());
    assert_eq!(repo.len(), 1);
}

#[test]
fn consecutive_submissions_get_distinct_ids() {
    let mut repo = InMemoryEventRepository::new();
    let mut form = EventForm::new();
    let mut ids = Vec::new();

    for name in ["one", "two", "three"] {
        form.name = name.to_string();
        form.date = "2030-01-01".to_string();
        ids.push(form.submit(&mut repo, today()).unwrap().id);
    }

    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}
