use chrono::NaiveDate;
use eventdesk_core::{
    Category, EditSession, Event, EventRepository, EventStatus, FieldChange,
    InMemoryEventRepository,
};

fn event(id: i64, name: &str) -> Event {
    Event {
        id,
        name: name.to_string(),
        description: "original".to_string(),
        category: Category::Work,
        date: NaiveDate::from_ymd_opt(2030, 4, 1).unwrap(),
        status: EventStatus::Upcoming,
    }
}

fn store() -> InMemoryEventRepository {
    InMemoryEventRepository::with_events(vec![event(1, "A"), event(2, "B")])
}

#[test]
fn begin_copies_current_values_into_draft() {
    let repo = store();
    let mut session = EditSession::Idle;

    assert_eq!(session.begin(repo.get(1).unwrap()), None);
    assert_eq!(session.editing_id(), Some(1));
    assert_eq!(session.draft(), repo.get(1));
}

#[test]
fn field_changes_touch_draft_only() {
    let repo = store();
    let mut session = EditSession::Idle;
    session.begin(repo.get(1).unwrap());

    assert!(session.apply(FieldChange::Name("A renamed".to_string())));
    assert!(session.apply(FieldChange::Category(Category::Leisure)));

    let draft = session.draft().unwrap();
    assert_eq!(draft.name, "A renamed");
    assert_eq!(draft.category, Category::Leisure);
    assert_eq!(repo.get(1).unwrap().name, "A");
}

#[test]
fn commit_writes_draft_and_returns_to_idle() {
    let mut repo = store();
    let mut session = EditSession::Idle;
    session.begin(repo.get(2).unwrap());
    session.apply(FieldChange::Status(EventStatus::Completed));
    session.apply(FieldChange::Date(NaiveDate::from_ymd_opt(2031, 1, 1).unwrap()));

    let committed = session.commit(&mut repo).unwrap();

    assert_eq!(session, EditSession::Idle);
    assert_eq!(repo.get(2), Some(&committed));
    assert_eq!(committed.status, EventStatus::Completed);
    assert_eq!(repo.list()[1].id, 2);
}

#[test]
fn cancel_discards_draft_without_update() {
    let mut repo = store();
    let before = repo.list().to_vec();
    let mut session = EditSession::Idle;
    session.begin(repo.get(1).unwrap());
    session.apply(FieldChange::Description("changed".to_string()));

    assert_eq!(session.cancel(), Some(1));
    assert!(!session.is_editing());
    assert_eq!(session.commit(&mut repo), None);
    assert_eq!(repo.list(), before.as_slice());
}

#[test]
fn beginning_second_edit_discards_first_without_commit() {
    let mut repo = store();
    let mut session = EditSession::Idle;
    session.begin(repo.get(1).unwrap());
    session.apply(FieldChange::Name("unsaved".to_string()));

    let discarded = session.begin(repo.get(2).unwrap());

    assert_eq!(discarded, Some(1));
    assert_eq!(session.editing_id(), Some(2));
    assert_eq!(repo.get(1).unwrap().name, "A");

    session.commit(&mut repo);
    assert_eq!(repo.get(1).unwrap().name, "A");
}

#[test]
fn commit_for_deleted_row_is_a_noop() {
    let mut repo = store();
    let mut session = EditSession::Idle;
    session.begin(repo.get(1).unwrap());
    repo.delete(1);

    assert_eq!(session.commit(&mut repo), None);
    assert_eq!(repo.len(), 1);
    assert!(repo.get(1).is_none());
}
