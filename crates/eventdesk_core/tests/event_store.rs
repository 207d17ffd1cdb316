use chrono::NaiveDate;
use eventdesk_core::{
    Category, Event, EventRepository, EventStatus, InMemoryEventRepository, NewEvent,
};
use std::collections::HashSet;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seeded(id: i64, name: &str) -> Event {
    Event {
        id,
        name: name.to_string(),
        description: String::new(),
        category: Category::Personal,
        date: date(2030, 1, 1),
        status: EventStatus::Upcoming,
    }
}

fn assert_unique_ids(repo: &InMemoryEventRepository) {
    let ids: HashSet<i64> = repo.list().iter().map(|event| event.id).collect();
    assert_eq!(ids.len(), repo.len());
}

#[test]
fn add_to_empty_store_assigns_id_and_upcoming_status() {
    let mut repo = InMemoryEventRepository::new();
    assert!(repo.is_empty());

    let stored = repo.add(NewEvent::new("Trip", Category::Leisure, date(2099, 1, 1)));

    assert_eq!(stored.status, EventStatus::Upcoming);
    assert!(stored.id > 0);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.list()[0], stored);
}

#[test]
fn ids_stay_unique_across_mixed_operations() {
    let mut repo = InMemoryEventRepository::with_events(vec![seeded(1, "a"), seeded(2, "b")]);

    let mut added = Vec::new();
    for index in 0..50 {
        let event = repo.add(NewEvent::new(
            format!("bulk {index}"),
            Category::Work,
            date(2031, 1, 1),
        ));
        added.push(event);
        assert_unique_ids(&repo);
    }

    assert!(repo.delete(added[10].id));
    let mut renamed = added[20].clone();
    renamed.name = "renamed".to_string();
    assert!(repo.update(renamed));
    repo.add(NewEvent::new("after delete", Category::Work, date(2031, 2, 2)));

    assert_unique_ids(&repo);
    assert_eq!(repo.len(), 52);
}

#[test]
fn list_preserves_insertion_order() {
    let mut repo = InMemoryEventRepository::new();
    let late = repo.add(NewEvent::new("late", Category::Work, date(2040, 1, 1)));
    let early = repo.add(NewEvent::new("early", Category::Work, date(2030, 1, 1)));

    let ids: Vec<i64> = repo.list().iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);
}

#[test]
fn update_replaces_matching_event_in_place() {
    let mut repo = InMemoryEventRepository::with_events(vec![seeded(1, "a"), seeded(2, "b")]);

    let mut changed = seeded(1, "a2");
    changed.status = EventStatus::Completed;
    assert!(repo.update(changed.clone()));

    assert_eq!(repo.list()[0], changed);
    assert_eq!(repo.list()[1].name, "b");
}

#[test]
fn update_with_unknown_id_leaves_store_unchanged() {
    let mut repo = InMemoryEventRepository::with_events(vec![seeded(1, "a")]);
    let before = repo.list().to_vec();

    assert!(!repo.update(seeded(99, "ghost")));
    assert_eq!(repo.list(), before.as_slice());
}

#[test]
fn delete_removes_only_matching_id_and_ignores_unknown() {
    let mut repo = InMemoryEventRepository::with_events(vec![seeded(1, "a"), seeded(2, "b")]);

    assert!(!repo.delete(42));
    assert_eq!(repo.len(), 2);

    assert!(repo.delete(1));
    assert!(repo.get(1).is_none());
    assert_eq!(repo.list()[0].id, 2);
}

#[test]
fn replace_all_drops_duplicate_ids_and_advances_id_source() {
    let mut repo = InMemoryEventRepository::new();
    let far_future_id = i64::MAX - 100;
    repo.replace_all(vec![
        seeded(far_future_id, "first"),
        seeded(far_future_id, "duplicate"),
        seeded(3, "third"),
    ]);

    assert_eq!(repo.len(), 2);
    assert_eq!(repo.get(far_future_id).unwrap().name, "first");

    let added = repo.add(NewEvent::new("next", Category::Work, date(2030, 1, 1)));
    assert!(added.id > far_future_id);
    assert_unique_ids(&repo);
}

#[test]
fn add_after_seeding_max_id_still_returns_unique_ids() {
    let mut repo =
        InMemoryEventRepository::with_events(vec![seeded(i64::MAX, "max"), seeded(1, "one")]);

    let first = repo.add(NewEvent::new("first", Category::Work, date(2030, 1, 1)));
    let second = repo.add(NewEvent::new("second", Category::Work, date(2030, 1, 2)));

    assert_eq!(first.id, 2);
    assert_eq!(second.id, 3);
    assert_eq!(repo.len(), 4);
    assert_unique_ids(&repo);
}

#[test]
fn add_after_seeding_near_max_id_falls_back_once_exhausted() {
    let mut repo =
        InMemoryEventRepository::with_events(vec![seeded(i64::MAX - 1, "near max")]);

    let first = repo.add(NewEvent::new("first", Category::Work, date(2030, 1, 1)));
    let second = repo.add(NewEvent::new("second", Category::Work, date(2030, 1, 2)));

    assert_eq!(first.id, i64::MAX);
    assert_eq!(second.id, 1);
    assert_unique_ids(&repo);
}
