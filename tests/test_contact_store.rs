//! Behaviour of the contact store through its public API.

mod mocks;

use contact_book::{
    validate_email, validate_phone, ContactError, ContactStore, ContactUpdate, DeleteOutcome,
    NewContact,
};
use mocks::SteppingClock;

fn store() -> ContactStore {
    ContactStore::with_clock(SteppingClock::new())
}

#[test]
fn test_phone_validation_by_digit_count() {
    assert!(validate_phone("555-1234").is_none());
    assert!(validate_phone("1-2-3-4-5-6-7-8-9").is_none());
    assert!(validate_phone("+1 234 567 890 123 456").is_none());

    assert_eq!(validate_phone("(555) 123-4567").as_deref(), Some("5551234567"));
    assert_eq!(
        validate_phone("+44 20 7946 0958 12").as_deref(),
        Some("44207946095812")
    );
}

#[test]
fn test_email_validation() {
    assert!(validate_email(Some("")));
    assert!(validate_email(None));
    assert!(!validate_email(Some("a@b")));
    assert!(validate_email(Some("a@b.com")));
}

#[test]
fn test_add_normalizes_names_to_one_key() {
    let mut store = store();
    store.add(NewContact::new(" alice ", "5550001111")).unwrap();

    let result = store.add(NewContact::new("Alice", "5550002222"));
    assert_eq!(
        result,
        Err(ContactError::DuplicateContact("Alice".to_string()))
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("ALICE").unwrap().phone().as_str(), "5550001111");
}

#[test]
fn test_add_stores_canonical_record() {
    let mut store = store();
    store
        .add(
            NewContact::new("Bob", "555-123-4567")
                .with_email("")
                .with_address("")
                .with_group(""),
        )
        .unwrap();

    let record = store.get("Bob").unwrap();
    assert_eq!(record.phone().as_str(), "5551234567");
    assert_eq!(record.group(), "Other");
    assert!(!record.created_at().is_empty());
    assert_eq!(record.created_at(), record.updated_at());
}

#[test]
fn test_failed_add_leaves_store_unchanged() {
    let mut store = store();
    store.add(NewContact::new("Bob", "5551234567")).unwrap();
    let before = store.entries().to_vec();

    assert_eq!(
        store.add(NewContact::new("", "5551234567")),
        Err(ContactError::EmptyName)
    );
    assert!(matches!(
        store.add(NewContact::new("Carol", "12")),
        Err(ContactError::InvalidPhone(_))
    ));
    assert!(matches!(
        store.add(NewContact::new("Carol", "5550009999").with_email("carol@")),
        Err(ContactError::InvalidEmail(_))
    ));

    assert_eq!(store.entries(), before.as_slice());
}

#[test]
fn test_update_with_invalid_phone_keeps_phone_and_advances_timestamp() {
    let mut store = store();
    store.add(NewContact::new("Bob", "555-123-4567")).unwrap();
    let before = store.get("Bob").unwrap().clone();

    let outcome = store
        .update("Bob", ContactUpdate::default().with_phone("123"))
        .unwrap();

    assert_eq!(outcome.record.phone().as_str(), "5551234567");
    assert!(outcome.record.updated_at() > before.updated_at());
    assert_eq!(outcome.record.created_at(), before.created_at());
}

#[test]
fn test_update_applies_valid_fields_independently() {
    let mut store = store();
    store
        .add(NewContact::new("Bob", "5551234567").with_email("bob@old.com"))
        .unwrap();

    let outcome = store
        .update(
            "bob",
            ContactUpdate::default()
                .with_phone("+1 (555) 999-0000")
                .with_email("bob@new.com")
                .with_address("   "),
        )
        .unwrap();

    assert!(outcome.rejected.is_empty());
    let record = store.get("Bob").unwrap();
    assert_eq!(record.phone().as_str(), "15559990000");
    assert_eq!(record.email().unwrap().as_str(), "bob@new.com");
    assert!(record.address().is_none());
}

#[test]
fn test_update_unknown_contact() {
    let mut store = store();
    assert!(matches!(
        store.update("Nobody", ContactUpdate::default()),
        Err(ContactError::ContactNotFound(_))
    ));
}

#[test]
fn test_delete_cancel_then_confirm() {
    let mut store = store();
    store.add(NewContact::new("Bob", "5551234567")).unwrap();

    assert_eq!(store.delete("Bob", false), Ok(DeleteOutcome::Cancelled));
    assert!(store.contains("Bob"));

    let outcome = store.delete("Bob", true).unwrap();
    assert!(matches!(outcome, DeleteOutcome::Deleted(record) if record.phone().as_str() == "5551234567"));
    assert!(!store.contains("Bob"));
}

#[test]
fn test_statistics_by_group() {
    let mut store = store();
    store
        .add(NewContact::new("Ann", "5550000001").with_group("Work"))
        .unwrap();
    store
        .add(NewContact::new("Ben", "5550000002").with_group("Work"))
        .unwrap();
    store
        .add(NewContact::new("Cat", "5550000003").with_group("Family"))
        .unwrap();

    let stats = store.statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.count_for("Work"), 2);
    assert_eq!(stats.count_for("Family"), 1);
    assert_eq!(stats.by_group.len(), 2);
}

#[test]
fn test_search_matches_phone_digits_in_order() {
    let mut store = store();
    store.add(NewContact::new("Ann", "555-000-0001")).unwrap();
    store.add(NewContact::new("Ben", "555-000-0002")).unwrap();
    store.add(NewContact::new("Cat", "444-000-0003")).unwrap();

    let names: Vec<_> = store
        .search("555")
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect();
    assert_eq!(names, vec!["Ann", "Ben"]);
}
