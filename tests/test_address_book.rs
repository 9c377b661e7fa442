//! Integration tests for the address book.
//!
//! These tests drive the public API the way a host application would:
//! build records, store them, page through the book and remove entries.

use chrono::NaiveDate;
use contact_book::{AddressBook, BookError, Config, Record};

fn record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name, birthday).expect("valid record");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    record
}

fn five_record_book() -> AddressBook {
    let mut book = AddressBook::new();
    for (name, phone) in [
        ("Alice", "1000000001"),
        ("Bob", "1000000002"),
        ("Carol", "1000000003"),
        ("Dave", "1000000004"),
        ("Eve", "1000000005"),
    ] {
        book.add_record(record(name, &[phone], None));
    }
    book
}

/// Five records paged two at a time give three batches: 2, 2, 1.
#[test]
fn test_iterate_five_records_by_two() {
    let book = five_record_book();
    let batches: Vec<String> = book.iterate(2).unwrap().collect();

    assert_eq!(batches.len(), 3);
    assert_eq!(
        batches[0],
        "Alice: Contact name: Alice, phones: 1000000001Bob: Contact name: Bob, phones: 1000000002"
    );
    assert_eq!(
        batches[1],
        "Carol: Contact name: Carol, phones: 1000000003Dave: Contact name: Dave, phones: 1000000004"
    );
    assert_eq!(batches[2], "Eve: Contact name: Eve, phones: 1000000005");

    // Entries are concatenated directly, so each batch holds its entries' renderings
    for (batch, expected_entries) in batches.iter().zip([2, 2, 1]) {
        assert_eq!(batch.matches("Contact name: ").count(), expected_entries);
        assert!(!batch.contains('\n'));
    }
}

/// Batches cover every entry exactly once, in insertion order.
#[test]
fn test_iterate_preserves_insertion_order() {
    let book = five_record_book();
    let joined: String = book.iterate(3).unwrap().collect();
    let rendered: String = book
        .to_string()
        .lines()
        .collect::<Vec<_>>()
        .concat();
    assert_eq!(joined, rendered);
}

#[test]
fn test_iterate_with_configured_batch_size() {
    let book = five_record_book();
    let config = Config {
        batch_size: 4,
        ..Config::default()
    };
    let sizes: Vec<usize> = book
        .iterate_with(&config)
        .unwrap()
        .map(|batch| batch.matches("Contact name: ").count())
        .collect();
    assert_eq!(sizes, vec![4, 1]);
}

/// Adding two records with the same name keeps only the second.
#[test]
fn test_add_record_last_write_wins() {
    let mut book = AddressBook::new();
    assert!(book
        .add_record(record("Alice", &["1111111111"], None))
        .is_none());
    let replaced = book.add_record(record("Alice", &["2222222222"], Some("1990.01.01")));

    assert!(replaced.is_some());
    assert_eq!(book.len(), 1);
    let alice = book.find("Alice").unwrap();
    assert!(alice.find_phone("1111111111").is_none());
    assert!(alice.find_phone("2222222222").is_some());
    assert!(alice.birthday().is_some());
}

/// Deleting a present and an absent name are told apart without panicking.
#[test]
fn test_delete_reports_outcome() {
    let mut book = five_record_book();

    let deleted = book.delete("Carol");
    assert_eq!(deleted.unwrap().name().as_str(), "Carol");

    let missing = book.delete("Carol");
    assert_eq!(
        missing.unwrap_err(),
        BookError::RecordNotFound("Carol".to_string())
    );
    assert_eq!(book.len(), 4);
    assert_eq!(
        book.names().collect::<Vec<_>>(),
        vec!["Alice", "Bob", "Dave", "Eve"]
    );
}

/// Editing a record found in the book changes the stored record.
#[test]
fn test_edit_record_through_book() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", &["1111111111", "3333333333"], None));

    let alice = book.find_mut("Alice").unwrap();
    alice.edit_phone("1111111111", "2222222222").unwrap();
    alice.remove_phone("3333333333").unwrap();
    alice.set_birthday("1992.07.04").unwrap();

    assert_eq!(
        book.to_string(),
        "Alice: Contact name: Alice, phones: 2222222222Birthday: 1992-07-04\n"
    );
}

#[test]
fn test_upcoming_birthdays_across_new_year() {
    let mut book = AddressBook::new();
    book.add_record(record("Alice", &[], Some("2000.01.01")));
    book.add_record(record("Bob", &[], Some("2000.12.30")));
    book.add_record(record("Carol", &[], Some("2000.06.15")));

    let today = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    let names: Vec<&str> = book
        .upcoming_birthdays(today, 7)
        .into_iter()
        .map(|r| r.name().as_str())
        .collect();
    // Bob's birthday passed yesterday, so his next one is a year away
    assert_eq!(names, vec!["Alice"]);
}
