//! Catalog and borrowing scenario tests

use std::rc::Rc;

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use library_catalog::{
    clock::FixedClock,
    config::AppConfig,
    models::{AgeRating, Book, BorrowRecord, CatalogEntry, Disc, Genre, Item, Periodical},
    repository::{Catalog, Shelf},
    AppError, Services,
};

fn services_at(clock: &Rc<FixedClock>) -> Services {
    Services::new(&AppConfig::default(), clock.clone())
}

fn start() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 14, 30, 0).unwrap()
}

#[test]
fn test_gatsby_borrow_return_search() {
    let clock = Rc::new(FixedClock::new(start()));
    let mut services = services_at(&clock);
    services
        .catalog
        .add_item(Book::new(1, "The Great Gatsby", 1925, "F. Scott Fitzgerald", 180, Genre::Classic))
        .unwrap();

    let facet = services.borrow(1).unwrap().borrowable().unwrap().clone();
    assert!(!facet.is_available);
    assert_eq!(facet.borrow_date, Some(start()));

    clock.advance(Duration::days(2));
    services.return_item(1, "Daisy").unwrap();

    let item = services.catalog.search_by_title("gatsby").unwrap();
    let facet = item.borrowable().unwrap();
    assert!(facet.is_available);
    assert_eq!(facet.return_date, Some(start() + Duration::days(2)));

    assert_eq!(services.catalog.search_by_title("GREAT gAtSbY").map(Item::id), Some(1));
    assert!(services.catalog.search_by_title("Gatsby 2").is_none());
}

#[test]
fn test_reference_edit_visible_without_readding() {
    let mut catalog = Catalog::new();
    catalog
        .add_item(Disc::new(4, "Metropolis", 1927, "Fritz Lang", 153, AgeRating::Unrated))
        .unwrap();

    assert!(matches!(catalog.get_item_reference(5), Err(AppError::NotFound(_))));

    let key = catalog.get_item_reference(4).unwrap();
    catalog.item_mut(key).unwrap().info_mut().title = "Metropolis (Restored)".to_string();
    assert_eq!(catalog.len(), 1);

    let mut out = Vec::new();
    catalog.display_all_items(&mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("Metropolis (Restored)"));
    assert!(catalog.search_by_title("restored").is_some());
}

#[test]
fn test_title_update_round_trip_for_every_item() {
    let mut catalog = Catalog::new();
    catalog
        .add_item(Book::new(1, "Emma", 1815, "Jane Austen", 474, Genre::Classic))
        .unwrap();
    catalog
        .add_item(Disc::new(2, "Heat", 1995, "Michael Mann", 170, AgeRating::R))
        .unwrap();
    catalog
        .add_item(Periodical::new(3, "Wired", 2024, 9, "Conde Nast"))
        .unwrap();

    for id in 1..=3 {
        let original = catalog.find_by_id(id).unwrap().title().to_string();
        let update = catalog.update_item_title(id, "Temporary");
        assert!(update.success);
        let restore = catalog.update_item_title(id, update.old_title.unwrap());
        assert!(restore.success);
        assert_eq!(catalog.find_by_id(id).unwrap().title(), original);
    }
}

#[test]
fn test_history_is_caller_owned() {
    let clock = Rc::new(FixedClock::new(start()));
    let mut services = services_at(&clock);
    services
        .catalog
        .add_item(Disc::new(2, "Amelie", 2001, "Jean-Pierre Jeunet", 122, AgeRating::R))
        .unwrap();

    let mut history: Vec<BorrowRecord> = Vec::new();
    for borrower in ["Nino", "Amelie"] {
        services.borrow(2).unwrap();
        clock.advance(Duration::days(25));
        if let Some(record) = services.return_item(2, borrower).unwrap() {
            history.push(record);
        }
    }
    // returning an item that is already back adds nothing
    assert!(services.return_item(2, "Nobody").unwrap().is_none());

    assert_eq!(history.len(), 2);
    assert_eq!(history[1].borrower_name(), "Amelie");
    assert_eq!(history[1].borrow_date(), start() + Duration::days(25));

    let item = services.catalog.catalog().find_by_id(2).unwrap();
    let fees: Vec<Decimal> = history
        .iter()
        .map(|r| services.loans.assess_late_fee(item, r))
        .collect();
    assert_eq!(fees, vec![Decimal::new(400, 2), Decimal::new(400, 2)]);
}

#[test]
fn test_fee_schedule() {
    let book = Book::new(1, "A", 2000, "B", 10, Genre::Fiction);
    let disc = Disc::new(2, "C", 2000, "D", 90, AgeRating::G);
    let periodical = Periodical::new(3, "E", 2000, 1, "F");

    assert_eq!(book.calculate_late_return_fee(4), Decimal::new(3, 0));
    assert_eq!(disc.calculate_late_return_fee(4), Decimal::new(4, 0));
    assert_eq!(periodical.calculate_late_return_fee(4), Decimal::new(2, 0));
}

#[test]
fn test_typed_shelf_is_independent() {
    let mut shelf: Shelf<Book> = Shelf::new();
    shelf.add(Book::new(1, "Persuasion", 1817, "Jane Austen", 249, Genre::Classic));

    let catalog = Catalog::new();
    assert_eq!(shelf.count(), 1);
    assert!(catalog.is_empty());
    assert_eq!(shelf.get_item(0).unwrap().info.title, "Persuasion");
    assert!(shelf.get_item(1).is_err());
}
