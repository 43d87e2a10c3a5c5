//! Item (catalog entry) model and related types.
//!
//! Every catalog entry shares an [`ItemInfo`] header (caller-assigned id,
//! title, publication year). The lendable kinds, [`Book`] and [`Disc`],
//! additionally hold a [`Borrowable`] facet; [`Periodical`] is reference-only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::borrowable::Borrowable;
use super::enums::{AgeRating, Genre};
use crate::error::{AppError, AppResult};

/// Behaviour shared by every kind of catalog entry
pub trait CatalogEntry {
    fn kind(&self) -> ItemKind;

    fn info(&self) -> &ItemInfo;

    fn info_mut(&mut self) -> &mut ItemInfo;

    /// Human-readable one-line description
    fn display_info(&self) -> String;

    /// Late fee charged per day overdue
    fn late_fee_per_day(&self) -> Decimal {
        Decimal::new(50, 2)
    }

    fn calculate_late_return_fee(&self, days_late: u32) -> Decimal {
        self.late_fee_per_day() * Decimal::from(days_late)
    }
}

/// Item kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Book,
    Disc,
    Periodical,
}

impl ItemKind {
    pub fn is_borrowable(&self) -> bool {
        !matches!(self, ItemKind::Periodical)
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ItemKind::Book => "Book",
            ItemKind::Disc => "Disc",
            ItemKind::Periodical => "Periodical",
        };
        write!(f, "{}", label)
    }
}

/// Identity and descriptive metadata common to all items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ItemInfo {
    pub id: i32,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub publication_year: i32,
}

impl ItemInfo {
    pub fn new(id: i32, title: impl Into<String>, publication_year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            publication_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub info: ItemInfo,
    pub author: String,
    pub page_count: u32,
    pub genre: Genre,
    #[serde(default)]
    pub borrowable: Borrowable,
}

impl Book {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        publication_year: i32,
        author: impl Into<String>,
        page_count: u32,
        genre: Genre,
    ) -> Self {
        Self {
            info: ItemInfo::new(id, title, publication_year),
            author: author.into(),
            page_count,
            genre,
            borrowable: Borrowable::default(),
        }
    }
}

impl CatalogEntry for Book {
    fn kind(&self) -> ItemKind {
        ItemKind::Book
    }

    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ItemInfo {
        &mut self.info
    }

    fn display_info(&self) -> String {
        format!(
            "[Book] #{} \"{}\" ({}) by {}, {} pages, {} - {}",
            self.info.id,
            self.info.title,
            self.info.publication_year,
            self.author,
            self.page_count,
            self.genre,
            availability_label(&self.borrowable),
        )
    }

    fn late_fee_per_day(&self) -> Decimal {
        Decimal::new(75, 2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disc {
    pub info: ItemInfo,
    pub director: String,
    pub runtime_minutes: u32,
    pub age_rating: AgeRating,
    #[serde(default)]
    pub borrowable: Borrowable,
}

impl Disc {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        publication_year: i32,
        director: impl Into<String>,
        runtime_minutes: u32,
        age_rating: AgeRating,
    ) -> Self {
        Self {
            info: ItemInfo::new(id, title, publication_year),
            director: director.into(),
            runtime_minutes,
            age_rating,
            borrowable: Borrowable::default(),
        }
    }
}

impl CatalogEntry for Disc {
    fn kind(&self) -> ItemKind {
        ItemKind::Disc
    }

    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ItemInfo {
        &mut self.info
    }

    fn display_info(&self) -> String {
        format!(
            "[Disc] #{} \"{}\" ({}) directed by {}, {} min, rated {} - {}",
            self.info.id,
            self.info.title,
            self.info.publication_year,
            self.director,
            self.runtime_minutes,
            self.age_rating,
            availability_label(&self.borrowable),
        )
    }

    fn late_fee_per_day(&self) -> Decimal {
        Decimal::new(100, 2)
    }
}

/// Reference-only periodical issue; never lent out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periodical {
    pub info: ItemInfo,
    pub issue_number: u32,
    pub publisher: String,
}

impl Periodical {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        publication_year: i32,
        issue_number: u32,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            info: ItemInfo::new(id, title, publication_year),
            issue_number,
            publisher: publisher.into(),
        }
    }
}

impl CatalogEntry for Periodical {
    fn kind(&self) -> ItemKind {
        ItemKind::Periodical
    }

    fn info(&self) -> &ItemInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut ItemInfo {
        &mut self.info
    }

    fn display_info(&self) -> String {
        format!(
            "[Periodical] #{} \"{}\" ({}) issue {}, published by {} - Reference only",
            self.info.id,
            self.info.title,
            self.info.publication_year,
            self.issue_number,
            self.publisher,
        )
    }
}

fn availability_label(borrowable: &Borrowable) -> &'static str {
    if borrowable.is_available {
        "Available"
    } else {
        "Borrowed"
    }
}

/// Any catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Book(Book),
    Disc(Disc),
    Periodical(Periodical),
}

impl Item {
    pub fn id(&self) -> i32 {
        self.info().id
    }

    pub fn title(&self) -> &str {
        &self.info().title
    }

    /// Borrow state, or `None` for reference-only kinds
    pub fn borrowable(&self) -> Option<&Borrowable> {
        match self {
            Item::Book(book) => Some(&book.borrowable),
            Item::Disc(disc) => Some(&disc.borrowable),
            Item::Periodical(_) => None,
        }
    }

    pub fn borrowable_mut(&mut self) -> Option<&mut Borrowable> {
        match self {
            Item::Book(book) => Some(&mut book.borrowable),
            Item::Disc(disc) => Some(&mut disc.borrowable),
            Item::Periodical(_) => None,
        }
    }

    pub fn as_book(&self) -> Option<&Book> {
        match self {
            Item::Book(book) => Some(book),
            _ => None,
        }
    }

    pub fn as_disc(&self) -> Option<&Disc> {
        match self {
            Item::Disc(disc) => Some(disc),
            _ => None,
        }
    }

    pub fn as_periodical(&self) -> Option<&Periodical> {
        match self {
            Item::Periodical(periodical) => Some(periodical),
            _ => None,
        }
    }

    /// Apply a field patch in place.
    ///
    /// Fields belonging to another kind are checked before anything is
    /// written, so a rejected patch leaves the item unchanged. Field values
    /// are not validated here; [`Catalog`](crate::repository::Catalog) does
    /// that when input validation is on.
    pub fn apply(&mut self, patch: UpdateItem) -> AppResult<()> {
        let foreign = patch.foreign_fields(self.kind());
        if !foreign.is_empty() {
            return Err(AppError::Validation(format!(
                "Fields {} do not apply to a {}",
                foreign.join(", "),
                self.kind()
            )));
        }

        let info = self.info_mut();
        if let Some(title) = patch.title {
            info.title = title;
        }
        if let Some(year) = patch.publication_year {
            info.publication_year = year;
        }

        match self {
            Item::Book(book) => {
                if let Some(author) = patch.author {
                    book.author = author;
                }
                if let Some(pages) = patch.page_count {
                    book.page_count = pages;
                }
                if let Some(genre) = patch.genre {
                    book.genre = genre;
                }
            }
            Item::Disc(disc) => {
                if let Some(director) = patch.director {
                    disc.director = director;
                }
                if let Some(runtime) = patch.runtime_minutes {
                    disc.runtime_minutes = runtime;
                }
                if let Some(rating) = patch.age_rating {
                    disc.age_rating = rating;
                }
            }
            Item::Periodical(periodical) => {
                if let Some(issue) = patch.issue_number {
                    periodical.issue_number = issue;
                }
                if let Some(publisher) = patch.publisher {
                    periodical.publisher = publisher;
                }
            }
        }
        Ok(())
    }
}

impl CatalogEntry for Item {
    fn kind(&self) -> ItemKind {
        match self {
            Item::Book(book) => book.kind(),
            Item::Disc(disc) => disc.kind(),
            Item::Periodical(periodical) => periodical.kind(),
        }
    }

    fn info(&self) -> &ItemInfo {
        match self {
            Item::Book(book) => book.info(),
            Item::Disc(disc) => disc.info(),
            Item::Periodical(periodical) => periodical.info(),
        }
    }

    fn info_mut(&mut self) -> &mut ItemInfo {
        match self {
            Item::Book(book) => book.info_mut(),
            Item::Disc(disc) => disc.info_mut(),
            Item::Periodical(periodical) => periodical.info_mut(),
        }
    }

    fn display_info(&self) -> String {
        match self {
            Item::Book(book) => book.display_info(),
            Item::Disc(disc) => disc.display_info(),
            Item::Periodical(periodical) => periodical.display_info(),
        }
    }

    fn late_fee_per_day(&self) -> Decimal {
        match self {
            Item::Book(book) => book.late_fee_per_day(),
            Item::Disc(disc) => disc.late_fee_per_day(),
            Item::Periodical(periodical) => periodical.late_fee_per_day(),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_info())
    }
}

impl From<Book> for Item {
    fn from(book: Book) -> Self {
        Item::Book(book)
    }
}

impl From<Disc> for Item {
    fn from(disc: Disc) -> Self {
        Item::Disc(disc)
    }
}

impl From<Periodical> for Item {
    fn from(periodical: Periodical) -> Self {
        Item::Periodical(periodical)
    }
}

/// Update item request; `None` leaves the field as is
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    // Book
    pub author: Option<String>,
    pub page_count: Option<u32>,
    pub genre: Option<Genre>,
    // Disc
    pub director: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub age_rating: Option<AgeRating>,
    // Periodical
    pub issue_number: Option<u32>,
    pub publisher: Option<String>,
}

impl UpdateItem {
    /// Names of the set fields that belong to another item kind
    fn foreign_fields(&self, kind: ItemKind) -> Vec<&'static str> {
        let book = [
            ("author", self.author.is_some()),
            ("page_count", self.page_count.is_some()),
            ("genre", self.genre.is_some()),
        ];
        let disc = [
            ("director", self.director.is_some()),
            ("runtime_minutes", self.runtime_minutes.is_some()),
            ("age_rating", self.age_rating.is_some()),
        ];
        let periodical = [
            ("issue_number", self.issue_number.is_some()),
            ("publisher", self.publisher.is_some()),
        ];

        let mut foreign = Vec::new();
        if kind != ItemKind::Book {
            foreign.extend(book.iter().filter(|(_, set)| *set).map(|(name, _)| *name));
        }
        if kind != ItemKind::Disc {
            foreign.extend(disc.iter().filter(|(_, set)| *set).map(|(name, _)| *name));
        }
        if kind != ItemKind::Periodical {
            foreign.extend(periodical.iter().filter(|(_, set)| *set).map(|(name, _)| *name));
        }
        foreign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gatsby() -> Book {
        Book::new(1, "The Great Gatsby", 1925, "F. Scott Fitzgerald", 180, Genre::Classic)
    }

    fn inception() -> Disc {
        Disc::new(2, "Inception", 2010, "Christopher Nolan", 148, AgeRating::Pg13)
    }

    fn nat_geo() -> Periodical {
        Periodical::new(3, "National Geographic", 2023, 7, "National Geographic Society")
    }

    #[test]
    fn test_late_fees_by_kind() {
        assert_eq!(gatsby().calculate_late_return_fee(4), Decimal::new(300, 2));
        assert_eq!(inception().calculate_late_return_fee(4), Decimal::new(400, 2));
        assert_eq!(nat_geo().calculate_late_return_fee(4), Decimal::new(200, 2));
        assert_eq!(gatsby().calculate_late_return_fee(0), Decimal::ZERO);
    }

    #[test]
    fn test_item_dispatches_to_variant() {
        let item = Item::from(inception());
        assert_eq!(item.kind(), ItemKind::Disc);
        assert_eq!(item.late_fee_per_day(), Decimal::ONE);
        assert_eq!(item.to_string(), inception().display_info());
    }

    #[test]
    fn test_display_info() {
        let text = gatsby().display_info();
        assert!(text.starts_with("[Book] #1 \"The Great Gatsby\" (1925)"));
        assert!(text.contains("F. Scott Fitzgerald"));
        assert!(text.ends_with("Available"));

        assert!(nat_geo().display_info().contains("issue 7"));
    }

    #[test]
    fn test_periodical_has_no_facet() {
        let mut item = Item::from(nat_geo());
        assert!(item.borrowable().is_none());
        assert!(item.borrowable_mut().is_none());
        assert!(!item.kind().is_borrowable());
        assert!(Item::from(gatsby()).borrowable().is_some());
    }

    #[test]
    fn test_apply_patch() {
        let mut item = Item::from(gatsby());
        item.apply(UpdateItem {
            title: Some("Gatsby".to_string()),
            page_count: Some(200),
            ..Default::default()
        })
        .unwrap();

        let book = item.as_book().unwrap();
        assert_eq!(book.info.title, "Gatsby");
        assert_eq!(book.page_count, 200);
        assert_eq!(book.author, "F. Scott Fitzgerald");
    }

    #[test]
    fn test_apply_rejects_foreign_fields() {
        let mut item = Item::from(gatsby());
        let err = item
            .apply(UpdateItem {
                title: Some("Changed".to_string()),
                director: Some("Someone".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("director")));
        assert_eq!(item.title(), "The Great Gatsby");
    }

    #[test]
    fn test_update_item_title_length_rule() {
        let empty = UpdateItem {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(empty.validate().is_err());
        assert!(UpdateItem::default().validate().is_ok());
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(Item::from(nat_geo())).unwrap();
        assert_eq!(json["kind"], "periodical");
        assert_eq!(json["issue_number"], 7);
    }
}
