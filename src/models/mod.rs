//! Data models for the catalog

pub mod borrowable;
pub mod enums;
pub mod item;
pub mod record;

// Re-export commonly used types
pub use borrowable::{BorrowState, Borrowable};
pub use enums::{AgeRating, Genre};
pub use item::{Book, CatalogEntry, Disc, Item, ItemInfo, ItemKind, Periodical, UpdateItem};
pub use record::BorrowRecord;
