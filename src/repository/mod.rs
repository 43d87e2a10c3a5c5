//! Repository layer for in-memory item storage

pub mod catalog;
pub mod shelf;

pub use catalog::{Catalog, ItemKey, TitleUpdate};
pub use shelf::Shelf;
