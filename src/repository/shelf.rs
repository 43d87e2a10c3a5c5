//! Homogeneous store for a single item kind

use crate::{
    error::{AppError, AppResult},
    models::item::CatalogEntry,
};

/// Typed collection holding only one concrete item kind, e.g. `Shelf<Book>`.
///
/// Independent of [`Catalog`](super::catalog::Catalog): a shelf owns its own
/// items and supports positional access only.
#[derive(Debug, Clone)]
pub struct Shelf<T: CatalogEntry> {
    items: Vec<T>,
}

impl<T: CatalogEntry> Default for Shelf<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: CatalogEntry> Shelf<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Item at `index`, in insertion order
    pub fn get_item(&self, index: usize) -> AppResult<&T> {
        self.items.get(index).ok_or_else(|| {
            AppError::NotFound(format!(
                "No item at index {} (shelf holds {})",
                index,
                self.items.len()
            ))
        })
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: CatalogEntry> FromIterator<T> for Shelf<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
