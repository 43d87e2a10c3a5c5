//! Catalog management service

use std::io::Write;

use crate::{
    error::AppResult,
    models::item::{CatalogEntry, Item, UpdateItem},
    repository::{Catalog, ItemKey, TitleUpdate},
};

#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    pub fn new(validate_input: bool) -> Self {
        Self {
            catalog: Catalog::with_validation(validate_input),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Add an item to the catalog
    pub fn add_item(&mut self, item: impl Into<Item>) -> AppResult<ItemKey> {
        let item = item.into();
        let (id, kind) = (item.id(), item.kind());
        match self.catalog.add_item(item) {
            Ok(key) => {
                tracing::info!("Catalog add: {} id={} at slot {}", kind, id, key.index());
                Ok(key)
            }
            Err(e) => {
                tracing::warn!("Catalog add refused for id={}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Search items by title (case-insensitive substring)
    pub fn search_by_title(&self, query: &str) -> Option<&Item> {
        let found = self.catalog.search_by_title(query);
        tracing::debug!(
            "Catalog search '{}': {}",
            query,
            found.map_or_else(|| "no match".to_string(), |item| format!("id={}", item.id()))
        );
        found
    }

    /// Rename an item, returning the previous title on success
    pub fn update_item_title(&mut self, id: i32, new_title: impl Into<String>) -> TitleUpdate {
        let new_title = new_title.into();
        let update = self.catalog.update_item_title(id, new_title.clone());
        if update.success {
            tracing::info!(
                "Catalog rename id={}: '{}' -> '{}'",
                id,
                update.old_title.as_deref().unwrap_or_default(),
                new_title
            );
        } else {
            tracing::warn!("Catalog rename failed: no item with id={}", id);
        }
        update
    }

    /// Update fields of an existing item
    pub fn update_item(&mut self, id: i32, patch: UpdateItem) -> AppResult<&Item> {
        tracing::info!("Catalog update id={}: {:?}", id, patch);
        self.catalog.update_item(id, patch)
    }

    /// Resolve an id to a stable key
    pub fn get_item_reference(&self, id: i32) -> AppResult<ItemKey> {
        self.catalog.get_item_reference(id).inspect_err(|e| {
            tracing::warn!("Catalog reference lookup failed: {}", e);
        })
    }

    pub fn item(&self, key: ItemKey) -> Option<&Item> {
        self.catalog.item(key)
    }

    pub fn item_mut(&mut self, key: ItemKey) -> Option<&mut Item> {
        self.catalog.item_mut(key)
    }

    pub fn find_mut(&mut self, id: i32) -> AppResult<&mut Item> {
        self.catalog.find_mut(id)
    }

    /// Print every item's description
    pub fn display_all_items<W: Write>(&self, out: &mut W) -> AppResult<()> {
        tracing::debug!("Catalog display: {} items", self.catalog.len());
        self.catalog.display_all_items(out)
    }
}
