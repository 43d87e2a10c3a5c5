//! Catalog storage: an append-only arena of items

use std::io::Write;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::item::{CatalogEntry, Item, UpdateItem},
};

/// Stable handle to an item slot in a [`Catalog`].
///
/// The catalog never removes or reorders items, so a key stays valid for the
/// lifetime of the catalog that issued it, across any number of appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey(usize);

impl ItemKey {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Outcome of a title rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleUpdate {
    pub success: bool,
    /// Title before the rename; `None` when nothing was renamed
    pub old_title: Option<String>,
}

/// Ordered, heterogeneous collection of catalog items.
///
/// Ids are assigned by callers. Lookups by id or title are linear scans in
/// insertion order and the first match wins.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    validate_input: bool,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog that rejects empty titles and duplicate ids on insert
    pub fn with_validation(validate_input: bool) -> Self {
        Self {
            items: Vec::new(),
            validate_input,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Lendable items currently on the shelf
    pub fn available_items(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(|item| item.borrowable().is_some_and(|b| b.is_available))
    }

    /// Append an item
    pub fn add_item(&mut self, item: impl Into<Item>) -> AppResult<ItemKey> {
        let item = item.into();
        if self.validate_input {
            item.info().validate()?;
            if self.position(item.id()).is_some() {
                return Err(AppError::Conflict(format!(
                    "Item with id {} already exists",
                    item.id()
                )));
            }
        }
        self.items.push(item);
        Ok(ItemKey(self.items.len() - 1))
    }

    /// First item whose title contains `query`, ignoring case
    pub fn search_by_title(&self, query: &str) -> Option<&Item> {
        self.search_key_by_title(query).and_then(|key| self.item(key))
    }

    pub fn search_key_by_title(&self, query: &str) -> Option<ItemKey> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .position(|item| item.title().to_lowercase().contains(&needle))
            .map(ItemKey)
    }

    pub fn find_by_id(&self, id: i32) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Rename the first item with `id`, handing back its previous title
    pub fn update_item_title(&mut self, id: i32, new_title: impl Into<String>) -> TitleUpdate {
        let new_title = new_title.into();
        let index = match self.position(id) {
            Some(index) if !(self.validate_input && new_title.is_empty()) => index,
            _ => {
                return TitleUpdate {
                    success: false,
                    old_title: None,
                }
            }
        };

        let info = self.items[index].info_mut();
        let old_title = std::mem::replace(&mut info.title, new_title);
        TitleUpdate {
            success: true,
            old_title: Some(old_title),
        }
    }

    /// Apply a field patch to the first item with `id`
    pub fn update_item(&mut self, id: i32, patch: UpdateItem) -> AppResult<&Item> {
        if self.validate_input {
            patch.validate()?;
        }
        let item = self.find_mut(id)?;
        item.apply(patch)?;
        Ok(item)
    }

    /// Key of the first item with `id`, for in-place edits through [`Catalog::item_mut`]
    pub fn get_item_reference(&self, id: i32) -> AppResult<ItemKey> {
        self.position(id)
            .map(ItemKey)
            .ok_or_else(|| not_found(id))
    }

    pub fn item(&self, key: ItemKey) -> Option<&Item> {
        self.items.get(key.0)
    }

    pub fn item_mut(&mut self, key: ItemKey) -> Option<&mut Item> {
        self.items.get_mut(key.0)
    }

    /// Mutable access to the first item with `id`
    pub fn find_mut(&mut self, id: i32) -> AppResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| not_found(id))
    }

    /// Write every item's description, one per line, in insertion order
    pub fn display_all_items<W: Write>(&self, out: &mut W) -> AppResult<()> {
        for item in &self.items {
            writeln!(out, "{}", item.display_info())?;
        }
        Ok(())
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Item with id {} not found", id))
}
