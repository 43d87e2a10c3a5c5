//! Business logic services

pub mod catalog;
pub mod loans;

use std::rc::Rc;

use crate::{
    clock::Clock,
    config::AppConfig,
    error::AppResult,
    models::{record::BorrowRecord, Item},
};

/// Container for all services
#[derive(Debug, Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services from configuration and a time source
    pub fn new(config: &AppConfig, clock: Rc<dyn Clock>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(config.library.validate_input),
            loans: loans::LoansService::new(clock, &config.library, &config.loans),
        }
    }

    /// Borrow the catalog item with `id`
    pub fn borrow(&mut self, id: i32) -> AppResult<&Item> {
        let item = self.catalog.find_mut(id)?;
        self.loans.borrow(item)?;
        Ok(item)
    }

    /// Return the catalog item with `id` on behalf of `borrower_name`
    pub fn return_item(&mut self, id: i32, borrower_name: &str) -> AppResult<Option<BorrowRecord>> {
        let item = self.catalog.find_mut(id)?;
        self.loans.return_item(item, borrower_name)
    }
}
