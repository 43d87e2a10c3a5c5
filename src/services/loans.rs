//! Loan management service

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::{
    clock::Clock,
    config::{LibraryConfig, LoanConfig},
    error::{AppError, AppResult},
    models::{
        borrowable::Borrowable,
        item::{CatalogEntry, Item},
        record::BorrowRecord,
    },
};

#[derive(Clone)]
pub struct LoansService {
    clock: Rc<dyn Clock>,
    location: String,
    loan_days: u32,
}

impl std::fmt::Debug for LoansService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoansService")
            .field("location", &self.location)
            .field("loan_days", &self.loan_days)
            .finish()
    }
}

impl LoansService {
    pub fn new(clock: Rc<dyn Clock>, library: &LibraryConfig, loans: &LoanConfig) -> Self {
        Self {
            clock,
            location: library.location.clone(),
            loan_days: loans.duration_days,
        }
    }

    pub fn loan_days(&self) -> u32 {
        self.loan_days
    }

    /// Borrow an item, returning the borrow timestamp
    pub fn borrow(&self, item: &mut Item) -> AppResult<DateTime<Utc>> {
        let id = item.id();
        let facet = facet_mut(item)?;
        let now = self.clock.now();
        if let Err(e) = facet.borrow(now) {
            tracing::warn!("Borrow refused for item id={} (code {}): {}", id, e.code() as u32, e);
            return Err(e);
        }
        tracing::info!("Item id={} borrowed at {}", id, now);
        Ok(now)
    }

    /// Return an item.
    ///
    /// The item always ends up available. A record is produced only when the
    /// call closes an actual loan.
    pub fn return_item(&self, item: &mut Item, borrower_name: &str) -> AppResult<Option<BorrowRecord>> {
        let (id, title) = (item.id(), item.title().to_string());
        let facet = facet_mut(item)?;
        let now = self.clock.now();

        let Some(borrowed_at) = facet.return_item(now) else {
            tracing::warn!("Item id={} returned without an open loan", id);
            return Ok(None);
        };

        tracing::info!("Item id={} returned by {} at {}", id, borrower_name, now);
        let record = BorrowRecord::new(id, title, borrower_name, borrowed_at, Some(now))
            .with_location(self.location.clone());
        Ok(Some(record))
    }

    /// Date the current loan is due back, if the item is out.
    ///
    /// A loan period that overflows the calendar has no due date.
    pub fn due_date(&self, item: &Item) -> Option<DateTime<Utc>> {
        let facet = item.borrowable()?;
        if facet.is_available {
            return None;
        }
        facet
            .borrow_date?
            .checked_add_signed(Duration::days(i64::from(self.loan_days)))
    }

    pub fn is_overdue(&self, item: &Item) -> bool {
        self.due_date(item)
            .map(|due| due < self.clock.now())
            .unwrap_or(false)
    }

    /// Fee owed for a completed loan, from the record's lateness and the item's rate
    pub fn assess_late_fee(&self, item: &Item, record: &BorrowRecord) -> Decimal {
        let days_late = record.days_late(self.loan_days);
        let fee = item.calculate_late_return_fee(days_late);
        tracing::debug!(
            "Late fee for item id={}: {} day(s) x {} = {}",
            item.id(),
            days_late,
            item.late_fee_per_day(),
            fee
        );
        fee
    }
}

fn facet_mut(item: &mut Item) -> AppResult<&mut Borrowable> {
    let (id, kind) = (item.id(), item.kind());
    item.borrowable_mut().ok_or_else(|| {
        AppError::NotBorrowable(format!("Item id={} is a {} and cannot be lent", id, kind))
    })
}
