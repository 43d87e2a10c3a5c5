//! Borrow history records

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// One completed (or open) borrow of an item.
///
/// Records are built by the caller after a return and kept in a history the
/// caller owns; the catalog never sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    item_id: i32,
    title: String,
    borrow_date: DateTime<Utc>,
    return_date: Option<DateTime<Utc>>,
    borrower_name: String,
    library_location: Option<String>,
}

impl BorrowRecord {
    pub fn new(
        item_id: i32,
        title: impl Into<String>,
        borrower_name: impl Into<String>,
        borrow_date: DateTime<Utc>,
        return_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            item_id,
            title: title.into(),
            borrow_date,
            return_date,
            borrower_name: borrower_name.into(),
            library_location: None,
        }
    }

    /// Set the branch the loan happened at. Only available while building.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.library_location = Some(location.into());
        self
    }

    pub fn item_id(&self) -> i32 {
        self.item_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn borrow_date(&self) -> DateTime<Utc> {
        self.borrow_date
    }

    pub fn return_date(&self) -> Option<DateTime<Utc>> {
        self.return_date
    }

    pub fn borrower_name(&self) -> &str {
        &self.borrower_name
    }

    pub fn library_location(&self) -> Option<&str> {
        self.library_location.as_deref()
    }

    /// Whole days past the due date at return, given the loan period.
    ///
    /// Open records, on-time returns and loan periods past the end of the
    /// calendar count as zero.
    pub fn days_late(&self, loan_days: u32) -> u32 {
        let Some(returned) = self.return_date else {
            return 0;
        };
        let Some(due) = self
            .borrow_date
            .checked_add_signed(Duration::days(i64::from(loan_days)))
        else {
            return 0;
        };
        let late = (returned - due).num_days();
        u32::try_from(late.max(0)).unwrap_or(u32::MAX)
    }
}
