//! Checkout state held by lendable items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Availability of a lendable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorrowState {
    Available,
    Borrowed,
}

/// Borrow/return state machine attached to books and discs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrowable {
    pub borrow_date: Option<DateTime<Utc>>,
    pub return_date: Option<DateTime<Utc>>,
    pub is_available: bool,
}

impl Default for Borrowable {
    fn default() -> Self {
        Self {
            borrow_date: None,
            return_date: None,
            is_available: true,
        }
    }
}

impl Borrowable {
    pub fn state(&self) -> BorrowState {
        if self.is_available {
            BorrowState::Available
        } else {
            BorrowState::Borrowed
        }
    }

    /// Check the item out at `now`.
    ///
    /// Fails with [`AppError::ItemNotAvailable`] when already borrowed; the
    /// existing `borrow_date` is left untouched in that case.
    pub fn borrow(&mut self, now: DateTime<Utc>) -> AppResult<()> {
        if !self.is_available {
            return Err(AppError::ItemNotAvailable(
                "Item is already borrowed".to_string(),
            ));
        }
        self.borrow_date = Some(now);
        self.is_available = false;
        Ok(())
    }

    /// Check the item back in at `now`.
    ///
    /// Always succeeds and always stamps `return_date`, even when the item
    /// was never borrowed. Returns the borrow date of the loan this call
    /// closed, or `None` if the item was already available.
    pub fn return_item(&mut self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let closed = match self.state() {
            BorrowState::Borrowed => self.borrow_date,
            BorrowState::Available => None,
        };
        self.return_date = Some(now);
        self.is_available = true;
        closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_borrow_then_return() {
        let mut facet = Borrowable::default();
        assert_eq!(facet.state(), BorrowState::Available);

        facet.borrow(at(1)).unwrap();
        assert!(!facet.is_available);
        assert_eq!(facet.borrow_date, Some(at(1)));

        let closed = facet.return_item(at(4));
        assert_eq!(closed, Some(at(1)));
        assert!(facet.is_available);
        assert_eq!(facet.return_date, Some(at(4)));
    }

    #[test]
    fn test_double_borrow_is_refused() {
        let mut facet = Borrowable::default();
        facet.borrow(at(1)).unwrap();

        let err = facet.borrow(at(2)).unwrap_err();
        assert!(matches!(err, AppError::ItemNotAvailable(_)));
        assert!(!facet.is_available);
        assert_eq!(facet.borrow_date, Some(at(1)));
    }

    #[test]
    fn test_return_without_borrow() {
        let mut facet = Borrowable::default();
        let now = at(3) + Duration::hours(2);

        assert_eq!(facet.return_item(now), None);
        assert!(facet.is_available);
        assert_eq!(facet.return_date, Some(now));
        assert_eq!(facet.borrow_date, None);
    }
}
