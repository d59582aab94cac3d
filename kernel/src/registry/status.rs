use std::fmt::Display;

use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::Book;

/// Counts derived from the registry at the time of the call.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct LibraryStatus {
    total_books: usize,
    available_books: usize,
    total_members: usize,
    active_loans: usize,
}

impl LibraryStatus {
    pub fn new(
        total_books: usize,
        available_books: usize,
        total_members: usize,
        active_loans: usize,
    ) -> Self {
        Self {
            total_books,
            available_books,
            total_members,
            active_loans,
        }
    }
}

impl Display for LibraryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total Books: {}, Available Books: {}, Total Members: {}, Active Loans: {}",
            self.total_books, self.available_books, self.total_members, self.active_loans
        )
    }
}

/// Copies on the shelf for one edition, summed over every catalogue entry
/// sharing its title, author and year.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct EditionAvailability {
    edition: String,
    copies: i32,
}

impl EditionAvailability {
    pub fn new(edition: impl Into<String>, copies: impl Into<i32>) -> Self {
        Self {
            edition: edition.into(),
            copies: copies.into(),
        }
    }

    /// Groups the available books by edition, in first-seen order.
    /// The summed count saturates at `i32::MAX`.
    pub fn collect<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<Self> {
        let mut editions: Vec<Self> = Vec::new();
        for book in books.into_iter().filter(|book| book.is_available()) {
            let edition = book.edition();
            let copies: i32 = *book.amount().as_ref();
            match editions.iter_mut().find(|known| known.edition == edition) {
                Some(known) => known.copies = known.copies.saturating_add(copies),
                None => editions.push(Self::new(edition, copies)),
            }
        }
        editions
    }
}

impl Display for EditionAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - Copies: {}", self.edition, self.copies)
    }
}
