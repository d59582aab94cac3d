mod amount;
mod author;
mod id;
mod title;
mod total;
mod year;

pub use self::{amount::*, author::*, id::*, title::*, total::*, year::*};
use std::fmt::Display;

use destructure::Destructure;
use error_stack::Report;
use vodca::References;

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    year: BookYear,
    amount: BookAmount,
    total: BookTotal,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        year: BookYear,
        amount: BookAmount,
    ) -> error_stack::Result<Self, KernelError> {
        let title_value: &String = title.as_ref();
        let author_value: &String = author.as_ref();
        if title_value.is_empty() || author_value.is_empty() {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable("Book title and author must not be empty."));
        }
        let copies: i32 = *amount.as_ref();
        if copies < 0 {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable("Book amount cannot be negative."));
        }
        Ok(Self {
            id,
            title,
            author,
            year,
            amount,
            total: BookTotal::new(copies),
        })
    }

    /// Takes one copy off the shelf. Returns `false` without touching the
    /// counter when no copy is left.
    pub fn check_out(&mut self) -> bool {
        let copies: i32 = *self.amount.as_ref();
        if copies <= 0 {
            return false;
        }
        self.amount = BookAmount::new(copies - 1);
        true
    }

    /// Puts one copy back. Not bounded by the catalogued total.
    pub fn check_in(&mut self) {
        let copies: i32 = *self.amount.as_ref();
        self.amount = BookAmount::new(copies.saturating_add(1));
    }

    pub fn is_available(&self) -> bool {
        *self.amount.as_ref() > 0
    }

    /// More copies on the shelf than were ever catalogued.
    pub fn is_over_returned(&self) -> bool {
        let copies: i32 = *self.amount.as_ref();
        let total: i32 = *self.total.as_ref();
        copies > total
    }

    pub fn edition(&self) -> String {
        let title: &String = self.title.as_ref();
        let author: &String = self.author.as_ref();
        let year: i32 = *self.year.as_ref();
        format!("{title} by {author} ({year})")
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let copies: i32 = *self.amount.as_ref();
        write!(f, "{} - Copies: {}", self.edition(), copies)
    }
}
