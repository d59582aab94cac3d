mod id;
mod loaned_at;
mod outcome;
mod returned_at;

pub use self::{id::*, loaned_at::*, outcome::*, returned_at::*};
use destructure::Destructure;
use time::OffsetDateTime;
use uuid::Uuid;
use vodca::References;

use crate::entity::{Book, BookId, MemberId};

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Loan {
    id: LoanId,
    member_id: MemberId,
    book_id: BookId,
    loaned_at: LoanedAt,
    returned_at: Option<ReturnedAt>,
}

impl Loan {
    pub fn new(member_id: MemberId, book_id: BookId) -> Self {
        Self {
            id: LoanId::new(Uuid::new_v4()),
            member_id,
            book_id,
            loaned_at: LoanedAt::new(OffsetDateTime::now_utc()),
            returned_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }

    /// Completes the loan and checks the book back in.
    ///
    /// A completed loan stays completed: a second call, or a call with a book
    /// other than the loaned one, changes nothing and returns `false`.
    pub fn mark_as_returned(&mut self, book: &mut Book) -> bool {
        if !self.is_active() || book.id() != &self.book_id {
            return false;
        }
        self.returned_at = Some(ReturnedAt::new(OffsetDateTime::now_utc()));
        book.check_in();
        true
    }
}
