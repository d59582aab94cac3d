use error_stack::Report;
use uuid::Uuid;

use crate::entity::{
    Book, BookAmount, BookAuthor, BookId, BookTitle, BookYear, Member, MemberId, MemberName,
};
use crate::KernelError;

/// Validated construction of catalogue entries and members.
///
/// Nothing built here is registered anywhere; member-id uniqueness is only
/// checked once the member is added to a `Library`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibraryFactory;

impl LibraryFactory {
    pub fn create_book(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<i32>,
        amount: impl Into<i32>,
    ) -> error_stack::Result<Book, KernelError> {
        Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::new(title),
            BookAuthor::new(author),
            BookYear::new(year),
            BookAmount::new(amount),
        )
    }

    pub fn create_member(
        &self,
        name: impl Into<String>,
        id: impl Into<i32>,
    ) -> error_stack::Result<Member, KernelError> {
        let name = name.into();
        let id = id.into();
        if name.is_empty() {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable("Member name must not be empty."));
        }
        if id <= 0 {
            return Err(Report::new(KernelError::InvalidArgument)
                .attach_printable("Member ID must be positive."));
        }
        Ok(Member::new(MemberId::new(id), MemberName::new(name)))
    }
}
