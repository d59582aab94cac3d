mod status;

pub use self::status::*;
use error_stack::Report;

use crate::entity::{
    Book, BookId, BorrowOutcome, Loan, LoanId, Member, MemberId, ReturnOutcome, User,
};
use crate::KernelError;

/// Every book, member, loan and login record known to one library.
///
/// Loans are owned here only; a member's loans are a view filtered by member
/// id. Collections keep insertion order and every getter hands out a copy.
/// Removing a book or member leaves loans that point at it in place.
#[derive(Debug, Default, Clone)]
pub struct Library {
    books: Vec<Book>,
    members: Vec<Member>,
    loans: Vec<Loan>,
    users: Vec<User>,
}

impl Library {
    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn remove_book(&mut self, id: &BookId) -> Option<Book> {
        let index = self.books.iter().position(|book| book.id() == id)?;
        Some(self.books.remove(index))
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.clone()
    }

    pub fn find_book(&self, id: &BookId) -> Option<Book> {
        self.books.iter().find(|book| book.id() == id).cloned()
    }

    pub fn find_books_by_title(&self, title: &str) -> Vec<Book> {
        self.books
            .iter()
            .filter(|book| {
                let candidate: &String = book.title().as_ref();
                candidate == title
            })
            .cloned()
            .collect()
    }

    pub fn add_member(&mut self, member: Member) -> error_stack::Result<(), KernelError> {
        if !self.is_member_id_unique(member.id()) {
            return Err(Report::new(KernelError::UniquenessViolation)
                .attach_printable(format!("Member ID {} must be unique.", member.id())));
        }
        self.members.push(member);
        Ok(())
    }

    pub fn is_member_id_unique(&self, id: &MemberId) -> bool {
        self.members.iter().all(|member| member.id() != id)
    }

    pub fn remove_member(&mut self, id: &MemberId) -> Option<Member> {
        let index = self.members.iter().position(|member| member.id() == id)?;
        Some(self.members.remove(index))
    }

    pub fn members(&self) -> Vec<Member> {
        self.members.clone()
    }

    pub fn find_member(&self, id: &MemberId) -> Option<Member> {
        self.members.iter().find(|member| member.id() == id).cloned()
    }

    pub fn add_loan(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    pub fn remove_loan(&mut self, id: &LoanId) -> Option<Loan> {
        let index = self.loans.iter().position(|loan| loan.id() == id)?;
        Some(self.loans.remove(index))
    }

    pub fn loans(&self) -> Vec<Loan> {
        self.loans.clone()
    }

    pub fn member_loans(&self, id: &MemberId) -> Vec<Loan> {
        self.loans
            .iter()
            .filter(|loan| loan.member_id() == id)
            .cloned()
            .collect()
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Lends `book_id` to `member_id` and records the loan.
    pub fn borrow_book(
        &mut self,
        member_id: &MemberId,
        book_id: &BookId,
    ) -> error_stack::Result<BorrowOutcome, KernelError> {
        let member = self
            .members
            .iter()
            .find(|member| member.id() == member_id)
            .ok_or_else(|| missing_member(member_id))?;
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id() == book_id)
            .ok_or_else(|| missing_book(book_id))?;

        let outcome = member.borrow_book(book);
        if let BorrowOutcome::Borrowed(loan) = &outcome {
            self.loans.push(loan.clone());
        }
        Ok(outcome)
    }

    pub fn return_book(
        &mut self,
        member_id: &MemberId,
        book_id: &BookId,
    ) -> error_stack::Result<ReturnOutcome, KernelError> {
        let member = self
            .members
            .iter()
            .find(|member| member.id() == member_id)
            .ok_or_else(|| missing_member(member_id))?;
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id() == book_id)
            .ok_or_else(|| missing_book(book_id))?;

        Ok(member.return_book(self.loans.iter_mut(), book))
    }

    pub fn library_status(&self) -> LibraryStatus {
        LibraryStatus::new(
            self.books.len(),
            self.books.iter().filter(|book| book.is_available()).count(),
            self.members.len(),
            self.loans.iter().filter(|loan| loan.is_active()).count(),
        )
    }

    pub fn available_editions(&self) -> Vec<EditionAvailability> {
        EditionAvailability::collect(&self.books)
    }
}

fn missing_member(id: &MemberId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("No member with ID {id}."))
}

fn missing_book(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("No book with ID {id}."))
}
