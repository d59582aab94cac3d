mod id;
mod name;

pub use self::{id::*, name::*};
use std::fmt::Display;

use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::{Book, BorrowOutcome, Loan, ReturnOutcome};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct Member {
    id: MemberId,
    name: MemberName,
}

impl Member {
    /// Unvalidated. Outside the kernel members come from `LibraryFactory`.
    pub(crate) fn new(id: MemberId, name: MemberName) -> Self {
        Self { id, name }
    }

    /// Opens a loan when a copy is available. An unavailable book is left
    /// untouched and no loan is created.
    pub fn borrow_book(&self, book: &mut Book) -> BorrowOutcome {
        if !book.check_out() {
            return BorrowOutcome::Unavailable;
        }
        BorrowOutcome::Borrowed(Loan::new(self.id.clone(), book.id().clone()))
    }

    /// Completes the first active loan this member holds for `book`.
    pub fn return_book<'a, I>(&self, loans: I, book: &mut Book) -> ReturnOutcome
    where
        I: IntoIterator<Item = &'a mut Loan>,
    {
        let found = loans.into_iter().find(|loan| {
            loan.is_active() && loan.member_id() == &self.id && loan.book_id() == book.id()
        });
        match found {
            Some(loan) => {
                loan.mark_as_returned(book);
                ReturnOutcome::Returned(loan.clone())
            }
            None => ReturnOutcome::NoMatchingLoan,
        }
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &String = self.name.as_ref();
        write!(f, "{} ({})", name, self.id)
    }
}

#[cfg(test)]
mod test {
    use error_stack::Report;
    use uuid::Uuid;

    use crate::entity::{
        Book, BookAmount, BookAuthor, BookId, BookTitle, BookYear, BorrowOutcome, Loan, Member,
        MemberId, MemberName, ReturnOutcome,
    };
    use crate::KernelError;

    fn book(amount: i32) -> error_stack::Result<Book, KernelError> {
        Book::new(
            BookId::new(Uuid::new_v4()),
            BookTitle::new("Neuromancer"),
            BookAuthor::new("William Gibson"),
            BookYear::new(1984),
            BookAmount::new(amount),
        )
    }

    fn member() -> Member {
        Member::new(MemberId::new(7), MemberName::new("Case"))
    }

    #[test]
    fn borrow_unavailable_book_changes_nothing() -> Result<(), Report<KernelError>> {
        let member = member();
        let mut book = book(0)?;
        let before = book.clone();

        assert_eq!(member.borrow_book(&mut book), BorrowOutcome::Unavailable);
        assert_eq!(book, before);
        Ok(())
    }

    #[test]
    fn borrow_then_return_round_trip() -> Result<(), Report<KernelError>> {
        let member = member();
        let mut book = book(1)?;
        let mut loans: Vec<Loan> = Vec::new();

        let BorrowOutcome::Borrowed(loan) = member.borrow_book(&mut book) else {
            panic!("book with one copy must be lendable");
        };
        loans.push(loan);
        assert!(!book.is_available());

        let outcome = member.return_book(loans.iter_mut(), &mut book);
        assert!(matches!(outcome, ReturnOutcome::Returned(_)));

        assert!(book.is_available());
        assert_eq!(book.amount(), &BookAmount::new(1));
        assert_eq!(loans.len(), 1);
        assert!(loans[0].returned_at().is_some());
        Ok(())
    }

    #[test]
    fn return_matches_book_identity_not_title() -> Result<(), Report<KernelError>> {
        let member = member();
        let mut borrowed = book(1)?;
        let mut same_title = book(1)?;
        let mut loans: Vec<Loan> = Vec::new();

        if let BorrowOutcome::Borrowed(loan) = member.borrow_book(&mut borrowed) {
            loans.push(loan);
        }

        let outcome = member.return_book(loans.iter_mut(), &mut same_title);
        assert_eq!(outcome, ReturnOutcome::NoMatchingLoan);
        assert!(loans[0].is_active());
        assert_eq!(same_title.amount(), &BookAmount::new(1));
        Ok(())
    }

    #[test]
    fn return_skips_completed_and_foreign_loans() -> Result<(), Report<KernelError>> {
        let member = member();
        let other = Member::new(MemberId::new(8), MemberName::new("Molly"));
        let mut book = book(3)?;
        let mut loans: Vec<Loan> = Vec::new();

        for borrower in [&member, &other, &member] {
            if let BorrowOutcome::Borrowed(loan) = borrower.borrow_book(&mut book) {
                loans.push(loan);
            }
        }
        assert_eq!(loans.len(), 3);

        assert!(matches!(
            member.return_book(loans.iter_mut(), &mut book),
            ReturnOutcome::Returned(_)
        ));
        assert!(matches!(
            member.return_book(loans.iter_mut(), &mut book),
            ReturnOutcome::Returned(_)
        ));
        assert_eq!(
            member.return_book(loans.iter_mut(), &mut book),
            ReturnOutcome::NoMatchingLoan
        );

        assert!(!loans[0].is_active());
        assert!(loans[1].is_active());
        assert!(!loans[2].is_active());
        assert_eq!(book.amount(), &BookAmount::new(2));
        Ok(())
    }

    #[test]
    fn display() {
        assert_eq!(member().to_string(), "Case (7)");
    }
}
