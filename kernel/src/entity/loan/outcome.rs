use crate::entity::Loan;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BorrowOutcome {
    Borrowed(Loan),
    /// No copy left. Nothing was recorded.
    Unavailable,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ReturnOutcome {
    Returned(Loan),
    /// The member holds no active loan for the book.
    NoMatchingLoan,
}
