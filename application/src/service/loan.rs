use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::prelude::entity::{BookId, MemberId};
use kernel::prelude::registry::Library;
use kernel::KernelError;

use crate::transfer::{
    BookSelector, BorrowDto, BorrowResultDto, GetMemberLoansDto, LoanDto, ReturnDto,
    ReturnResultDto,
};

#[async_trait::async_trait]
pub trait GetLoanService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn get_all_loans(&self) -> error_stack::Result<Vec<LoanDto>, KernelError> {
        let connection = self.database_connection().transact().await?;
        Ok(connection.loans().into_iter().map(LoanDto::from).collect())
    }

    async fn get_member_loans(
        &self,
        dto: GetMemberLoansDto,
    ) -> error_stack::Result<Vec<LoanDto>, KernelError> {
        let connection = self.database_connection().transact().await?;
        Ok(connection
            .member_loans(&MemberId::new(dto.member_id))
            .into_iter()
            .map(LoanDto::from)
            .collect())
    }
}

impl<T> GetLoanService for T where T: DependOnDatabaseConnection {}

#[async_trait::async_trait]
pub trait BorrowService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn borrow_book(&self, dto: BorrowDto) -> error_stack::Result<BorrowResultDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let member_id = MemberId::new(dto.member_id);
        let book_id = match dto.book {
            BookSelector::Id(id) => BookId::new(id),
            BookSelector::Title(title) => book_to_borrow(&connection, title.trim())?,
        };
        let outcome = BorrowResultDto::from(connection.borrow_book(&member_id, &book_id)?);
        match &outcome {
            BorrowResultDto::Borrowed(loan) => {
                tracing::info!(member = %member_id, book = %book_id, loan = %loan.id, "book borrowed")
            }
            BorrowResultDto::Unavailable => {
                tracing::info!(member = %member_id, book = %book_id, "no copy left to borrow")
            }
        }

        Ok(outcome)
    }
}

impl<T> BorrowService for T where T: DependOnDatabaseConnection {}

#[async_trait::async_trait]
pub trait ReturnService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn return_book(&self, dto: ReturnDto) -> error_stack::Result<ReturnResultDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let member_id = MemberId::new(dto.member_id);
        let book_id = match dto.book {
            BookSelector::Id(id) => BookId::new(id),
            BookSelector::Title(title) => book_to_return(&connection, &member_id, title.trim())?,
        };
        let outcome = ReturnResultDto::from(connection.return_book(&member_id, &book_id)?);
        match &outcome {
            ReturnResultDto::Returned(loan) => {
                tracing::info!(member = %member_id, book = %book_id, loan = %loan.id, "book returned")
            }
            ReturnResultDto::NoMatchingLoan => {
                tracing::info!(member = %member_id, book = %book_id, "no active loan to return")
            }
        }

        Ok(outcome)
    }
}

impl<T> ReturnService for T where T: DependOnDatabaseConnection {}

/// First copy with `title` that is on the shelf, else the first with `title`.
fn book_to_borrow(library: &Library, title: &str) -> error_stack::Result<BookId, KernelError> {
    let books = library.find_books_by_title(title);
    books
        .iter()
        .find(|book| book.is_available())
        .or_else(|| books.first())
        .map(|book| book.id().clone())
        .ok_or_else(|| missing_title(title))
}

/// Book of the member's first active loan with `title`, else the first book with `title`.
fn book_to_return(
    library: &Library,
    member_id: &MemberId,
    title: &str,
) -> error_stack::Result<BookId, KernelError> {
    let titled = library
        .find_books_by_title(title)
        .into_iter()
        .map(|book| book.id().clone())
        .collect::<Vec<BookId>>();
    let loaned = library
        .member_loans(member_id)
        .into_iter()
        .filter(|loan| loan.is_active())
        .find(|loan| titled.contains(loan.book_id()))
        .map(|loan| loan.book_id().clone());
    loaned
        .or_else(|| titled.first().cloned())
        .ok_or_else(|| missing_title(title))
}

fn missing_title(title: &str) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("No book titled `{title}`."))
}
