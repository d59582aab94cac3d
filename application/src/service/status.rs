use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::KernelError;

use crate::transfer::LibraryStatusDto;

#[async_trait::async_trait]
pub trait LibraryStatusService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn library_status(&self) -> error_stack::Result<LibraryStatusDto, KernelError> {
        let connection = self.database_connection().transact().await?;
        let status = LibraryStatusDto::new(
            connection.library_status(),
            connection.available_editions(),
        );
        tracing::debug!(summary = %status.summary, "library status");
        Ok(status)
    }
}

impl<T> LibraryStatusService for T where T: DependOnDatabaseConnection {}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::KernelError;

    use crate::service::{
        BorrowService, CreateBookService, CreateMemberService, LibraryStatusService,
        ReturnService,
    };
    use crate::transfer::{
        BookSelector, BorrowDto, CreateBookDto, CreateMemberDto, EditionDto, ReturnDto,
    };

    fn book(title: &str, amount: i32) -> CreateBookDto {
        CreateBookDto {
            title: title.to_string(),
            author: "Anon".to_string(),
            year: 2000,
            amount,
        }
    }

    #[tokio::test]
    async fn empty_library() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let status = db.library_status().await?;
        assert_eq!(
            status.summary,
            "Total Books: 0, Available Books: 0, Total Members: 0, Active Loans: 0"
        );
        assert!(status.editions.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn reflects_loans() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let lent = db.create_book(book("Lent", 1)).await?;
        let returned = db.create_book(book("Returned", 1)).await?;
        db.create_book(book("Shelved", 2)).await?;
        for id in [1, 2] {
            db.create_member(CreateMemberDto {
                name: format!("member-{id}"),
                id,
            })
            .await?;
        }

        db.borrow_book(BorrowDto {
            member_id: 1,
            book: BookSelector::Id(lent.id),
        })
        .await?;
        db.borrow_book(BorrowDto {
            member_id: 2,
            book: BookSelector::Id(returned.id),
        })
        .await?;
        db.return_book(ReturnDto {
            member_id: 2,
            book: BookSelector::Id(returned.id),
        })
        .await?;

        let status = db.library_status().await?;
        assert_eq!(status.total_books, 3);
        assert_eq!(status.available_books, 2);
        assert_eq!(status.total_members, 2);
        assert_eq!(status.active_loans, 1);
        assert_eq!(
            status.summary,
            "Total Books: 3, Available Books: 2, Total Members: 2, Active Loans: 1"
        );
        assert_eq!(
            status.editions,
            vec![
                EditionDto {
                    edition: "Returned by Anon (2000)".to_string(),
                    copies: 1
                },
                EditionDto {
                    edition: "Shelved by Anon (2000)".to_string(),
                    copies: 2
                },
            ]
        );
        Ok(())
    }
}
