use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::prelude::entity::BookId;
use kernel::prelude::factory::LibraryFactory;
use kernel::KernelError;

use crate::transfer::{BookDto, CreateBookDto, DeleteBookDto, FindBookDto, GetBookDto};

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let connection = self.database_connection().transact().await?;
        let book = connection.find_book(&BookId::new(dto.id));
        Ok(book.map(BookDto::from))
    }

    async fn get_all_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let connection = self.database_connection().transact().await?;
        Ok(connection.books().into_iter().map(BookDto::from).collect())
    }

    async fn find_books_by_title(
        &self,
        dto: FindBookDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let connection = self.database_connection().transact().await?;
        Ok(connection
            .find_books_by_title(dto.title.trim())
            .into_iter()
            .map(BookDto::from)
            .collect())
    }
}

impl<T> GetBookService for T where T: DependOnDatabaseConnection {}

#[async_trait::async_trait]
pub trait CreateBookService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let book = LibraryFactory.create_book(
            dto.title.trim(),
            dto.author.trim(),
            dto.year,
            dto.amount,
        )?;
        let created = BookDto::from(book.clone());

        let mut connection = self.database_connection().transact().await?;
        connection.add_book(book);
        tracing::info!(id = %created.id, title = %created.title, copies = created.amount, "book added");

        Ok(created)
    }
}

impl<T> CreateBookService for T where T: DependOnDatabaseConnection {}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnDatabaseConnection {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let removed = connection.remove_book(&id).ok_or_else(|| {
            Report::new(KernelError::NotFound).attach_printable(format!("No book with ID {id}."))
        })?;
        tracing::info!(%id, "book removed");

        Ok(BookDto::from(removed))
    }
}

impl<T> DeleteBookService for T where T: DependOnDatabaseConnection {}

#[cfg(test)]
mod test {
    use driver::database::InMemoryDatabase;
    use kernel::KernelError;

    use crate::service::{CreateBookService, DeleteBookService, GetBookService};
    use crate::transfer::{CreateBookDto, DeleteBookDto, FindBookDto, GetBookDto};

    fn dune(amount: i32) -> CreateBookDto {
        CreateBookDto {
            title: "  Dune ".to_string(),
            author: "Frank Herbert".to_string(),
            year: 1965,
            amount,
        }
    }

    #[tokio::test]
    async fn create_find_and_delete() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let created = db.create_book(dune(2)).await?;
        assert_eq!(created.title, "Dune");
        assert_eq!(created.total, 2);

        let found = db.get_book(GetBookDto { id: created.id }).await?;
        assert_eq!(found, Some(created.clone()));
        let titled = db
            .find_books_by_title(FindBookDto {
                title: "Dune".to_string(),
            })
            .await?;
        assert_eq!(titled, vec![created.clone()]);

        let removed = db.delete_book(DeleteBookDto { id: created.id }).await?;
        assert_eq!(removed, created);
        assert!(db.get_all_books().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn invalid_book_is_not_added() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let result = db
            .create_book(CreateBookDto {
                title: "   ".to_string(),
                ..dune(1)
            })
            .await;
        assert_eq!(
            result.err().map(|report| *report.current_context()),
            Some(KernelError::InvalidArgument)
        );
        assert!(db.get_all_books().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_missing_book() -> error_stack::Result<(), KernelError> {
        let db = InMemoryDatabase::new();
        let result = db
            .delete_book(DeleteBookDto {
                id: uuid::Uuid::new_v4(),
            })
            .await;
        assert_eq!(
            result.err().map(|report| *report.current_context()),
            Some(KernelError::NotFound)
        );
        Ok(())
    }
}
