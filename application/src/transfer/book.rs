use uuid::Uuid;

use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub amount: i32,
    pub total: i32,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            year,
            amount,
            total,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year: year.into(),
            amount: amount.into(),
            total: total.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: Uuid,
}

pub struct FindBookDto {
    pub title: String,
}

pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub amount: i32,
}

pub struct DeleteBookDto {
    pub id: Uuid,
}
