use kernel::prelude::registry::{
    DestructEditionAvailability, DestructLibraryStatus, EditionAvailability, LibraryStatus,
};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LibraryStatusDto {
    pub total_books: usize,
    pub available_books: usize,
    pub total_members: usize,
    pub active_loans: usize,
    pub summary: String,
    pub editions: Vec<EditionDto>,
}

impl LibraryStatusDto {
    pub fn new(status: LibraryStatus, editions: Vec<EditionAvailability>) -> Self {
        let summary = status.to_string();
        let DestructLibraryStatus {
            total_books,
            available_books,
            total_members,
            active_loans,
        } = status.into_destruct();
        Self {
            total_books,
            available_books,
            total_members,
            active_loans,
            summary,
            editions: editions.into_iter().map(EditionDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EditionDto {
    pub edition: String,
    pub copies: i32,
}

impl From<EditionAvailability> for EditionDto {
    fn from(value: EditionAvailability) -> Self {
        let DestructEditionAvailability { edition, copies } = value.into_destruct();
        Self { edition, copies }
    }
}
