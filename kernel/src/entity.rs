mod book;
mod loan;
mod member;
mod user;

pub use self::{book::*, loan::*, member::*, user::*};
