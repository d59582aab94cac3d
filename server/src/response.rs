mod book;
mod loan;
mod member;
mod status;
mod user;

pub use self::{book::*, loan::*, member::*, status::*, user::*};
