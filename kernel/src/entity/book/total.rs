use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Copies the book was catalogued with.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookTotal(i32);

impl BookTotal {
    pub fn new(total: impl Into<i32>) -> Self {
        Self(total.into())
    }
}
