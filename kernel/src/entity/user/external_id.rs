use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Identifier presented at login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct UserExternalId(String);

impl UserExternalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}
