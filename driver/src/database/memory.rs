use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::prelude::registry::Library;
use kernel::KernelError;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Handle to a registry held in memory for the lifetime of the process.
///
/// Clones share the same registry. A transaction holds the registry lock
/// until it is dropped, so operations run one at a time.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    library: Arc<Mutex<Library>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(library: Library) -> Self {
        Self {
            library: Arc::new(Mutex::new(library)),
        }
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for InMemoryDatabase {
    type Transaction = InMemoryTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = Arc::clone(&self.library).lock_owned().await;
        tracing::trace!("registry locked");
        Ok(InMemoryTransaction(guard))
    }
}

pub struct InMemoryTransaction(OwnedMutexGuard<Library>);

impl Deref for InMemoryTransaction {
    type Target = Library;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for InMemoryTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Transaction for InMemoryTransaction {}
