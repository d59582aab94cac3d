use std::ops::Deref;
use std::sync::Arc;

use driver::database::InMemoryDatabase;
use vodca::References;

/// State shared by every route. Clones point at the same registry.
#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new(database: InMemoryDatabase) -> Self {
        Self(Arc::new(Handler::init(database)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    database: InMemoryDatabase,
}

impl Handler {
    pub fn init(database: InMemoryDatabase) -> Self {
        Self { database }
    }
}
