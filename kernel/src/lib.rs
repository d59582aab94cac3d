pub use crate::error::*;

mod database;
mod entity;
mod error;
mod factory;
mod registry;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
    pub mod factory {
        pub use crate::factory::*;
    }
    pub mod registry {
        pub use crate::registry::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod database {
        pub use crate::database::*;
    }
}
