pub use crate::cli::{Console, command, run};
pub use crate::domain::{
    self,
    contact::{self, Contact},
    manager::{self, ContactManager},
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, MemStore, StoreLine, TxtStore};
