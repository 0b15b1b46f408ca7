//! In-memory administrative backend for a quiz-hosting platform.
//!
//! The crate is the validation and data-integrity layer only: user
//! registration/login and owner-scoped quiz CRUD over a single [`DataStore`].
//! There is no transport and no persistence; a server layer is expected to own
//! a `DataStore` and call into [`auth`] and [`quiz`] with it.

pub mod auth;
pub mod error;
pub mod quiz;
pub mod store;
pub mod validation;

pub use auth::repo::UserId;
pub use error::{Error, ErrorKind};
pub use quiz::repo::QuizId;
pub use store::DataStore;
