//! Categories Domain
//!
//! CRUD for catalog categories. Follows the same handlers → service →
//! repository layering as the products domain; the one business rule is slug
//! uniqueness, enforced at create time (and backed by a unique index).

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::{Category, CategoryDocument, CreateCategory};
pub use mongodb::MongoCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
