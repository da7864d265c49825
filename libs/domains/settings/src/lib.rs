//! Store Settings Domain
//!
//! The store configuration lives in a single document identified by
//! `type: "store"`. GET bootstraps the default document when none exists;
//! PUT upserts the provided fields and rejects empty update sets.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{SettingsError, SettingsResult};
pub use handlers::ApiDoc;
pub use models::{StoreSettings, StoreSettingsDocument, UpdateStoreSettings};
pub use mongodb::MongoSettingsRepository;
pub use repository::SettingsRepository;
pub use service::SettingsService;
