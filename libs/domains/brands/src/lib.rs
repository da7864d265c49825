//! Brands Domain
//!
//! Full CRUD for catalog brands, in the same handlers → service → repository
//! layering as the other domains.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{BrandError, BrandResult};
pub use handlers::ApiDoc;
pub use models::{Brand, BrandDocument, CreateBrand, UpdateBrand};
pub use mongodb::MongoBrandRepository;
pub use repository::BrandRepository;
pub use service::BrandService;
