//! Products Domain
//!
//! This module provides a complete domain implementation for managing catalog
//! products using MongoDB, including the listing query engine (filtering,
//! sorting, pagination).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, page envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, query parameters
//! └─────────────┘
//! ```
//!
//! The `query` module holds the pure query engine: it turns a [`models::ProductQuery`]
//! into a MongoDB filter document and a sort document, and computes pagination
//! arithmetic. It performs no I/O, so it is tested exhaustively in isolation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     mongodb::MongoProductRepository,
//!     service::ProductService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a MongoDB client
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("fashion_catalog");
//!
//! // Create a repository and service
//! let repository = MongoProductRepository::new(&db);
//! let service = ProductService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    Color, CreateProduct, Product, ProductDocument, ProductPage, ProductQuery, UpdateProduct,
};
pub use mongodb::MongoProductRepository;
pub use query::ProductSort;
pub use repository::ProductRepository;
pub use service::ProductService;
