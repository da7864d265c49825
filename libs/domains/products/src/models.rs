use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Default page number for listing queries
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size for listing queries
pub const DEFAULT_PAGE_SIZE: i64 = 20;
/// Maximum page size accepted by the listing endpoint
pub const MAX_PAGE_SIZE: i64 = 100;

/// Color variant of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Color {
    /// Display name (e.g. "Navy Blue")
    pub name: String,
    /// Hex color value (e.g. "#001f3f")
    pub hex: String,
}

/// Product as stored in MongoDB.
///
/// The `_id` is a BSON ObjectId; it is `None` before the first insert and
/// assigned by the repository. API responses use [`Product`] instead, which
/// exposes the id as its 24-char hex string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub brand: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product entity as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (ObjectId hex string)
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Current price
    pub price: f64,
    /// Price before discount, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Top-level category slug
    pub category: String,
    /// Optional subcategory slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Brand name
    pub brand: String,
    /// Available sizes
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Available color variants
    #[serde(default)]
    pub colors: Vec<Color>,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Units in stock
    #[serde(default)]
    pub stock: i32,
    /// Whether the product is featured on the storefront
    #[serde(default)]
    pub featured: bool,
    /// Average review rating
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews
    #[serde(default)]
    pub review_count: i32,
    /// Tags for search
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0.0))]
    pub original_price: Option<f64>,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(length(max = 100))]
    pub subcategory: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub images: Vec<String>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for partially updating an existing product
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub original_price: Option<f64>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub subcategory: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub brand: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<Color>>,
    pub images: Option<Vec<String>>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Query parameters for listing products.
///
/// Every filter field is optional; an absent or empty value applies no
/// constraint. `sort` is deliberately a free-form string so unknown values
/// fall back to the default ordering instead of rejecting the request.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    pub page: i64,
    /// Number of products per page (max 100)
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// Filter by category slug
    pub category: Option<String>,
    /// Filter by subcategory slug
    pub subcategory: Option<String>,
    /// Filter by brand name
    pub brand: Option<String>,
    /// Minimum price (inclusive)
    pub min_price: Option<f64>,
    /// Maximum price (inclusive)
    pub max_price: Option<f64>,
    /// Case-insensitive substring search over name, description and tags
    pub search: Option<String>,
    /// Filter by featured flag
    pub featured: Option<bool>,
    /// Sort key: price_asc, price_desc, newest, popular (default: newest)
    pub sort: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            category: None,
            subcategory: None,
            brand: None,
            min_price: None,
            max_price: None,
            search: None,
            featured: None,
            sort: None,
        }
    }
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Paginated listing envelope
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Products on this page
    pub data: Vec<Product>,
    /// Total number of products matching the filter
    pub total: u64,
    /// Current page number (1-based)
    pub page: i64,
    /// Page size used for this listing
    pub page_size: i64,
    /// Total number of pages
    pub total_pages: u64,
}

impl ProductDocument {
    /// Create a new document from a CreateProduct DTO.
    ///
    /// The id stays `None` until the repository inserts the document.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: input.name,
            description: input.description,
            price: input.price,
            original_price: input.original_price,
            category: input.category,
            subcategory: input.subcategory,
            brand: input.brand,
            sizes: input.sizes,
            colors: input.colors,
            images: input.images,
            stock: input.stock,
            featured: input.featured,
            rating: 0.0,
            review_count: 0,
            tags: input.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(original_price) = update.original_price {
            self.original_price = Some(original_price);
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(subcategory) = update.subcategory {
            self.subcategory = Some(subcategory);
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(sizes) = update.sizes {
            self.sizes = sizes;
        }
        if let Some(colors) = update.colors {
            self.colors = colors;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }

    /// Convert to the API representation.
    ///
    /// Returns `None` when the document has no id yet (never inserted).
    pub fn into_api(self) -> Option<Product> {
        let id = self.id?;
        Some(Product {
            id: id.to_hex(),
            name: self.name,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            category: self.category,
            subcategory: self.subcategory,
            brand: self.brand,
            sizes: self.sizes,
            colors: self.colors,
            images: self.images,
            stock: self.stock,
            featured: self.featured,
            rating: self.rating,
            review_count: self.review_count,
            tags: self.tags,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl UpdateProduct {
    /// True when the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.original_price.is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.brand.is_none()
            && self.sizes.is_none()
            && self.colors.is_none()
            && self.images.is_none()
            && self.stock.is_none()
            && self.featured.is_none()
            && self.tags.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_create() -> CreateProduct {
        CreateProduct {
            name: "Linen Shirt".to_string(),
            description: "Lightweight summer shirt".to_string(),
            price: 59.9,
            original_price: Some(79.9),
            category: "clothing".to_string(),
            subcategory: Some("shirts".to_string()),
            brand: "Atelier".to_string(),
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec![Color {
                name: "White".to_string(),
                hex: "#ffffff".to_string(),
            }],
            images: vec!["https://cdn.example.com/shirt.jpg".to_string()],
            stock: 12,
            featured: true,
            tags: vec!["linen".to_string()],
        }
    }

    #[test]
    fn test_new_document_has_no_id_and_zero_rating() {
        let doc = ProductDocument::new(sample_create());
        assert!(doc.id.is_none());
        assert_eq!(doc.rating, 0.0);
        assert_eq!(doc.review_count, 0);
        assert_eq!(doc.created_at, doc.updated_at);
    }

    #[test]
    fn test_into_api_requires_id() {
        let mut doc = ProductDocument::new(sample_create());
        assert!(doc.clone().into_api().is_none());

        let oid = ObjectId::new();
        doc.id = Some(oid);
        let product = doc.into_api().expect("id assigned");
        assert_eq!(product.id, oid.to_hex());
        assert_eq!(product.name, "Linen Shirt");
    }

    #[test]
    fn test_apply_update_is_partial() {
        let mut doc = ProductDocument::new(sample_create());
        let before = doc.updated_at;

        doc.apply_update(UpdateProduct {
            price: Some(49.9),
            featured: Some(false),
            ..Default::default()
        });

        assert_eq!(doc.price, 49.9);
        assert!(!doc.featured);
        assert_eq!(doc.name, "Linen Shirt");
        assert!(doc.updated_at >= before);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(UpdateProduct::default().is_empty());
        assert!(
            !UpdateProduct {
                stock: Some(3),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_query_defaults() {
        let query = ProductQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 20);
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_document_wire_format_is_camel_case() {
        let doc = ProductDocument::new(sample_create());
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("originalPrice").is_some());
        assert!(value.get("reviewCount").is_some());
        assert!(value.get("createdAt").is_some());
        // No id until inserted
        assert!(value.get("_id").is_none());
    }
}
