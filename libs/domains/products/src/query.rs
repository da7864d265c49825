//! Pure query engine for product listings.
//!
//! Translates a [`ProductQuery`] into a MongoDB filter document and a sort
//! document, and computes the pagination arithmetic. Nothing here touches the
//! database, so every rule is unit-tested in isolation.

use mongodb::bson::{Document, doc};
use strum::{Display, EnumString};

use crate::models::ProductQuery;

/// Sort order for product listings.
///
/// Resolution is total: any unknown or absent sort key falls back to
/// [`ProductSort::Newest`] instead of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ProductSort {
    /// Price ascending
    PriceAsc,
    /// Price descending
    PriceDesc,
    /// Most recently created first
    #[default]
    Newest,
    /// Most reviewed first
    Popular,
}

impl ProductSort {
    /// Resolve a raw sort parameter, falling back to `Newest`
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// Sort document for the resolved order.
    ///
    /// A secondary `_id` key in the same direction keeps ties stable across
    /// pages, since `_id` is unique and monotonic for insert order.
    pub fn sort_doc(&self) -> Document {
        match self {
            Self::PriceAsc => doc! { "price": 1, "_id": 1 },
            Self::PriceDesc => doc! { "price": -1, "_id": -1 },
            Self::Newest => doc! { "createdAt": -1, "_id": -1 },
            Self::Popular => doc! { "reviewCount": -1, "_id": -1 },
        }
    }
}

/// Build the MongoDB filter document for a listing query.
///
/// All present filters are combined as a conjunction. Empty strings count as
/// absent. User search text is regex-escaped so metacharacters match
/// literally, then applied as a case-insensitive substring match over name,
/// description and tags.
pub fn filter_doc(query: &ProductQuery) -> Document {
    let mut filter = doc! {};

    if let Some(category) = non_empty(query.category.as_deref()) {
        filter.insert("category", category);
    }

    if let Some(subcategory) = non_empty(query.subcategory.as_deref()) {
        filter.insert("subcategory", subcategory);
    }

    if let Some(brand) = non_empty(query.brand.as_deref()) {
        filter.insert("brand", brand);
    }

    // An explicit featured=false filters to non-featured products
    if let Some(featured) = query.featured {
        filter.insert("featured", featured);
    }

    // Price range; min > max is not rejected and simply matches nothing
    if query.min_price.is_some() || query.max_price.is_some() {
        let mut price = doc! {};
        if let Some(min) = query.min_price {
            price.insert("$gte", min);
        }
        if let Some(max) = query.max_price {
            price.insert("$lte", max);
        }
        filter.insert("price", price);
    }

    if let Some(search) = non_empty(query.search.as_deref()) {
        let pattern = regex::escape(search);
        filter.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": &pattern, "$options": "i" } },
                doc! { "description": { "$regex": &pattern, "$options": "i" } },
                doc! { "tags": { "$regex": &pattern, "$options": "i" } },
            ],
        );
    }

    filter
}

/// Number of documents to skip for the requested page
pub fn skip(page: i64, page_size: i64) -> u64 {
    ((page - 1) * page_size).max(0) as u64
}

/// Total page count via ceiling division
pub fn total_pages(total: u64, page_size: i64) -> u64 {
    total.div_ceil(page_size.max(1) as u64)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
