use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Category as stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Category entity as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier (ObjectId hex string)
    pub id: String,
    /// Display name
    pub name: String,
    /// URL-friendly unique slug
    pub slug: String,
    /// Subcategory slugs
    #[serde(default)]
    pub subcategories: Vec<String>,
    /// Optional image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// DTO for creating a new category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
    pub image: Option<String>,
}

impl CategoryDocument {
    pub fn new(input: CreateCategory) -> Self {
        Self {
            id: None,
            name: input.name,
            slug: input.slug,
            subcategories: input.subcategories,
            image: input.image,
        }
    }

    /// Convert to the API representation; `None` when never inserted
    pub fn into_api(self) -> Option<Category> {
        let id = self.id?;
        Some(Category {
            id: id.to_hex(),
            name: self.name,
            slug: self.slug,
            subcategories: self.subcategories,
            image: self.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_api_requires_id() {
        let mut doc = CategoryDocument::new(CreateCategory {
            name: "Clothing".to_string(),
            slug: "clothing".to_string(),
            subcategories: vec!["shirts".to_string()],
            image: None,
        });
        assert!(doc.clone().into_api().is_none());

        let oid = ObjectId::new();
        doc.id = Some(oid);
        let category = doc.into_api().unwrap();
        assert_eq!(category.id, oid.to_hex());
        assert_eq!(category.slug, "clothing");
    }
}
