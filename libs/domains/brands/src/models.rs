use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Brand as stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Brand entity as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Unique identifier (ObjectId hex string)
    pub id: String,
    /// Brand name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new brand
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBrand {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub logo: Option<String>,
}

/// DTO for partially updating an existing brand
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBrand {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub logo: Option<String>,
}

impl BrandDocument {
    pub fn new(input: CreateBrand) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name: input.name,
            description: input.description,
            logo: input.logo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping `updated_at`
    pub fn apply_update(&mut self, update: UpdateBrand) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(logo) = update.logo {
            self.logo = Some(logo);
        }
        self.updated_at = Utc::now();
    }

    /// Convert to the API representation; `None` when never inserted
    pub fn into_api(self) -> Option<Brand> {
        let id = self.id?;
        Some(Brand {
            id: id.to_hex(),
            name: self.name,
            description: self.description,
            logo: self.logo,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl UpdateBrand {
    /// True when the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.logo.is_none()
    }
}
