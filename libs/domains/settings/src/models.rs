use chrono::{DateTime, Utc};
use mongodb::bson::{Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Discriminator value of the store settings singleton document
pub const STORE_SETTINGS_TYPE: &str = "store";

/// Store settings as stored in MongoDB.
///
/// A single document carries the whole configuration; it is identified by
/// `type: "store"` rather than a well-known `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettingsDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "type")]
    pub kind: String,
    // Defaults keep partially-upserted documents deserializable
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub whatsapp_message: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Store settings as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    /// Unique identifier (ObjectId hex string)
    pub id: String,
    /// Storefront display name
    pub store_name: String,
    /// WhatsApp contact number
    pub whatsapp_number: String,
    /// Prefilled WhatsApp message
    pub whatsapp_message: String,
    /// Instagram handle or URL
    pub instagram: String,
    /// Facebook page URL
    pub facebook: String,
    /// Contact email
    pub email: String,
    /// Physical address
    pub address: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for partially updating store settings
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStoreSettings {
    #[validate(length(min = 1, max = 200))]
    pub store_name: Option<String>,
    #[validate(length(max = 30))]
    pub whatsapp_number: Option<String>,
    #[validate(length(max = 500))]
    pub whatsapp_message: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub address: Option<String>,
}

impl StoreSettingsDocument {
    /// The default settings document, inserted when none exists yet
    pub fn default_store() -> Self {
        let now = Utc::now();
        Self {
            id: None,
            kind: STORE_SETTINGS_TYPE.to_string(),
            store_name: "Loja A Grande Família".to_string(),
            whatsapp_number: "5593991084582".to_string(),
            whatsapp_message: "Olá! Gostaria de saber mais sobre os produtos.".to_string(),
            instagram: String::new(),
            facebook: String::new(),
            email: String::new(),
            address: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Convert to the API representation; `None` when never inserted
    pub fn into_api(self) -> Option<StoreSettings> {
        let id = self.id?;
        Some(StoreSettings {
            id: id.to_hex(),
            store_name: self.store_name,
            whatsapp_number: self.whatsapp_number,
            whatsapp_message: self.whatsapp_message,
            instagram: self.instagram,
            facebook: self.facebook,
            email: self.email,
            address: self.address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl UpdateStoreSettings {
    /// True when the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.store_name.is_none()
            && self.whatsapp_number.is_none()
            && self.whatsapp_message.is_none()
            && self.instagram.is_none()
            && self.facebook.is_none()
            && self.email.is_none()
            && self.address.is_none()
    }

    /// Build the `$set` document for an upsert from the present fields.
    ///
    /// `updatedAt` is always bumped; absent fields stay untouched.
    pub fn set_doc(&self, now: DateTime<Utc>) -> Document {
        let mut set = doc! {};
        if let Some(ref store_name) = self.store_name {
            set.insert("storeName", store_name);
        }
        if let Some(ref whatsapp_number) = self.whatsapp_number {
            set.insert("whatsappNumber", whatsapp_number);
        }
        if let Some(ref whatsapp_message) = self.whatsapp_message {
            set.insert("whatsappMessage", whatsapp_message);
        }
        if let Some(ref instagram) = self.instagram {
            set.insert("instagram", instagram);
        }
        if let Some(ref facebook) = self.facebook {
            set.insert("facebook", facebook);
        }
        if let Some(ref email) = self.email {
            set.insert("email", email);
        }
        if let Some(ref address) = self.address {
            set.insert("address", address);
        }
        set.insert("updatedAt", now.to_rfc3339());
        set
    }
}
