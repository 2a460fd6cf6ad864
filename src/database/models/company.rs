use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A company record as stored and as serialized on the wire.
///
/// The identifier is an opaque string (UUID v4 at generation time, but never
/// parsed back), so unknown client-supplied ids reach the store and surface
/// as a not-found condition there rather than failing in the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// Client-supplied fields for create and update. `name` presence is a
/// client-side concern only; the API accepts whatever the store accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyInput {
    pub name: String,
    pub description: Option<String>,
}
