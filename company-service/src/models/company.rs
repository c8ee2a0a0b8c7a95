use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A company record as stored in the `companies` collection. Field names
/// are camelCase on the wire and in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub company_name: String,
    pub country: String,
    pub company_website: String,
    pub available_positions: Vec<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date_added: DateTime<Utc>,
}

impl Company {
    /// Creates an unsaved record stamped with the current time. The id is
    /// assigned by the store on insert.
    pub fn new(
        company_name: String,
        country: String,
        company_website: String,
        available_positions: Vec<String>,
    ) -> Self {
        Self {
            id: None,
            company_name,
            country,
            company_website,
            available_positions,
            date_added: Utc::now(),
        }
    }
}

/// Normalized lookup filters. Absent fields do not constrain the query.
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    pub company: Option<String>,
    pub country: Option<String>,
    pub position: Option<String>,
}
