use crate::models::{Company, CompanyFilter};
use serde::{Deserialize, Serialize};

/// Payload for creating a company. Every field is optional at the edge;
/// the handler decides which omissions are errors and which get defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub company_website: Option<String>,
    pub available_positions: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompanyQuery {
    pub company: Option<String>,
    pub country: Option<String>,
    pub position: Option<String>,
}

impl CompanyQuery {
    /// Drops empty-string parameters so `?company=` behaves like an absent
    /// parameter.
    pub fn into_filter(self) -> CompanyFilter {
        CompanyFilter {
            company: self.company.filter(|v| !v.is_empty()),
            country: self.country.filter(|v| !v.is_empty()),
            position: self.position.filter(|v| !v.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: String,
    pub company_name: String,
    pub country: String,
    pub company_website: String,
    pub available_positions: Vec<String>,
    pub date_added: String,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id.map(|id| id.to_hex()).unwrap_or_default(),
            company_name: company.company_name,
            country: company.country,
            company_website: company.company_website,
            available_positions: company.available_positions,
            date_added: company.date_added.to_rfc3339(),
        }
    }
}
