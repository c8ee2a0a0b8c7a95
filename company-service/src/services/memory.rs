use crate::models::{Company, CompanyFilter};
use crate::services::CompanyStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// In-memory company store used by tests and local development without a
/// MongoDB instance. Mirrors the query semantics of [`super::MongoStore`]
/// for plain-text filters.
#[derive(Default)]
pub struct InMemoryStore {
    companies: RwLock<Vec<Company>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.companies.read().await.len()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(company: &Company, filter: &CompanyFilter) -> bool {
    if let Some(name) = &filter.company {
        if !contains_ignore_case(&company.company_name, name) {
            return false;
        }
    }
    if let Some(country) = &filter.country {
        if !contains_ignore_case(&company.country, country) {
            return false;
        }
    }
    if let Some(position) = &filter.position {
        if !company.available_positions.iter().any(|p| p == position) {
            return false;
        }
    }
    true
}

#[async_trait]
impl CompanyStore for InMemoryStore {
    async fn insert(&self, mut company: Company) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        company.id = Some(id);
        self.companies.write().await.push(company);
        Ok(id)
    }

    async fn find(&self, filter: &CompanyFilter) -> Result<Vec<Company>, AppError> {
        let companies = self.companies.read().await;
        let mut matching: Vec<Company> = companies
            .iter()
            .filter(|company| matches(company, filter))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        Ok(matching)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
