use crate::models::{Company, CompanyFilter};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Persistence seam for company records. Production uses MongoDB; tests
/// substitute an in-memory store.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Inserts a company and returns the id assigned to it.
    async fn insert(&self, company: Company) -> Result<ObjectId, AppError>;

    /// Returns companies matching `filter`, newest first.
    async fn find(&self, filter: &CompanyFilter) -> Result<Vec<Company>, AppError>;

    /// Verifies the backing store is reachable.
    async fn health_check(&self) -> Result<(), AppError>;
}
