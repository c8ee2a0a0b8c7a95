use crate::models::{Company, CompanyFilter};
use crate::services::CompanyStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

const COMPANIES_COLLECTION: &str = "companies";

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        let date_added_index = IndexModel::builder()
            .keys(doc! { "dateAdded": -1 })
            .options(
                IndexOptions::builder()
                    .name("date_added_desc".to_string())
                    .build(),
            )
            .build();

        self.companies()
            .create_index(date_added_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create dateAdded index on companies collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on companies.dateAdded");

        Ok(())
    }

    pub fn companies(&self) -> Collection<Company> {
        self.db.collection(COMPANIES_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    fn filter_document(filter: &CompanyFilter) -> Document {
        let mut document = Document::new();

        if let Some(company) = &filter.company {
            document.insert(
                "companyName",
                doc! { "$regex": company.as_str(), "$options": "i" },
            );
        }
        if let Some(country) = &filter.country {
            document.insert(
                "country",
                doc! { "$regex": country.as_str(), "$options": "i" },
            );
        }
        if let Some(position) = &filter.position {
            document.insert("availablePositions", position.as_str());
        }

        document
    }
}

#[async_trait]
impl CompanyStore for MongoStore {
    async fn insert(&self, company: Company) -> Result<ObjectId, AppError> {
        let result = self
            .companies()
            .insert_one(&company, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert company into database: {}", e);
                AppError::from(e)
            })?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            tracing::error!(inserted_id = %result.inserted_id, "Inserted id is not an ObjectId");
            AppError::InternalError(anyhow::anyhow!("Inserted id is not an ObjectId"))
        })
    }

    async fn find(&self, filter: &CompanyFilter) -> Result<Vec<Company>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "dateAdded": -1 })
            .build();

        let mut cursor = self
            .companies()
            .find(Self::filter_document(filter), find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query companies collection: {}", e);
                AppError::from(e)
            })?;

        let mut companies = Vec::new();
        while let Some(company) = cursor.try_next().await.map_err(|e| {
            tracing::error!("Failed to read company from cursor: {}", e);
            AppError::from(e)
        })? {
            companies.push(company);
        }

        Ok(companies)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
