use crate::models::{NewStudent, Student};
use crate::services::StudentStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc, options::FindOptions, Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, collection = %collection, "MongoDB client ready");
        Ok(Self {
            client,
            db,
            collection: collection.to_string(),
        })
    }

    pub fn students(&self) -> Collection<Student> {
        self.db.collection(&self.collection)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

#[async_trait]
impl StudentStore for MongoDb {
    async fn insert_student(&self, student: NewStudent) -> Result<Student, AppError> {
        let students = self.students();

        let result = students
            .insert_one(Student::from(student), None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert student: {}", e);
                AppError::from(e)
            })?;

        let created = students
            .find_one(doc! { "_id": result.inserted_id.clone() }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read back inserted student: {}", e);
                AppError::from(e)
            })?;

        created.ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!(
                "Inserted student {} could not be read back",
                result.inserted_id
            ))
        })
    }

    async fn list_students(&self, limit: i64) -> Result<Vec<Student>, AppError> {
        let options = FindOptions::builder().limit(limit).build();

        let cursor = self.students().find(None, options).await.map_err(|e| {
            tracing::error!("Failed to query students: {}", e);
            AppError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to read students cursor: {}", e);
            AppError::from(e)
        })
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
