use crate::models::{NewStudent, Student};
use async_trait::async_trait;
use service_core::error::AppError;

/// Persistence seam for student records.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Inserts the record and returns it as stored, with its assigned id.
    async fn insert_student(&self, student: NewStudent) -> Result<Student, AppError>;

    /// Returns up to `limit` records in natural store order.
    async fn list_students(&self, limit: i64) -> Result<Vec<Student>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
