pub mod health;
pub mod students;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use students::{create_student, list_students};
