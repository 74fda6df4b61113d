//! Shared helpers for student-service integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use mongodb::bson::{oid::ObjectId, Bson};
use service_core::error::AppError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use student_service::config::StudentConfig;
use student_service::models::{NewStudent, Student};
use student_service::services::{MongoDb, StudentStore};
use student_service::startup::{build_router, AppState, Application};
use tower::ServiceExt;
use uuid::Uuid;

/// `StudentStore` backed by a vector, counting every call that reaches it.
#[derive(Default)]
pub struct InMemoryStore {
    students: Mutex<Vec<Student>>,
    pub insert_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub unhealthy: bool,
}

impl InMemoryStore {
    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Self::default()
        }
    }

    /// Store pre-populated with already-persisted records.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Mutex::new(students),
            ..Self::default()
        }
    }

    pub fn inserts(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.students.lock().unwrap().len()
    }
}

#[async_trait]
impl StudentStore for InMemoryStore {
    async fn insert_student(&self, student: NewStudent) -> Result<Student, AppError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let mut stored = Student::from(student);
        stored.id = Some(Bson::ObjectId(ObjectId::new()));
        self.students.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_students(&self, limit: i64) -> Result<Vec<Student>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let students = self.students.lock().unwrap();
        Ok(students.iter().take(limit as usize).cloned().collect())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        if self.unhealthy {
            return Err(AppError::DatabaseError(anyhow::anyhow!("store is down")));
        }
        Ok(())
    }
}

pub fn test_config() -> StudentConfig {
    let mut config = StudentConfig::with_defaults();
    config.common.port = 0; // Random port for testing
    config
}

pub fn router_with(store: Arc<InMemoryStore>, config: StudentConfig) -> Router {
    build_router(AppState { config, store })
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed to respond")
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

pub fn sample_student() -> serde_json::Value {
    serde_json::json!({
        "name": "Minh Than",
        "email": "thanvm2000@gmail.com",
        "course": "Experiments, Science, and Fashion in Nanophotonics",
        "gpa": 3.2
    })
}

/// Application running on a random port against a throwaway MongoDB database.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    pub async fn spawn_with(customize: impl FnOnce(&mut StudentConfig)) -> Self {
        let db_name = format!("student_test_{}", Uuid::new_v4().simple());

        let mut config = test_config();
        if let Ok(uri) = std::env::var("MONGODB_URI") {
            config.mongodb.uri = uri;
        }
        config.mongodb.database = db_name.clone();
        customize(&mut config);

        let db = MongoDb::connect(
            &config.mongodb.uri,
            &config.mongodb.database,
            &config.mongodb.collection,
        )
        .await
        .expect("Failed to connect to MongoDB");

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
