use serde::Deserialize;
use service_core::config::{self as core_config, get_env, get_env_parsed, Environment};
use service_core::error::AppError;
use std::env;

pub const DEFAULT_LIST_LIMIT: i64 = 100;

#[derive(Debug, Clone, Deserialize)]
pub struct StudentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub environment: Environment,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub mongodb: MongoConfig,
    pub students: StudentsConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentsConfig {
    /// Upper bound on records returned by `GET /students`.
    pub list_limit: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SwaggerConfig {
    pub enabled: bool,
}

impl StudentConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let environment = Environment::current()?;
        let is_prod = environment.is_prod();

        let config = StudentConfig {
            common: common_config,
            environment,
            service_name: get_env("SERVICE_NAME", Some("student-service"), is_prod)?,
            log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", Some("mongodb://localhost:27017"), is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("college"), is_prod)?,
                collection: get_env("STUDENTS_COLLECTION", Some("students"), is_prod)?,
            },
            students: StudentsConfig {
                list_limit: get_env_parsed("STUDENTS_LIST_LIMIT", Some("100"), is_prod)?,
            },
            swagger: SwaggerConfig {
                enabled: get_env_parsed("SWAGGER_ENABLED", Some("true"), is_prod)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.students.list_limit <= 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "STUDENTS_LIST_LIMIT must be a positive integer, got {}",
                self.students.list_limit
            )));
        }

        if self.environment.is_prod() && self.swagger.enabled {
            tracing::warn!("Swagger UI is publicly accessible in production");
        }

        Ok(())
    }

    /// Dev-mode configuration with all defaults applied, without touching the
    /// process environment.
    pub fn with_defaults() -> Self {
        StudentConfig {
            common: core_config::Config { port: 8080 },
            environment: Environment::Dev,
            service_name: "student-service".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
            mongodb: MongoConfig {
                uri: "mongodb://localhost:27017".to_string(),
                database: "college".to_string(),
                collection: "students".to_string(),
            },
            students: StudentsConfig {
                list_limit: DEFAULT_LIST_LIMIT,
            },
            swagger: SwaggerConfig { enabled: true },
        }
    }
}
