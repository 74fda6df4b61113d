use service_core::error::AppError;
use service_core::observability::init_tracing;
use student_service::config::StudentConfig;
use student_service::services::init_metrics;
use student_service::startup::Application;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Recorder must exist before any metric is touched
    init_metrics()?;

    let config = StudentConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        list_limit = config.students.list_limit,
        "Starting student service"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        e
    })?;

    app.run_until_stopped().await?;

    tracing::info!("Student service stopped");
    Ok(())
}
