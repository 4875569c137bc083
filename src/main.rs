use dotenvy::dotenv;
use parentportal::logging::{init_tracing, shutdown_tracer};
use parentportal::metrics::{init_metrics, metrics_app};
use parentportal::router::init_router;
use parentportal::state::init_app_state;
use parentportal_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    init_tracing(server_config.otel_enabled)?;

    let state = match init_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to initialize application state");
            shutdown_tracer().await;
            return Err(e);
        }
    };

    if let Some(handle) = init_metrics()? {
        let metrics_address = server_config.metrics_address();
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_address).await?;
        info!("Metrics available at http://{}/metrics", metrics_address);
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server running on http://{}", address);
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
