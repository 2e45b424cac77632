use clap::Parser;
use dotenvy::dotenv;
use gatehouse::cli::{Cli, Commands, issue_dev_token};
use gatehouse::logging::init_tracing;
use gatehouse::metrics::{init_metrics, metrics_app};
use gatehouse::router::init_router;
use gatehouse::state::init_app_state;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let mut state = init_app_state()?;
    cli.apply_overrides(&mut state.server_config);

    if let Some(Commands::Token { subject, admin }) = &cli.command {
        let token = issue_dev_token(subject, *admin, &state.jwt_config)
            .map_err(|e| anyhow::anyhow!(e.message()))?;
        println!("{token}");
        return Ok(());
    }

    let _log_guard = init_tracing()?;

    if let Some(handle) = init_metrics()? {
        let metrics_address = state.server_config.metrics_address();
        let metrics_listener = tokio::net::TcpListener::bind(&metrics_address).await?;
        info!(address = %metrics_address, "Metrics server listening");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(metrics_listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let address = state.server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(
        address = %address,
        seeded_users = state.server_config.seed_users.len(),
        "Server running; Swagger UI at /swagger-ui, Scalar at /scalar"
    );

    axum::serve(listener, init_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
