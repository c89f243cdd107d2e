//! ecs-hello: static greeting and health-check endpoints for container orchestrators.
//! Used by: binary entrypoint.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod server;
pub mod shutdown;
pub mod telemetry;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    console::print_banner();

    match serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("ecs-hello: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve() -> error::Result<()> {
    let addr = config::bind_addr();
    tracing::info!(%addr, "starting ecs-hello");

    let listener = server::bind(addr).await?;
    console::print_startup(addr);

    server::run(listener, shutdown::signal()).await
}
