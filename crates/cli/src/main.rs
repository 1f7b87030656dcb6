//! # Fanout DNS
//!
//! Fans each requested DNS query out to every configured upstream resolver
//! and records the answers against a shared Query document.

mod bootstrap;

use clap::Parser;
use fanout_dns_api::{create_api_routes, AppState};
use fanout_dns_application::ports::{QueryStore, ResolverEndpoint};
use fanout_dns_application::{CreateQueryUseCase, GetQueryUseCase, ShutdownCoordinator};
use fanout_dns_domain::Config;
use fanout_dns_infrastructure::dns::UdpExchanger;
use std::process::ExitCode;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fanout-dns", version, about = "Query a name against every configured DNS resolver at once")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "/etc/fanout-dns/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match bootstrap::load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: config: {e}");
            return ExitCode::from(2);
        }
    };

    bootstrap::init_logging(&config);

    let store = match bootstrap::init_storage(&config.storage).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: storage: {e}");
            return ExitCode::from(1);
        }
    };

    info!(
        config_file = %cli.config,
        resolvers = config.resolvers.len(),
        "configuration loaded"
    );

    if let Err(e) = run(config, store).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(config: Config, store: Arc<dyn QueryStore>) -> anyhow::Result<()> {
    let shutdown = ShutdownCoordinator::new();

    let mut resolvers = Vec::with_capacity(config.resolvers.len());
    for resolver in &config.resolvers {
        resolvers.push(ResolverEndpoint::new(
            resolver.name.clone(),
            resolver.socket_addr()?,
        ));
    }

    let exchanger = Arc::new(UdpExchanger::new());
    let state = AppState {
        create_query: Arc::new(CreateQueryUseCase::new(
            Arc::clone(&store),
            exchanger,
            resolvers,
            shutdown.clone(),
        )),
        get_query: Arc::new(GetQueryUseCase::new(store)),
    };

    let app = create_api_routes(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.listen.addr).await?;
    info!(addr = %config.listen.addr, "starting fanout-dns");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The listener is closed; in-flight fan-outs keep running until their
    // deadline. Wait them out rather than cancelling.
    info!(outstanding = shutdown.outstanding(), "waiting for in-flight queries");
    shutdown.wait().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "could not listen for interrupt signal");
        return;
    }

    info!("shutting down gracefully...");
}
