use anyhow::Result;
use hromada_cms::{
    application::{
        ports::{security::EditorAuthenticator, time::Clock},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        document::{DocumentReadRepository, DocumentWriteRepository},
        navigation::NavigationRepository,
    },
    infrastructure::{
        database,
        repositories::{
            PostgresDocumentReadRepository, PostgresDocumentWriteRepository,
            PostgresNavigationRepository,
        },
        security::StaticTokenAuthenticator,
        time::SystemClock,
    },
    presentation::http::{routes::build_router_with_rate_limiter, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");
    let localization = config.localization()?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    database::run_migrations(&pool).await?;

    let document_write_repo: Arc<dyn DocumentWriteRepository> =
        Arc::new(PostgresDocumentWriteRepository::new(pool.clone()));
    let document_read_repo: Arc<dyn DocumentReadRepository> = Arc::new(
        PostgresDocumentReadRepository::new(pool.clone(), Arc::new(localization.clone())),
    );
    let navigation_repo: Arc<dyn NavigationRepository> =
        Arc::new(PostgresNavigationRepository::new(pool.clone()));

    let editor_authenticator: Arc<dyn EditorAuthenticator> =
        Arc::new(StaticTokenAuthenticator::new(config.editor_token())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        document_write_repo,
        document_read_repo,
        navigation_repo,
        editor_authenticator,
        clock,
        localization,
        config.search_limit(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        %address,
        default_locale = %services.localization().default_locale(),
        "listening"
    );

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
