use anyhow::Result;
use blog_core::{
    application::{
        ports::{ClockPort, RandomSourcePort, SlugGeneratorPort},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::account::AccountId,
    infrastructure::{
        database,
        repositories::sqlite_repositories,
        time::SystemClock,
        util::{DefaultSlugGenerator, OsRandomSource},
    },
    presentation::http::{
        routes::build_router,
        state::{AdminAccess, HttpState},
    },
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

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    let random: Arc<RandomSourcePort> = Arc::new(OsRandomSource);

    let services = Arc::new(ApplicationServices::new(
        sqlite_repositories(&pool),
        clock,
        slugger,
        random,
    ));

    let admin = AdminAccess {
        token: config.admin_token().map(str::to_string),
        account_id: config.admin_account_id().map(AccountId),
    };
    if admin.token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set; management routes will reject every request");
    }

    let state = HttpState { services, admin };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
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
            tracing::error!(error = %err, "failed to listen for CTRL+C");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
