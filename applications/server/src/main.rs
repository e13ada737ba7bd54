/// Roster Server - user CRUD HTTP API
use clap::{Parser, Subcommand};
use roster_core::CreateUser;
use roster_server::{api, config::ServerConfig, state::AppState};
use roster_storage::Database;
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user management server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// First name
        #[arg(short, long)]
        firstname: String,
        /// Last name
        #[arg(short, long)]
        lastname: String,
        /// Age in years
        #[arg(short, long)]
        age: i64,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::AddUser {
            username,
            firstname,
            lastname,
            age,
        } => {
            let input = CreateUser {
                username,
                firstname,
                lastname,
                age,
            };
            add_user(&config, input).await?;
        }
        Commands::ListUsers => {
            list_users(&config).await?;
        }
    }

    Ok(())
}

async fn open_database(config: &ServerConfig) -> anyhow::Result<Database> {
    let db = Database::connect(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    Ok(db)
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let db = open_database(config).await?;
    tracing::info!("Database connected");

    let app = api::create_router(AppState::new(db));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn add_user(config: &ServerConfig, input: CreateUser) -> anyhow::Result<()> {
    if input.slug().is_empty() {
        anyhow::bail!("username must contain at least one letter or digit");
    }

    let db = open_database(config).await?;

    let mut uow = db.begin().await?;
    let user = uow.create_user(input).await?;
    uow.commit().await?;

    println!("Created user {} (slug: {})", user.id, user.slug);
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let db = open_database(config).await?;

    let users = roster_storage::users::get_all(db.pool()).await?;
    let count = roster_storage::users::count(db.pool()).await?;

    println!("Users ({count}):");
    for user in users {
        println!("  {} - {} ({})", user.id, user.username, user.slug);
    }

    Ok(())
}
