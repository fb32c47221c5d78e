//! Backend entry-point: configuration, migrations, seeding, and server
//! startup.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::AdminCredentials;
use backend::domain::seo::PublicBaseUrl;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::seeding::{DemoContentSettings, seed_demo_content_on_startup};
use backend::server::{ServerConfig, create_server};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = load_session_key()?;
    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .wrap_err("invalid BIND_ADDR")?;

    let base_url_raw =
        env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());
    let base_url = PublicBaseUrl::parse(&base_url_raw)
        .wrap_err_with(|| format!("invalid PUBLIC_BASE_URL '{base_url_raw}'"))?;

    let asset_root = PathBuf::from(env::var("ASSET_ROOT").unwrap_or_else(|_| "media".into()));

    let admin = load_admin_credentials()?;

    let db_pool = match env::var("DATABASE_URL") {
        Ok(url) => {
            run_migrations(url.clone()).await?;
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .wrap_err("failed to build database pool")?;
            Some(pool)
        }
        Err(_) => {
            warn!("DATABASE_URL is not set; serving from the in-memory fixture store");
            None
        }
    };

    let seed_settings =
        DemoContentSettings::load().wrap_err("failed to load demo content settings")?;
    seed_demo_content_on_startup(&seed_settings, db_pool.as_ref())
        .await
        .wrap_err("demo content seeding failed")?;

    let mut config = ServerConfig::new(
        key,
        cookie_secure,
        SameSite::Lax,
        bind_addr,
        base_url,
        asset_root,
        admin,
    );
    if let Some(pool) = db_pool {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await?;
    Ok(())
}

/// Read the session signing key, falling back to an ephemeral key only in
/// development builds.
fn load_session_key() -> Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(eyre!("failed to read session key at {key_path}: {e}"))
            }
        }
    }
}

/// Read the admin account from the environment. Development builds fall back
/// to default credentials so the console works out of the box.
fn load_admin_credentials() -> Result<AdminCredentials> {
    match (env::var("ADMIN_USERNAME"), env::var("ADMIN_PASSWORD")) {
        (Ok(username), Ok(password)) => AdminCredentials::try_from_parts(&username, &password)
            .map_err(|e| eyre!("invalid admin credentials: {e}")),
        _ if cfg!(debug_assertions) => {
            warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set; using development defaults");
            AdminCredentials::try_from_parts("admin", "password")
                .map_err(|e| eyre!("invalid default credentials: {e}"))
        }
        _ => Err(eyre!("ADMIN_USERNAME and ADMIN_PASSWORD must be set")),
    }
}

/// Run pending migrations over a blocking connection before the pool opens.
async fn run_migrations(database_url: String) -> Result<()> {
    tokio::task::spawn_blocking(move || -> Result<()> {
        let mut conn = PgConnection::establish(&database_url)
            .wrap_err("database connection for migrations failed")?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| eyre!("migrations failed: {e}"))?;
        Ok(())
    })
    .await
    .wrap_err("migration task panicked")??;
    info!("database migrations up to date");
    Ok(())
}
