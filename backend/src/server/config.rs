//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};

use crate::domain::AdminCredentials;
use crate::domain::seo::PublicBaseUrl;
use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) base_url: PublicBaseUrl,
    pub(crate) asset_root: PathBuf,
    pub(crate) admin: AdminCredentials,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration from the required settings.
    #[must_use]
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        bind_addr: SocketAddr,
        base_url: PublicBaseUrl,
        asset_root: PathBuf,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            base_url,
            asset_root,
            admin,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses PostgreSQL-backed repositories;
    /// without it, content lives in the in-memory fixture store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
