//! Demo content configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling demo content seeding at startup.
///
/// The same dataset remains reachable through the admin console regardless
/// of this flag; enabling it just applies the bundle before the server
/// starts taking traffic.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEMO_CONTENT")]
pub struct DemoContentSettings {
    /// Apply the demo dataset on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
}
