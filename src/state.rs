//! Application state
//!
//! Holds configuration and the shared, read-only components

use crate::camp_catalog::CampCatalog;
use crate::image_listing::ImageListingService;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server port (`PORT`)
    pub port: u16,
    /// Server host
    pub host: String,
    /// Static UI bundle, served at `/`
    pub public_dir: PathBuf,
    /// Data root, served at `/data` (contains `fotos_stl/`)
    pub data_dir: PathBuf,
    /// Camp dataset
    pub catalog_file: PathBuf,
}

impl AppConfig {
    /// Parse a `PORT` value, falling back to the default
    pub fn parse_port(value: Option<&str>) -> u16 {
        value
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    /// Socket address string
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = PathBuf::from("data");
        Self {
            port: Self::parse_port(std::env::var("PORT").ok().as_deref()),
            host: "0.0.0.0".to_string(),
            public_dir: PathBuf::from("public"),
            catalog_file: data_dir.join("campamentos.json"),
            data_dir,
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Photo listing over `data_dir`
    pub image_listing: Arc<ImageListingService>,
    /// Camp dataset (read-only)
    pub catalog: Arc<CampCatalog>,
    /// Process start, for uptime reporting
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: CampCatalog) -> Self {
        let image_listing = Arc::new(ImageListingService::new(config.data_dir.clone()));
        Self {
            config,
            image_listing,
            catalog: Arc::new(catalog),
            started_at: Utc::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime_sec(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}
