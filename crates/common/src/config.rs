//! Environment configuration for the geofence tooling
//!
//! Values come from the process environment after loading `.env` (if any).

use anyhow::{anyhow, Context, Result};
use domain::Vertex;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::Level;

use crate::structured_logging::LoggingConfig;

/// Initial map view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapViewConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        // Nashik
        Self {
            center_lat: 19.9975,
            center_lon: 73.7898,
            zoom: 13,
        }
    }
}

impl MapViewConfig {
    pub fn center(&self) -> Result<Vertex> {
        Vertex::new(self.center_lat, self.center_lon)
            .map_err(|e| anyhow!("Invalid map center: {}", e))
    }
}

/// Which region data collaborator to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionProviderKind {
    /// Placeholder summaries, no network
    Canned,
    /// Ask the configured LLM
    Llm,
}

impl FromStr for RegionProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canned" | "stub" => Ok(Self::Canned),
            "llm" => Ok(Self::Llm),
            other => Err(anyhow!("Unsupported region provider: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeofenceConfig {
    pub map: MapViewConfig,
    pub region_provider: RegionProviderKind,
    /// Artificial delay of the canned provider
    pub canned_latency_ms: u64,
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            map: MapViewConfig::default(),
            region_provider: RegionProviderKind::Canned,
            canned_latency_ms: 2000,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl GeofenceConfig {
    /// Load `.env`, then read KRISHIMITRA_* variables
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; missing keys keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(lat) = lookup("KRISHIMITRA_MAP_LAT") {
            config.map.center_lat = parse_var("KRISHIMITRA_MAP_LAT", &lat)?;
        }
        if let Some(lon) = lookup("KRISHIMITRA_MAP_LON") {
            config.map.center_lon = parse_var("KRISHIMITRA_MAP_LON", &lon)?;
        }
        if let Some(zoom) = lookup("KRISHIMITRA_MAP_ZOOM") {
            config.map.zoom = parse_var("KRISHIMITRA_MAP_ZOOM", &zoom)?;
        }
        if let Some(provider) = lookup("KRISHIMITRA_REGION_PROVIDER") {
            config.region_provider = provider.parse()?;
        }
        if let Some(latency) = lookup("KRISHIMITRA_CANNED_LATENCY_MS") {
            config.canned_latency_ms = parse_var("KRISHIMITRA_CANNED_LATENCY_MS", &latency)?;
        }
        if let Some(level) = lookup("KRISHIMITRA_LOG_LEVEL") {
            config.log_level = level.trim().to_ascii_lowercase();
        }
        if let Some(json) = lookup("KRISHIMITRA_JSON_LOGS") {
            config.json_logs = matches!(json.trim(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.map.center()?;
        if self.map.zoom > 20 {
            return Err(anyhow!("Map zoom must be at most 20, got {}", self.map.zoom));
        }
        self.log_level
            .parse::<Level>()
            .map_err(|_| anyhow!("Invalid log level: {}", self.log_level))?;
        Ok(())
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.parse().unwrap_or(Level::INFO),
            json_output: self.json_logs,
            ..LoggingConfig::default()
        }
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("{} has invalid value {:?}", key, value))
}
