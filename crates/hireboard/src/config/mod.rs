use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::marketplace::commission::CommissionPolicy;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub commission: CommissionSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            commission: CommissionSettings::load()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Deployment-level commission dials, one set per caller role.
///
/// Admin/internal surfaces and company surfaces have historically run with
/// different default reductions (40 vs 50); both stay independently
/// configurable rather than being unified.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionSettings {
    pub admin_reduction_pct: f64,
    pub company_reduction_pct: f64,
    pub min_reduction_pct: f64,
    pub max_reduction_pct: f64,
    pub min_commission_pct: f64,
    pub max_commission_pct: f64,
}

impl CommissionSettings {
    fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            admin_reduction_pct: percentage_var("APP_ADMIN_REDUCTION_PCT", 40.0)?,
            company_reduction_pct: percentage_var("APP_COMPANY_REDUCTION_PCT", 50.0)?,
            min_reduction_pct: percentage_var("APP_MIN_REDUCTION_PCT", 0.0)?,
            max_reduction_pct: percentage_var("APP_MAX_REDUCTION_PCT", 100.0)?,
            min_commission_pct: percentage_var("APP_MIN_COMMISSION_PCT", 1.0)?,
            max_commission_pct: percentage_var("APP_MAX_COMMISSION_PCT", 50.0)?,
        })
    }

    /// Policy applied on admin and internal edit surfaces.
    pub fn admin_policy(&self) -> CommissionPolicy {
        CommissionPolicy::new(
            self.admin_reduction_pct,
            self.min_reduction_pct,
            self.max_reduction_pct,
            self.min_commission_pct,
            self.max_commission_pct,
        )
    }

    /// Policy applied on company-facing edit surfaces.
    pub fn company_policy(&self) -> CommissionPolicy {
        CommissionPolicy::new(
            self.company_reduction_pct,
            self.min_reduction_pct,
            self.max_reduction_pct,
            self.min_commission_pct,
            self.max_commission_pct,
        )
    }
}

fn percentage_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidPercentage { name }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidPercentage { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidPercentage { name } => {
                write!(f, "{name} must parse to a number")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPercentage { .. } => None,
        }
    }
}
