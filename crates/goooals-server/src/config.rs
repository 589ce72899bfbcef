use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use goooals_mail::config::SmtpConfig;
use goooals_mail::error::MailError;
use goooals_sources::external::DEFAULT_API_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CATALOG_PATH: &str = "data/standard_goals.json";

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub external_api_url: String,
    /// `None` when SMTP settings are incomplete; email requests then fail
    /// individually instead of the process refusing to start.
    pub smtp: Option<SmtpConfig>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        let bind_addr = env::var("GOOOALS_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e| eyre::eyre!("invalid GOOOALS_BIND_ADDR: {e}"))?;
        let catalog_path = env::var("GOOOALS_CATALOG_PATH")
            .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string())
            .into();
        let external_api_url =
            env::var("GOOOALS_EXTERNAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let smtp = match SmtpConfig::from_env() {
            Ok(config) => Some(config),
            Err(MailError::NotConfigured) => {
                tracing::warn!("SMTP_HOST, EMAIL_USER or EMAIL_PASS missing; email disabled");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "invalid SMTP settings; email disabled");
                None
            }
        };

        Ok(Self {
            bind_addr,
            catalog_path,
            external_api_url,
            smtp,
        })
    }
}
