use std::sync::Arc;

use goooals_mail::transport::{Mailer, SmtpMailer};
use goooals_sources::catalog::Catalog;
use goooals_sources::external::ExternalGoalClient;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub external: ExternalGoalClient,
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> eyre::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("goooals/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            catalog: Catalog::new(&config.catalog_path),
            external: ExternalGoalClient::new(http, &config.external_api_url),
            mailer: Arc::new(SmtpMailer::new(config.smtp.clone())),
        })
    }
}
