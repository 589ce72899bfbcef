use std::fmt;

use crate::error::MailError;

pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP relay settings. Host, user and password are all required; the
/// user doubles as the sender address unless `EMAIL_FROM` is set.
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from: String,
}

impl SmtpConfig {
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MailError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (Some(host), Some(user), Some(password)) =
            (get("SMTP_HOST"), get("EMAIL_USER"), get("EMAIL_PASS"))
        else {
            return Err(MailError::NotConfigured);
        };

        let port = match get("SMTP_PORT") {
            Some(raw) => raw.parse().map_err(|_| MailError::InvalidPort(raw))?,
            None => DEFAULT_SMTP_PORT,
        };
        let from = get("EMAIL_FROM").unwrap_or_else(|| user.clone());

        Ok(Self {
            host,
            port,
            user,
            password,
            from,
        })
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"****")
            .field("from", &self.from)
            .finish()
    }
}
