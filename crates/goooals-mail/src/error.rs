use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Email credentials or SMTP host are not configured.")]
    NotConfigured,

    #[error("invalid SMTP port: {0}")]
    InvalidPort(String),

    #[error("invalid email address {address}: {reason}")]
    Address { address: String, reason: String },

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("message build failed: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

impl From<tera::Error> for MailError {
    fn from(e: tera::Error) -> Self {
        MailError::TemplateRender(e.to_string())
    }
}
