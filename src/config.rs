use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_RESUME_PATH: &str = "resume.pdf";
const DEFAULT_RECRUITERS_CSV: &str = "recruiters.csv";
const DEFAULT_DELAY_SECONDS: u64 = 5;

/// Sender identity and mail submission endpoint, shared read-only by every send.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub sender_address: String,
    pub sender_secret: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Credentials {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("sender_address", &self.sender_address)
            .field("sender_secret", &"<redacted>")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

/// Process startup configuration. Not `Debug`: it carries the sender secret.
#[derive(Clone)]
pub struct Config {
    pub sender_email: String,
    pub sender_password: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub resume_path: PathBuf,
    pub recruiters_csv: PathBuf,
    /// Pacing delay between consecutive sends
    pub delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup (the process
    /// environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let delay = match lookup("SEND_DELAY_SECONDS") {
            Some(raw) => parse_delay(&raw)?,
            None => Duration::from_secs(DEFAULT_DELAY_SECONDS),
        };

        Ok(Config {
            sender_email: required("SENDER_EMAIL")?,
            sender_password: required("SENDER_PASSWORD")?,
            smtp_host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: match lookup("SMTP_PORT") {
                Some(port) => port.trim().parse().map_err(|_| ConfigError::InvalidPort)?,
                None => DEFAULT_SMTP_PORT,
            },
            resume_path: lookup("RESUME_PATH")
                .unwrap_or_else(|| DEFAULT_RESUME_PATH.to_string())
                .into(),
            recruiters_csv: lookup("RECRUITERS_CSV")
                .unwrap_or_else(|| DEFAULT_RECRUITERS_CSV.to_string())
                .into(),
            delay,
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            sender_address: self.sender_email.clone(),
            sender_secret: self.sender_password.clone(),
            server_host: self.smtp_host.clone(),
            server_port: self.smtp_port,
        }
    }
}

/// Seconds, fractional allowed; negative, NaN and infinite values are rejected.
fn parse_delay(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ConfigError::InvalidDelay(raw.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("Invalid SMTP port")]
    InvalidPort,
    #[error("Invalid send delay: {0}")]
    InvalidDelay(String),
}
