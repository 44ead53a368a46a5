use anyhow::{Context, Result};
use serde::Deserialize;

/// Default location of the optional config file (extension resolved by `config`)
pub const DEFAULT_CONFIG_PATH: &str = "config/summary-relay";

/// Environment variables layered over the file, and the keys they set
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("BIND", "server.bind"),
    ("PORT", "server.port"),
    ("STATIC_DIR", "server.static_dir"),
    ("GROQ_API_KEY", "llm.api_key"),
    ("GROQ_MODEL", "llm.model"),
    ("GROQ_BASE_URL", "llm.base_url"),
    ("SMTP_HOST", "smtp.host"),
    ("SMTP_PORT", "smtp.port"),
    ("SMTP_SECURE", "smtp.secure"),
    ("SMTP_USER", "smtp.username"),
    ("SMTP_PASS", "smtp.password"),
    ("FROM_EMAIL", "smtp.from"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Directory holding the browser client
    pub static_dir: String,
    /// Maximum accepted request body
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Bearer credential; checked on each summarize call, not at startup
    pub api_key: Option<String>,
    pub model: String,
    /// OpenAI-compatible API root (without `/chat/completions`)
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Implicit TLS (port 465) when true, opportunistic STARTTLS otherwise
    pub secure: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: Option<String>,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl SmtpConfig {
    /// Sender address, falling back to the SMTP username
    pub fn sender(&self) -> Option<&str> {
        self.from.as_deref().or(self.username.as_deref())
    }
}

impl Config {
    /// Load defaults, then `path` (if present), then the process environment
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`] with an injectable environment lookup
    pub fn load_with<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .set_default("server.bind", "0.0.0.0")?
            .set_default("server.port", 5000_i64)?
            .set_default("server.static_dir", "static")?
            .set_default("server.body_limit_bytes", 4_i64 * 1024 * 1024)?
            .set_default("llm.model", "llama-3.1-8b-instant")?
            .set_default("llm.base_url", "https://api.groq.com/openai/v1")?
            .set_default("smtp.host", "smtp.gmail.com")?
            .set_default("smtp.port", 587_i64)?
            .set_default("smtp.secure", false)?
            .add_source(config::File::with_name(path).required(false));

        for (var, key) in ENV_OVERRIDES {
            let value = lookup(var).filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        let settings = builder
            .build()
            .with_context(|| format!("Failed to read config from {}", path))?;

        settings
            .try_deserialize()
            .context("Invalid relay configuration")
    }
}
