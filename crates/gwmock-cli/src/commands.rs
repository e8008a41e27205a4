//! Subcommand definitions.

use clap::{Args, Subcommand};

use gwmock_axum::{CorsConfig, ServerConfig};
use gwmock_core::{
    DEFAULT_ACCESS_TOKEN, DEFAULT_RATE_LIMIT, DEFAULT_RATE_LIMIT_WINDOW_SECS, Settings,
};

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the mock server and run until Ctrl-C
    Serve(ServeArgs),
}

/// Options for `gwmock serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Host or address to bind to
    #[arg(long, env = "GWMOCK_HOST", default_value = gwmock_axum::DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "GWMOCK_PORT", default_value_t = gwmock_axum::DEFAULT_PORT)]
    pub port: u16,

    /// Value reported in X-RateLimit-Limit
    #[arg(long = "rate-limit", env = "GWMOCK_RATE_LIMIT", default_value_t = DEFAULT_RATE_LIMIT)]
    pub rate_limit: u32,

    /// Seconds until the reported rate-limit window resets
    #[arg(
        long = "rate-limit-window",
        env = "GWMOCK_RATE_LIMIT_WINDOW",
        default_value_t = DEFAULT_RATE_LIMIT_WINDOW_SECS
    )]
    pub rate_limit_window: u64,

    /// Token returned by /auth/login
    #[arg(long, env = "GWMOCK_TOKEN", default_value = DEFAULT_ACCESS_TOKEN)]
    pub token: String,

    /// Allowed CORS origin (repeatable; all origins when omitted)
    #[arg(long = "allow-origin")]
    pub allow_origin: Vec<String>,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: gwmock_axum::DEFAULT_HOST.to_string(),
            port: gwmock_axum::DEFAULT_PORT,
            rate_limit: DEFAULT_RATE_LIMIT,
            rate_limit_window: DEFAULT_RATE_LIMIT_WINDOW_SECS,
            token: DEFAULT_ACCESS_TOKEN.to_string(),
            allow_origin: Vec::new(),
        }
    }
}

impl ServeArgs {
    /// Build the server configuration for these options.
    pub fn to_config(&self) -> ServerConfig {
        let settings = Settings {
            rate_limit: self.rate_limit,
            rate_limit_window_secs: self.rate_limit_window,
            access_token: self.token.clone(),
        };

        let mut config = ServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors: CorsConfig::AllowAll,
            settings,
        };
        if !self.allow_origin.is_empty() {
            config = config.with_allowed_origins(self.allow_origin.clone());
        }
        config
    }
}
