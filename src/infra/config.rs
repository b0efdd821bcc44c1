use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use env_helpers::get_env_default;
use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Unset means no backing store: submissions are accepted and logged only.
    pub database_url: Option<SecretString>,
    /// How long a request waits for a pooled connection before the store counts as unreachable.
    pub database_acquire_timeout_secs: u64,
    pub cors_origin: HeaderValue,
    /// Prebuilt frontend served behind the route guard.
    pub static_dir: PathBuf,
    /// Accept submissions without persisting when the store is unreachable, instead of 500.
    pub degrade_on_outage: bool,
    pub session_cookie_ttl_days: i64,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from((Ipv4Addr::LOCALHOST, 4000)));
        let database_url: Option<SecretString> = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| SecretString::new(url.into()));
        let database_acquire_timeout_secs: u64 = get_env_default("DATABASE_ACQUIRE_TIMEOUT_SECS", 5);
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let static_dir: String = get_env_default("STATIC_DIR", "public".to_string());
        let degrade_on_outage: bool = get_env_default("WAITLIST_DEGRADE_ON_OUTAGE", true);
        let session_cookie_ttl_days: i64 = get_env_default("SESSION_COOKIE_TTL_DAYS", 7);
        let log_file: String = get_env_default("LOG_FILE", "app.log".to_string());

        Self {
            bind_addr,
            database_url,
            database_acquire_timeout_secs,
            cors_origin,
            static_dir: PathBuf::from(static_dir),
            degrade_on_outage,
            session_cookie_ttl_days,
            log_file,
        }
    }
}
