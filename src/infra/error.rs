use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages are safe for logs; the #[source] chain may contain the
/// connection string, so log with Display (%e), not Debug (?e).
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database pool setup failed. Check DATABASE_URL.")]
    DatabaseConnection(#[source] sqlx::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}

impl From<sqlx::Error> for InfraError {
    fn from(e: sqlx::Error) -> Self {
        InfraError::DatabaseConnection(e)
    }
}
