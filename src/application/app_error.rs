use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Waitlist store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to hand back to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::StoreUnavailable(_) | AppError::Database(_) => {
                "Failed to add email to waitlist".to_string()
            }
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
