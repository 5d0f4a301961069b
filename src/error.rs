use thiserror::Error;

#[derive(Error, Debug)]
pub enum BilledError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid file type: {file_name} (accepted: jpg, jpeg, png)")]
    InvalidFileType { file_name: String },

    #[error("No valid receipt has been uploaded")]
    MissingReceipt,

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Not logged in. Run `billed login <email>` first.")]
    NotLoggedIn,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BilledError>;
