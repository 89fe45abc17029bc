use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("API request to {url} failed with status: {status}")]
    HttpStatus { status: u16, url: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Coach {coach_id} was returned without an assignments list")]
    MissingAssignments { coach_id: String },

    #[error("Row {row} is out of range ({len} visible rows)")]
    InvalidRow { row: usize, len: usize },
}

impl AppError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Api(_) | AppError::HttpStatus { .. } => {
                "Could not reach the coaching backend".to_string()
            }
            AppError::MissingAssignments { .. } => {
                "The backend returned an incomplete coach record".to_string()
            }
            AppError::InvalidRow { row, len } => {
                format!("There is no row {} (only {} rows are shown)", row, len)
            }
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Api(_) => "Check that the backend is running and --base-url is correct",
            AppError::HttpStatus { status, .. } if *status == 401 || *status == 403 => {
                "Sign in again so a fresh access_token is stored"
            }
            AppError::HttpStatus { .. } => "Check the requested id and the backend logs",
            AppError::Serialization(_) | AppError::MissingAssignments { .. } => {
                "Check that the backend version matches this client"
            }
            AppError::InvalidRow { .. } => "Pick a row number from the listed table",
            AppError::Io(_) => "Check file paths and permissions",
            AppError::Csv(_) => "Retry with --format text",
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => "Fix the flag or the TOML file and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
