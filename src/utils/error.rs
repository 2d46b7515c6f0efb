use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Arithmetic overflow after {count} values")]
    OverflowError { count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ApiError(e) if e.is_builder() => ErrorCategory::Configuration,
            AppError::ApiError(_) | AppError::ApiStatusError { .. } => ErrorCategory::Network,
            AppError::ConfigError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::CsvError(_)
            | AppError::SerializationError(_)
            | AppError::ProcessingError { .. }
            | AppError::OverflowError { .. } => ErrorCategory::Data,
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 遠端錯誤通常可重試，請求組裝錯誤除外
            AppError::ApiError(e) if e.is_builder() => ErrorSeverity::High,
            AppError::ApiError(_) => ErrorSeverity::Medium,
            AppError::ApiStatusError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            AppError::ApiStatusError { .. } => ErrorSeverity::High,
            AppError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ApiError(e) if e.is_builder() => {
                format!("Could not build the request: {}", e)
            }
            AppError::ApiError(e) if e.is_timeout() => "Remote endpoint timed out".to_string(),
            AppError::ApiError(e) if e.is_connect() => {
                "Could not connect to the remote endpoint".to_string()
            }
            AppError::ApiError(_) => "Remote request failed".to_string(),
            AppError::ApiStatusError { status, .. } => {
                format!("Remote endpoint rejected the request (HTTP {})", status)
            }
            AppError::CsvError(_) => "Could not read the numbers file".to_string(),
            AppError::IoError(e) => format!("File system error: {}", e),
            AppError::SerializationError(_) => "Invalid JSON data".to_string(),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            AppError::MissingConfigError { field } => format!("Missing setting '{}'", field),
            AppError::ProcessingError { message } => message.clone(),
            AppError::OverflowError { .. } => "The sum does not fit in a 64-bit integer".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the endpoint URL and network, then retry",
            ErrorCategory::Configuration => "Review the config file and command-line flags",
            ErrorCategory::Data => "Check the input data format",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }

    /// 依嚴重程度決定 CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
