use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid value shape for category '{category}': expected a list of strings or an empty mapping, found {found}")]
    InvalidValueShape { category: String, found: String },

    #[error("Invalid input document: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML error: {message}")]
    TomlError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ExtractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExtractError::InvalidValueShape { .. }
            | ExtractError::InvalidInput { .. }
            | ExtractError::SerializationError(_) => ErrorCategory::Input,
            ExtractError::TomlError { .. } | ExtractError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ExtractError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 針對錯誤類型提供修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExtractError::InvalidValueShape { .. } => {
                "Give each category a list of strings, or an empty mapping to use its name"
            }
            ExtractError::InvalidInput { .. } => {
                "The input document must be an object mapping category names to values"
            }
            ExtractError::IoError(_) => "Check that the file exists and is readable",
            ExtractError::SerializationError(_) => "Check the input file is valid JSON",
            ExtractError::TomlError { .. } => "Check the file is valid TOML format",
            ExtractError::InvalidConfigValueError { .. } => "Fix the configuration value and run again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input rejected: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
