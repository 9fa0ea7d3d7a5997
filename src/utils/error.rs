use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid literal: {0}")]
    LiteralError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },
}

impl CheckError {
    /// 對應的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::IoError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CheckError::InvalidConfigValueError {
            field: "cases[0].args".to_string(),
            value: "3".to_string(),
            reason: "expected 2 arguments".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '3' for 'cases[0].args': expected 2 arguments"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err: CheckError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.exit_code(), 3);
    }
}
