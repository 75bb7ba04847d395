use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::IoError(_) => ErrorCategory::Io,
            RosterError::ConfigError { .. } | RosterError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // a closed stdout (e.g. `| head`) is not worth a failing exit
            RosterError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            RosterError::IoError(_) => ErrorSeverity::Critical,
            RosterError::ConfigError { .. } | RosterError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::IoError(_) => "Check that standard output and the config file are accessible",
            RosterError::ConfigError { .. } => "Check the TOML syntax of the config file",
            RosterError::InvalidConfigValueError { .. } => {
                "Adjust the value on the command line or in the [criteria] table"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::IoError(e) => format!("Could not write or read data: {}", e),
            RosterError::ConfigError { message } => format!("Configuration problem: {}", message),
            RosterError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let invalid = RosterError::InvalidConfigValueError {
            field: "min_age".to_string(),
            value: "200".to_string(),
            reason: "Value must be between 0 and 150".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.exit_code(), 1);

        let io = RosterError::from(std::io::Error::other("disk gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.exit_code(), 3);

        let pipe = RosterError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(pipe.exit_code(), 0);
    }

    #[test]
    fn test_user_friendly_message_names_field() {
        let e = RosterError::InvalidConfigValueError {
            field: "gender".to_string(),
            value: "other".to_string(),
            reason: "expected MALE or FEMALE".to_string(),
        };
        assert!(e.user_friendly_message().contains("gender"));
        assert!(e.to_string().contains("other"));
    }
}
