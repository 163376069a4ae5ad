/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid fetch.timeout_secs: {configured} (min: {min_limit}, max: {max_limit})")]
    FetchTimeout {
        configured: u64,
        min_limit: u64,
        max_limit: u64,
    },
    #[error("Invalid fetch.user_agent: value is empty")]
    EmptyUserAgent,
    #[error("Invalid conversion.output_format: '{configured}'")]
    OutputFormat { configured: String },
    #[error("Invalid logging.level: '{configured}'")]
    LogLevel { configured: String },
    #[error("Invalid conversion.custom_mappings: '{path}' does not exist")]
    CustomMappingsPath { path: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::FetchTimeout {
                configured,
                min_limit,
                max_limit,
            } => {
                format!(
                    "Fetch timeout out of range!\n\n\
                    Your configured value: {configured} seconds\n\
                    Valid range: {min_limit} - {max_limit} seconds\n\n\
                    Please update timeout_secs in the [fetch] section to a value between {min_limit} and {max_limit}."
                )
            }
            ConfigValidationError::EmptyUserAgent => {
                "Fetch user agent is empty!\n\n\
                Please remove user_agent from the [fetch] section or set it to a non-empty value."
                    .to_string()
            }
            ConfigValidationError::OutputFormat { configured } => {
                format!(
                    "Unknown output format!\n\n\
                    Your configured value: '{configured}'\n\
                    Supported formats: js, json\n\n\
                    Please update output_format in the [conversion] section."
                )
            }
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: '{configured}'\n\
                    Supported levels: off, error, warn, info, debug, trace\n\n\
                    Please update level in the [logging] section."
                )
            }
            ConfigValidationError::CustomMappingsPath { path } => {
                format!(
                    "Custom mappings file not found!\n\n\
                    Your configured path: '{path}'\n\n\
                    Please update custom_mappings in the [conversion] section or remove it."
                )
            }
        }
    }
}

/// Join several validation errors into one message for the user.
pub fn combine_user_messages(errors: &[ConfigValidationError]) -> String {
    let messages: Vec<String> = errors.iter().map(|e| e.user_message()).collect();
    format!(
        "Configuration validation failed:\n{}",
        messages.join("\n\n")
    )
}
