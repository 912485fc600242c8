use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Failed to fetch {file}: HTTP {status}")]
    FetchError { file: String, status: u16 },

    #[error("Malformed data in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No role defines a start or end year, the timeline is empty")]
    EmptyTimeline,

    #[error("Map surface error: {message}")]
    SurfaceError { message: String },

    #[error("Failed to render {what}: {source}")]
    OutputError {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Network,
    Data,
    Configuration,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AtlasError {
    pub fn parse(file: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ParseError {
            file: file.into(),
            source,
        }
    }

    pub fn output(what: impl Into<String>, source: serde_json::Error) -> Self {
        Self::OutputError {
            what: what.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::HttpError(_) | Self::FetchError { .. } => ErrorCategory::Network,
            Self::ParseError { .. } | Self::EmptyTimeline => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::SurfaceError { .. } | Self::OutputError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SurfaceError { .. } | Self::OutputError { .. } => ErrorSeverity::Medium,
            Self::HttpError(_) | Self::FetchError { .. } => ErrorSeverity::Medium,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::ParseError { .. } | Self::EmptyTimeline => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the data directory exists and is readable",
            Self::HttpError(_) | Self::FetchError { .. } => {
                "Check the base URL and that the data files are served"
            }
            Self::ParseError { .. } => "Fix the JSON syntax or shape of the named data file",
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            Self::EmptyTimeline => "Add startYear/endYear values to roles.json",
            Self::SurfaceError { .. } => "Restart the map surface",
            Self::OutputError { .. } => "Retry with --format text",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read data files: {}", e),
            Self::HttpError(e) => format!("Could not download data files: {}", e),
            Self::FetchError { file, status } => {
                format!("Server answered {} for {}", status, file)
            }
            Self::ParseError { file, .. } => format!("{} is not valid career data", file),
            Self::EmptyTimeline => "The roles dataset has no years to build a timeline from".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AtlasError>;
