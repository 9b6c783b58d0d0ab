use config::ConfigError;
use mongodb::error::{Error as DBError, ErrorKind as DBErrorKind};
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("Cannot reach the database: {0}")]
    Connection(#[source] DBError),
    #[error("There's a problem with the database: {0}")]
    DbError(#[source] DBError),
    #[error("The database sent an unusable reply: {0}")]
    Rejected(String),
    #[error("Cannot load settings: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
    #[error("Step `{step}` failed: {source}")]
    StepFailed {
        step: String,
        #[source]
        source: Box<Error>,
    },
}

/// Coarse origin of a failure, used when reporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connection,
    Operation,
    Configuration,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Connection => write!(f, "connection failure"),
            FailureKind::Operation => write!(f, "operation failure"),
            FailureKind::Configuration => write!(f, "configuration failure"),
        }
    }
}

impl Error {
    pub fn step_failed(step: impl Into<String>, source: Error) -> Self {
        Error::StepFailed {
            step: step.into(),
            source: Box::new(source),
        }
    }

    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Error::Connection(_) => FailureKind::Connection,
            Error::DbError(e) => {
                if is_connection_error(e) {
                    FailureKind::Connection
                } else {
                    FailureKind::Operation
                }
            }
            Error::Rejected(_) => FailureKind::Operation,
            Error::ConfigError(_) | Error::InvalidSetting { .. } => FailureKind::Configuration,
            Error::StepFailed { source, .. } => source.failure_kind(),
        }
    }

    /// Name of the catalog step that failed, if the failure came from one.
    pub fn step(&self) -> Option<&str> {
        match self {
            Error::StepFailed { step, .. } => Some(step.as_str()),
            _ => None,
        }
    }
}

fn is_connection_error(e: &DBError) -> bool {
    matches!(
        e.kind.as_ref(),
        DBErrorKind::Io(_)
            | DBErrorKind::ServerSelection { .. }
            | DBErrorKind::Authentication { .. }
            | DBErrorKind::DnsResolve { .. }
            | DBErrorKind::ConnectionPoolCleared { .. }
    )
}

// Global error handler
pub fn report_error(e: &Error) {
    let kind = e.failure_kind();
    match e.step() {
        Some(step) => tracing::error!(%kind, step, "{}", e),
        None => tracing::error!(%kind, "{}", e),
    }
}
