use crate::input::LoadError;
use std::fmt;
use thiserror::Error;

/// External collaborator that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Grammar,
    Tagger,
    Lexicon,
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Grammar => write!(f, "grammar checker"),
            Service::Tagger => write!(f, "POS tagger"),
            Service::Lexicon => write!(f, "synonym lexicon"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AssistError {
    /// The service could not be reached or failed internally. Never retried
    /// inside the pipeline.
    #[error("{service} unavailable: {reason}")]
    ServiceUnavailable { service: Service, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl AssistError {
    pub fn unavailable(service: Service, reason: impl Into<String>) -> Self {
        AssistError::ServiceUnavailable {
            service,
            reason: reason.into(),
        }
    }

    pub fn service(&self) -> Option<Service> {
        match self {
            AssistError::ServiceUnavailable { service, .. } => Some(*service),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistError>;
