use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Entity with ID={id} not found")]
    EntityNotFound { id: String },

    #[error("No entity matches the given filter")]
    NoMatch,

    #[error("Customer not found: {id}")]
    CustomerNotFound { id: String },

    #[error("Customer already exists: {id}")]
    DuplicateCustomer { id: String },

    #[error("Customer store lock is poisoned")]
    StorePoisoned,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Argument,
    Lookup,
    Conflict,
    Internal,
    Configuration,
}

impl RegistryError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        RegistryError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::InvalidArgument { .. } => ErrorCategory::Argument,
            RegistryError::EntityNotFound { .. }
            | RegistryError::NoMatch
            | RegistryError::CustomerNotFound { .. } => ErrorCategory::Lookup,
            RegistryError::DuplicateCustomer { .. } => ErrorCategory::Conflict,
            RegistryError::StorePoisoned => ErrorCategory::Internal,
            RegistryError::ConfigError { .. } | RegistryError::IoError(_) => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Short message meant for terminal output rather than logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::InvalidArgument { field, reason } => {
                format!("Rejected value for {}: {}", field, reason)
            }
            RegistryError::DuplicateCustomer { id } => {
                format!("A customer with id '{}' is already registered", id)
            }
            RegistryError::CustomerNotFound { id } | RegistryError::EntityNotFound { id } => {
                format!("Nothing is stored under id '{}'", id)
            }
            RegistryError::ConfigError { message } => {
                format!("Could not load configuration: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
