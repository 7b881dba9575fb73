//! Error types for the leveled logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Slot index outside `[0, count)`
    #[error("Slot index {index} out of range: logger has {count} slots")]
    SlotOutOfRange { index: i32, count: usize },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Process-scope context installed twice
    #[error("Logger context already initialized")]
    AlreadyInitialized,

    /// Invalid configuration with details, such as unknown flag bits
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a slot range error
    pub fn slot_out_of_range(index: i32, count: usize) -> Self {
        LoggerError::SlotOutOfRange { index, count }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// True for the index-range kind
    pub fn is_index_error(&self) -> bool {
        matches!(self, LoggerError::SlotOutOfRange { .. })
    }
}
