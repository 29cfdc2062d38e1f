//! Error types for catalog input, configuration and orbit operations.
//!
//! The starmap and blurb computations never fail; degenerate rows are dropped
//! or described with fallback text. Errors only surface at the edges: reading
//! catalog data, loading configuration, validating filters and building orbit
//! diagrams.

use std::fmt;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Structured context for catalog errors.
///
/// Provides additional information about where and why an error occurred.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "load_catalog", "orbit_diagram")
    pub operation: Option<String>,
    /// The entity type involved (e.g., "planet", "host", "config")
    pub entity: Option<String>,
    /// The entity name if applicable
    pub entity_id: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity type.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set the entity name.
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    fn is_empty(&self) -> bool {
        self.operation.is_none()
            && self.entity.is_none()
            && self.entity_id.is_none()
            && self.details.is_none()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref entity) = self.entity {
            parts.push(format!("entity={}", entity));
        }
        if let Some(ref id) = self.entity_id {
            parts.push(format!("id={}", id));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog input could not be deserialized.
    #[error("Parse error: {message} {context}")]
    Parse {
        message: String,
        context: ErrorContext,
    },

    /// Reading a catalog or configuration file failed.
    #[error("I/O error: {message} {context}")]
    Io {
        message: String,
        context: ErrorContext,
    },

    /// Configuration file missing, malformed or out of range.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    /// Filter thresholds are inconsistent (e.g. inverted temperature range).
    #[error("Invalid filter: {message} {context}")]
    InvalidFilter {
        message: String,
        context: ErrorContext,
    },

    /// Orbital elements cannot describe a closed orbit.
    #[error("Invalid orbit: {message} {context}")]
    InvalidOrbit {
        message: String,
        context: ErrorContext,
    },

    /// Requested planet or host is not in the catalog.
    #[error("Not found: {message} {context}")]
    NotFound {
        message: String,
        context: ErrorContext,
    },
}

impl CatalogError {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create an invalid filter error.
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create an invalid orbit error.
    pub fn invalid_orbit(message: impl Into<String>) -> Self {
        Self::InvalidOrbit {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    /// Replace the context attached to this error.
    pub fn with_context(mut self, new_context: ErrorContext) -> Self {
        match &mut self {
            Self::Parse { context, .. }
            | Self::Io { context, .. }
            | Self::Configuration { context, .. }
            | Self::InvalidFilter { context, .. }
            | Self::InvalidOrbit { context, .. }
            | Self::NotFound { context, .. } => *context = new_context,
        }
        self
    }

    /// Get the error context.
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Parse { context, .. }
            | Self::Io { context, .. }
            | Self::Configuration { context, .. }
            | Self::InvalidFilter { context, .. }
            | Self::InvalidOrbit { context, .. }
            | Self::NotFound { context, .. } => context,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::parse(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("orbit_diagram")
            .with_entity("planet")
            .with_entity_id("Kepler-22 b")
            .with_details("eccentricity >= 1");
        assert_eq!(
            ctx.to_string(),
            "[operation=orbit_diagram, entity=planet, id=Kepler-22 b, details=eccentricity >= 1]"
        );
    }

    #[test]
    fn test_empty_context_renders_nothing() {
        let err = CatalogError::not_found("planet missing");
        assert_eq!(err.to_string(), "Not found: planet missing ");
    }

    #[test]
    fn test_with_context_replaces_context() {
        let err = CatalogError::invalid_filter("inverted range")
            .with_context(ErrorContext::new("validate_filter"));
        assert_eq!(
            err.context().operation.as_deref(),
            Some("validate_filter")
        );
        assert!(err.to_string().contains("operation=validate_filter"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CatalogError = io.into();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
