//! Domain Errors - rule violations and collaborator failures
//!
//! Query failures never leave the dispatcher as errors; `ProviderError`
//! only travels from a provider to the point where it becomes `QueryState::Failed`.

use thiserror::Error;

/// Domain-specific errors for geometry and draw lifecycle rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Latitude outside [-90, 90] or not finite
    #[error("Invalid latitude: {0}")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] or not finite
    #[error("Invalid longitude: {0}")]
    InvalidLongitude(f64),

    /// Coordinate text could not be parsed as "lat,lon"
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// A polygon needs at least three vertices
    #[error("Ring has {vertices} vertices, at least 3 are required")]
    IncompleteRing { vertices: usize },

    /// Map surface is not available, drawing tool stays disarmed
    #[error("Map surface is not ready")]
    SurfaceNotReady,

    /// Surface event does not apply in the current draw state
    #[error("Event {event} is not valid in state {state}")]
    InvalidTransition { state: String, event: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Check if error is an input validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidLatitude(_)
                | DomainError::InvalidLongitude(_)
                | DomainError::InvalidCoordinate(_)
                | DomainError::IncompleteRing { .. }
        )
    }

    /// Check if error is an unmet precondition (not a fault)
    pub fn is_precondition_error(&self) -> bool {
        matches!(self, DomainError::SurfaceNotReady)
    }

    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        if self.is_validation_error() {
            ErrorCategory::Validation
        } else if self.is_precondition_error() {
            ErrorCategory::Precondition
        } else {
            ErrorCategory::Lifecycle
        }
    }
}

/// Categories of domain errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input validation errors
    Validation,
    /// Surface availability
    Precondition,
    /// Out-of-order draw events
    Lifecycle,
}

/// Failures reported by a region data collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Region data service unavailable: {0}")]
    Unavailable(String),

    #[error("Region data service returned malformed data: {0}")]
    MalformedResponse(String),

    #[error("Region data service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Region data provider misconfigured: {0}")]
    Configuration(String),
}

/// Provider result type
pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// Human-readable message for a failed panel
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::Unavailable(_) | ProviderError::Http { .. } => {
                format!("Could not reach the data service. {self}")
            }
            ProviderError::MalformedResponse(_) => {
                "The data service returned data that could not be read.".to_string()
            }
            ProviderError::Configuration(detail) => {
                format!("Region data is not configured: {detail}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categorization() {
        assert_eq!(
            DomainError::IncompleteRing { vertices: 2 }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::SurfaceNotReady.category(),
            ErrorCategory::Precondition
        );
        let transition = DomainError::InvalidTransition {
            state: "Idle".to_string(),
            event: "Deleted".to_string(),
        };
        assert_eq!(transition.category(), ErrorCategory::Lifecycle);
        assert!(!transition.is_validation_error());
    }

    #[test]
    fn test_error_messages() {
        let error = DomainError::IncompleteRing { vertices: 2 };
        assert!(error.to_string().contains("2 vertices"));

        let error = ProviderError::Http {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert!(error.to_string().contains("503"));
        assert!(error.user_message().contains("Could not reach"));
    }
}
