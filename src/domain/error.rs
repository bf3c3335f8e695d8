use thiserror::Error;

/// Message used when the endpoint answers 2xx but no candidate text can be found.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid API response structure.";

/// Failure of a single generate call.
///
/// `Display` renders only the underlying message; [`AssistError::banner`] adds
/// the `API Error: ` prefix shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistError {
    /// The request could not be sent or the response body could not be read.
    #[error("{0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("Invalid API response structure.")]
    MalformedResponse,
}

impl AssistError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn service(status: u16, msg: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: msg.into(),
        }
    }

    pub fn banner(&self) -> String {
        format!("API Error: {self}")
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse)
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Assist(#[from] AssistError),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn as_assist(&self) -> Option<&AssistError> {
        match self {
            Self::Assist(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_prefixes_service_message() {
        let err = AssistError::service(429, "rate limited");
        assert_eq!(err.banner(), "API Error: rate limited");
    }

    #[test]
    fn malformed_banner_uses_fixed_message() {
        assert_eq!(
            AssistError::MalformedResponse.banner(),
            format!("API Error: {INVALID_RESPONSE_MESSAGE}")
        );
    }

    #[test]
    fn assist_error_converts_into_domain_error() {
        let err: DomainError = AssistError::transport("connection refused").into();
        assert_eq!(err.to_string(), "connection refused");
        assert!(err.as_assist().is_some_and(AssistError::is_transport));
    }
}
