use http::StatusCode;

/// Trait for domain errors that can be rendered as HTTP responses
///
/// Implemented by each feature crate's error type. The handler layer turns
/// these into status/envelope pairs, keeping domain errors decoupled
/// from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Diagnostic detail relayed alongside the message, when one exists
    fn detail(&self) -> Option<String> {
        None
    }
}
