//! Model error types.

/// Errors raised while building model values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The verb is not one of the functions the API accepts.
    #[error("function type {verb} not recognized, must be one of {allowed}")]
    UnsupportedVerb {
        /// The rejected verb as supplied by the caller.
        verb: String,
        /// Comma-separated list of accepted verbs.
        allowed: String,
    },
}
