//! Operational error context and centralized reporting.

use std::{error::Error as StdError, fmt::Display};

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::{debug, error, warn},
};

/// Extension trait for attaching context to foreign errors.
pub trait ResultExt<T, E> {
    /// Adds a static context message.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Adds a formatted context message.
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }

    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_context(|| format.to_string())
    }
}

/// Routes recovered errors to the log.
///
/// Stores never surface persistence failures to the user; they report them
/// here and carry on with in-memory state.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Reports an expected, fully recovered condition.
    pub fn debug(error: &Error, context: &str) {
        debug!(context = context, error = %Self::to_user_message(error), "Recovered error");
    }

    /// Reports a recoverable failure worth noticing.
    pub fn warn(error: &Error, context: &str) {
        warn!(context = context, error = %Self::to_user_message(error), "Recoverable error");
    }

    /// Reports a failure that left an operation incomplete.
    pub fn error(error: &Error, context: &str) {
        error!(context = context, error = %Self::to_user_message(error), "Operation failed");
    }

    /// Reports a typed failure, keeping its whole `source()` chain.
    pub fn error_source(error: &(dyn StdError + 'static), context: &str) {
        error!(context = context, error = %Self::chain_message(error), "Operation failed");
    }

    /// Flattens a typed error and its sources into a single line.
    pub fn chain_message(error: &(dyn StdError + 'static)) -> String {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// Flattens the error chain into a single line, outermost context first.
    pub fn to_user_message(error: &Error) -> String {
        error
            .chain()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(": ")
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error as IoError, ErrorKind::NotFound};

    use {anyhow::anyhow, thiserror::Error};

    use crate::error::{
        GenerationError,
        operational::{ErrorReporter, ResultExt},
    };

    #[derive(Error, Debug)]
    #[error("Submitting job")]
    struct SubmitError {
        #[source]
        source: IoError,
    }

    #[test]
    fn test_result_ext_with_context() {
        let result: Result<(), IoError> = Err(IoError::new(NotFound, "missing"));
        let error = result.add_context("Reading settings").unwrap_err();

        assert_eq!(error.to_string(), "Reading settings");
        assert_eq!(error.root_cause().to_string(), "missing");
    }

    #[test]
    fn test_result_ext_with_contextf() {
        let result: Result<(), IoError> = Err(IoError::new(NotFound, "missing"));
        let error = result.add_contextf(format!("Reading {}", "theme.json")).unwrap_err();

        assert_eq!(error.to_string(), "Reading theme.json");
    }

    #[test]
    fn test_user_message_joins_chain() {
        let result: Result<(), IoError> = Err(IoError::new(NotFound, "no such file"));
        let error = result.add_context("Loading settings").unwrap_err();

        assert_eq!(
            ErrorReporter::to_user_message(&error),
            "Loading settings: no such file"
        );
        assert_eq!(ErrorReporter::to_user_message(&anyhow!("plain")), "plain");
    }

    #[test]
    fn test_chain_message_walks_sources() {
        let error = SubmitError {
            source: IoError::new(NotFound, "connection refused"),
        };
        assert_eq!(
            ErrorReporter::chain_message(&error),
            "Submitting job: connection refused"
        );

        let payload = serde_json::from_str::<u32>("{").unwrap_err();
        let cause = payload.to_string();
        let error = GenerationError::PayloadError(payload);
        let message = ErrorReporter::chain_message(&error);
        assert!(message.starts_with("Payload encoding error"));
        assert!(message.ends_with(&format!(": {cause}")));

        ErrorReporter::error_source(&error, "Submitting generation request");
    }
}
