use api::ApiError;
use codec::CodecError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Broad classes of failure, used when reporting a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Protocol,
    Payload,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Configuration => "configuration error",
            ErrorKind::Transport => "transport error",
            ErrorKind::Protocol => "protocol error",
            ErrorKind::Payload => "payload error",
        })
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("invalid file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },
    #[error("error parsing the file names: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("error deleting {file_name}: {source}")]
    DeleteLocal { file_name: String, source: io::Error },
    #[error("error reading confirmation: {0}")]
    Prompt(#[source] dialoguer::Error),
    #[error("error writing output: {0}")]
    Output(#[source] io::Error),
    #[error("error encoding JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CliError::Api(e) if e.is_configuration() => ErrorKind::Configuration,
            CliError::Api(ApiError::Transport { .. }) => ErrorKind::Transport,
            CliError::Api(_) => ErrorKind::Protocol,
            CliError::Pattern { .. } => ErrorKind::Configuration,
            CliError::Codec(_)
            | CliError::Glob(_)
            | CliError::DeleteLocal { .. }
            | CliError::Prompt(_)
            | CliError::Output(_)
            | CliError::Json(_) => ErrorKind::Payload,
        }
    }

    /// Raw body of a rejected request, to show alongside the status line
    pub fn response_body(&self) -> Option<&str> {
        match self {
            CliError::Api(e) => e.response_body(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Method, StatusCode};

    #[test]
    fn test_kinds() {
        assert_eq!(
            CliError::from(ApiError::MissingApiKey).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            CliError::from(ApiError::Transport {
                url: "https://example.com".to_string(),
                source: "connection refused".into(),
            })
            .kind(),
            ErrorKind::Transport
        );

        let rejected = CliError::from(ApiError::Status {
            method: Method::Post,
            url: "https://example.com/v1/send".to_string(),
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: "invalid document".to_string(),
        });
        assert_eq!(rejected.kind(), ErrorKind::Protocol);
        assert_eq!(rejected.response_body(), Some("invalid document"));

        let unanswered = CliError::Prompt(dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::NotConnected,
            "not a terminal",
        )));
        assert_eq!(unanswered.kind(), ErrorKind::Payload);
        assert!(unanswered.to_string().contains("not a terminal"));

        let pattern = glob::Pattern::new("[").unwrap_err();
        assert_eq!(
            CliError::Pattern {
                pattern: "[".to_string(),
                source: pattern,
            }
            .kind(),
            ErrorKind::Configuration
        );
    }
}
