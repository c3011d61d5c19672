use thiserror::Error;

/// Failure contract shared by every service client.
///
/// The orchestrator reacts differently to each variant: `Unreachable` and
/// `RemoteRejected` trigger the stage fallback directly, while
/// `MalformedResponse` means the body arrived but failed schema validation;
/// the client has already attempted best-effort partial extraction by the
/// time this surfaces.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Connection failure or timeout. A timed-out call is indistinguishable
    /// from an unreachable service.
    #[error("service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a non-2xx status.
    #[error("service rejected request (status {status}): {body}")]
    RemoteRejected { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ServiceError {
    /// Map a transport-level error onto the taxonomy. Status errors keep the
    /// code; everything else (connect, timeout, aborted body) is unreachable.
    pub fn from_transport(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ServiceError::RemoteRejected {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => ServiceError::Unreachable(err.to_string()),
        }
    }
}
