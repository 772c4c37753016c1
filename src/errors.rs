use thiserror::Error;

/// The one handled failure kind: the logout request was rejected before any
/// response arrived. Completed responses are never errors here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("request failed")]
    RequestError,
}

impl From<reqwest::Error> for Error {
    fn from(_error: reqwest::Error) -> Self {
        Error::RequestError
    }
}
