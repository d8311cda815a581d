/// failures while claiming profit. the display form is the message surfaced to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ClaimError {
    #[error("{0}")]
    Request(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("unexpected claim response: {0}")]
    InvalidResponse(String),
    #[error("invalid claim endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },
}
