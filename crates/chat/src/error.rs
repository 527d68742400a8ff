use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Chat service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected chat response: {0}")]
    Decode(String),
}
