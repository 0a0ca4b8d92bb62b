use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerbDeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Verb not found: {0}")]
    VerbNotFound(u32),

    #[error("VerbDeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for VerbDeckError {
    fn from(error: std::io::Error) -> Self {
        VerbDeckError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for VerbDeckError {
    fn from(error: reqwest::Error) -> Self {
        VerbDeckError::Reqwest(Box::new(error))
    }
}
