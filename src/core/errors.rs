use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashdeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Fetch error: {0}")]
    Fetch(Box<reqwest::Error>),

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("FlashdeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for FlashdeckError {
    fn from(error: std::io::Error) -> Self {
        FlashdeckError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for FlashdeckError {
    fn from(error: reqwest::Error) -> Self {
        FlashdeckError::Fetch(Box::new(error))
    }
}
