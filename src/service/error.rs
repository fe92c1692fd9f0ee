use thiserror::Error;

/// Failures while talking to the listings API from the client side.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Request to listings API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Listings API returned {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Property {0} not found")]
    PropertyNotFound(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::PropertyNotFound(_))
    }
}
