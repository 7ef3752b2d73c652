use thiserror::Error;

/// Errors that can occur while searching for recipes or loading their images
#[derive(Error, Debug)]
pub enum FinderError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The remote service answered with something other than 200 OK
    #[error("Unexpected HTTP status {0}")]
    StatusError(reqwest::StatusCode),

    /// The response body was not valid JSON
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Downloaded bytes could not be decoded as an image
    #[error("Image decode failed: {0}")]
    ImageError(#[from] image::ImageError),

    /// A recipe carried no image URL
    #[error("Recipe has no image URL")]
    MissingImageUrl,

    /// An API credential was found neither in config nor in the environment
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The configured API name does not match any adapter
    #[error("Unknown recipe API: {0}")]
    UnknownApi(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
