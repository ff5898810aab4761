#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("relative url with no page origin to resolve it against")]
    NoBase,

    #[error("server answered {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),
}
