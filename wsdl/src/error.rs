use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to parse provided URL")]
    UrlParseError(#[from] url::ParseError),

    #[error("Unable to convert {0} between a path and a URL")]
    PathConversionError(String),

    #[error("Unsupported URL scheme {0}")]
    UnsupportedScheme(String),

    #[error("Unable to read {}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unable to get file from server")]
    FetchError(#[from] reqwest::Error),

    #[error("Error parsing XML input")]
    XmlParseError(#[from] quick_xml::Error),

    #[error("XML input has no root element")]
    MissingRootElement,

    #[error("XML input ended with {open} unclosed element(s)")]
    UnexpectedEof { open: usize },
}
