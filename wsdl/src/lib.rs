use std::path::Path;
use url::Url;

mod parser;

pub mod error;
pub mod namespace;
pub mod types;

/// Reads and decodes the WSDL document at `location`, which may be a
/// filesystem path or a `file`, `http` or `https` URL.
pub fn parse<S: AsRef<str>>(location: S) -> Result<types::Definition, error::Error> {
    let url = resolve(location.as_ref())?;
    let bytes = read_url(&url)?;
    parse_bytes(&bytes)
}

/// Decodes an in-memory WSDL document.
pub fn parse_bytes(bytes: &[u8]) -> Result<types::Definition, error::Error> {
    parser::parse(bytes)
}

fn resolve(location: &str) -> Result<Url, error::Error> {
    match Url::parse(location) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = Path::new(location);
            let path = path
                .canonicalize()
                .map_err(|source| error::Error::ReadError {
                    path: path.to_owned(),
                    source,
                })?;

            Url::from_file_path(&path)
                .map_err(|()| error::Error::PathConversionError(path.display().to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

fn read_url(url: &Url) -> Result<Vec<u8>, error::Error> {
    log::debug!("reading WSDL from {}", url);

    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| error::Error::PathConversionError(url.to_string()))?;

            std::fs::read(&path).map_err(|source| error::Error::ReadError { path, source })
        }

        "http" | "https" => {
            let response = reqwest::blocking::get(url.clone())?.error_for_status()?;
            Ok(response.bytes()?.to_vec())
        }

        other => Err(error::Error::UnsupportedScheme(other.into())),
    }
}
