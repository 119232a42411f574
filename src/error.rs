// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Svg(String),
    Config(String),
}

impl Error {
    /// Returns the i18n key of the notification shown for this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Image(_) => "error-image-decode",
            Error::Svg(_) => "error-svg",
            Error::Config(_) => "error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
