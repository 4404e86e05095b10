use core::fmt;

use hpackx_dsa::IndexOutOfRange;

pub type Result<T> = core::result::Result<T, HpackError>;

#[derive(Debug)]
pub enum HpackError {
    /// Malformed binary, hex, base64 or header text input.
    InvalidFormat(String),
    /// Index outside the table or outside the 8-bit index space.
    IndexOutOfRange { index: usize, len: usize },
    /// Encode was asked for a name the table does not carry.
    UnsupportedHeaderName(String),
    Config(String),
    Io(std::io::Error),
}

impl fmt::Display for HpackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HpackError::InvalidFormat(msg) => write!(f, "invalid format: {}", msg),
            HpackError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range (limit {})", index, len)
            }
            HpackError::UnsupportedHeaderName(name) => {
                write!(f, "header name {:?} is not in the static table", name)
            }
            HpackError::Config(msg) => write!(f, "config error: {}", msg),
            HpackError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for HpackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HpackError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HpackError {
    fn from(e: std::io::Error) -> Self {
        HpackError::Io(e)
    }
}

impl From<IndexOutOfRange> for HpackError {
    fn from(e: IndexOutOfRange) -> Self {
        HpackError::IndexOutOfRange {
            index: e.index,
            len: e.len,
        }
    }
}

impl From<toml::de::Error> for HpackError {
    fn from(e: toml::de::Error) -> Self {
        HpackError::Config(e.to_string())
    }
}
