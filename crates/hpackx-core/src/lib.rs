pub mod config;
pub mod error;
pub mod header;

pub use config::{CodecConfig, NameMatch, TrailingBits};
pub use error::{HpackError, Result};
pub use header::HeaderSet;
pub use hpackx_dsa::HeaderField;
