pub mod binary;
pub mod decoder;
pub mod encoder;

use std::sync::OnceLock;

use hpackx_dsa::StaticTable;

pub use decoder::Decoder;
pub use encoder::Encoder;

/// Bits per encoded index on the wire.
pub const INDEX_WIDTH: usize = 8;

static STANDARD_TABLE: OnceLock<StaticTable> = OnceLock::new();

/// The process-wide standard table, built on first use and never mutated.
pub fn standard_table() -> &'static StaticTable {
    STANDARD_TABLE.get_or_init(|| {
        let table = StaticTable::standard();
        tracing::debug!(entries = table.len(), "standard static table initialized");
        table
    })
}
