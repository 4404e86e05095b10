use hpackx_core::{CodecConfig, HeaderSet, HpackError, Result, TrailingBits};
use hpackx_dsa::StaticTable;

use crate::binary::{split_into_groups, to_integer};
use crate::INDEX_WIDTH;

/// Rebuilds a header set from a stream of 8-bit table indices.
///
/// Each index yields the table row's name and canonical value. Two indices
/// naming the same header collapse into one entry holding the later value,
/// so the result can be shorter than the index count.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'t> {
    table: &'t StaticTable,
    config: CodecConfig,
}

impl Decoder<'static> {
    /// Decoder over the standard table with default config.
    pub fn standard() -> Self {
        Self::new(crate::standard_table(), CodecConfig::default())
    }
}

impl<'t> Decoder<'t> {
    pub fn new(table: &'t StaticTable, config: CodecConfig) -> Self {
        Self { table, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn decode(&self, bits: &str) -> Result<HeaderSet> {
        if bits.is_empty() {
            return Err(HpackError::InvalidFormat("empty index stream".into()));
        }
        if self.config.trailing_bits == TrailingBits::Reject && bits.len() % INDEX_WIDTH != 0 {
            return Err(HpackError::InvalidFormat(format!(
                "stream of {} bits is not a multiple of {}",
                bits.len(),
                INDEX_WIDTH
            )));
        }

        let groups = split_into_groups(bits, INDEX_WIDTH)?;
        let mut headers = HeaderSet::new();
        for group in &groups {
            let index = to_integer(group)? as usize;
            let entry = self.table.entry_at(index)?;
            tracing::trace!(index, name = entry.name(), "index resolved");
            headers.insert(entry.name(), entry.value());
        }
        tracing::debug!(
            indices = groups.len(),
            headers = headers.len(),
            "index stream decoded"
        );
        Ok(headers)
    }

    /// Decodes and renders the result as a CRLF header block.
    pub fn decode_block(&self, bits: &str) -> Result<String> {
        self.decode(bits).map(|headers| headers.to_block())
    }
}
