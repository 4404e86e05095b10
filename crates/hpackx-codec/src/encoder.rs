use hpackx_core::{CodecConfig, HeaderSet, HpackError, NameMatch, Result};
use hpackx_dsa::{StaticTable, MAX_ENTRIES};

use crate::binary::to_fixed_width_binary;
use crate::INDEX_WIDTH;

/// Turns a header set into a stream of 8-bit table indices.
///
/// Only the index travels. The value given for a header is used to pick
/// between rows that share a name (`:method: POST` encodes as row 2, not
/// row 1), and is otherwise dropped: the decoder returns the row's canonical
/// value.
#[derive(Clone, Copy, Debug)]
pub struct Encoder<'t> {
    table: &'t StaticTable,
    config: CodecConfig,
}

impl Encoder<'static> {
    /// Encoder over the standard table with default config.
    pub fn standard() -> Self {
        Self::new(crate::standard_table(), CodecConfig::default())
    }
}

impl<'t> Encoder<'t> {
    pub fn new(table: &'t StaticTable, config: CodecConfig) -> Self {
        Self { table, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Resolves the wire index for one header: a full name+value match wins,
    /// then the first row carrying the name.
    ///
    /// `StaticTable::from_entries` already refuses more than `MAX_ENTRIES`
    /// rows, so the 8-bit capacity check below is unreachable for any table
    /// this crate can build; it remains as the encoder's own wire guard.
    pub fn resolve(&self, name: &str, value: &str) -> Result<usize> {
        let found = match self.config.name_match {
            NameMatch::Exact => self
                .table
                .find(name, value)
                .or_else(|| self.table.index_of(name)),
            NameMatch::AsciiCaseInsensitive => self
                .table
                .find_ignore_case(name, value)
                .or_else(|| self.table.index_of_ignore_case(name)),
        };
        let index = found.ok_or_else(|| HpackError::UnsupportedHeaderName(name.to_string()))?;

        // Reject rather than let to_fixed_width_binary drop high bits.
        if index >= MAX_ENTRIES {
            return Err(HpackError::IndexOutOfRange {
                index,
                len: MAX_ENTRIES,
            });
        }
        Ok(index)
    }

    pub fn encode(&self, headers: &HeaderSet) -> Result<String> {
        let mut out = String::with_capacity(headers.len() * INDEX_WIDTH);
        for field in headers {
            let index = self.resolve(field.name(), field.value())?;
            tracing::trace!(name = field.name(), index, "header indexed");
            out.push_str(&to_fixed_width_binary(index as u64, INDEX_WIDTH));
        }
        tracing::debug!(headers = headers.len(), bits = out.len(), "header set encoded");
        Ok(out)
    }

    /// Parses a CRLF header block and encodes it.
    pub fn encode_block(&self, text: &str) -> Result<String> {
        let headers = HeaderSet::parse_block(text)?;
        self.encode(&headers)
    }
}
