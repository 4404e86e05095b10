use std::collections::HashMap;

use crate::error::{HpackError, Result};
use hpackx_dsa::HeaderField;

/// A header map with unique names that iterates in insertion order.
///
/// Re-inserting a name replaces its value but keeps its original position, so
/// a decoded set lists names in the order their first index appeared.
/// Lookups and inserts go through a name-to-position index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderSet {
    fields: Vec<HeaderField>,
    positions: HashMap<String, usize>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. Returns the previous value for `name`, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.positions.get(&name) {
            Some(&pos) => {
                let old = std::mem::replace(&mut self.fields[pos], HeaderField::new(name, value));
                Some(old.into_parts().1)
            }
            None => {
                self.positions.insert(name.clone(), self.fields.len());
                self.fields.push(HeaderField::new(name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&pos| self.fields[pos].value())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.fields.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(HeaderField::name)
    }

    /// Parses a CRLF-separated header block.
    ///
    /// Each line splits on its *last* colon, so `:method: POST` yields the
    /// name `:method`. Note that a value holding a colon (`host: a:8080`)
    /// splits inside the value. Blank lines are skipped; a repeated name keeps
    /// the last value.
    pub fn parse_block(text: &str) -> Result<Self> {
        let mut set = HeaderSet::new();
        for line in text.split("\r\n") {
            if line.trim().is_empty() {
                continue;
            }
            let colon = line.rfind(':').ok_or_else(|| {
                HpackError::InvalidFormat(format!("header line without colon: {:?}", line))
            })?;
            let name = line[..colon].trim();
            let value = line[colon + 1..].trim();
            if name.is_empty() {
                return Err(HpackError::InvalidFormat(format!(
                    "header line without name: {:?}",
                    line
                )));
            }
            set.insert(name, value);
        }
        Ok(set)
    }

    /// Renders one `name:value\r\n` line per header.
    pub fn to_block(&self) -> String {
        let mut out = String::new();
        for field in &self.fields {
            out.push_str(field.name());
            out.push(':');
            out.push_str(field.value());
            out.push_str("\r\n");
        }
        out
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = HeaderSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a HeaderSet {
    type Item = &'a HeaderField;
    type IntoIter = std::slice::Iter<'a, HeaderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
