use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::field::HeaderField;

/// Largest table an 8-bit index can address.
pub const MAX_ENTRIES: usize = 1 << 8;

/// The pre-shared header table. Both peers must embed this list identically;
/// position in the slice is the wire index.
pub const STANDARD_ENTRIES: &[(&str, &str)] = &[
    (":authority", ""),                   // 0
    (":method", "GET"),                   // 1
    (":method", "POST"),                  // 2
    (":path", "/"),                       // 3
    (":path", "/index.html"),             // 4
    (":scheme", "http"),                  // 5
    (":scheme", "https"),                 // 6
    (":status", "200"),                   // 7
    (":status", "204"),                   // 8
    (":status", "206"),                   // 9
    (":status", "304"),                   // 10
    (":status", "400"),                   // 11
    (":status", "404"),                   // 12
    (":status", "500"),                   // 13
    ("accept-charset", ""),               // 14
    ("accept-encoding", "gzip, deflate"), // 15
    ("accept-language", ""),              // 16
    ("accept-ranges", ""),                // 17
    ("accept", ""),                       // 18
    ("access-control-allow-origin", ""),  // 19
    ("age", ""),                          // 20
    ("allow", ""),                        // 21
    ("authorization", ""),                // 22
    ("cache-control", ""),                // 23
    ("content-disposition", ""),          // 24
    ("content-encoding", ""),             // 25
    ("content-language", ""),             // 26
    ("content-length", ""),               // 27
    ("content-location", ""),             // 28
    ("content-range", ""),                // 29
    ("content-type", ""),                 // 30
    ("cookie", ""),                       // 31
    ("date", ""),                         // 32
    ("etag", ""),                         // 33
    ("expect", ""),                       // 34
    ("expires", ""),                      // 35
    ("from", ""),                         // 36
    ("host", ""),                         // 37
    ("if-match", ""),                     // 38
    ("if-modified-since", ""),            // 39
    ("if-none-match", ""),                // 40
    ("if-range", ""),                     // 41
    ("if-unmodified-since", ""),          // 42
    ("last-modified", ""),                // 43
    ("link", ""),                         // 44
    ("location", ""),                     // 45
    ("max-forwards", ""),                 // 46
    ("proxy-authenticate", ""),           // 47
    ("proxy-authorization", ""),          // 48
    ("range", ""),                        // 49
    ("referer", ""),                      // 50
    ("refresh", ""),                      // 51
    ("retry-after", ""),                  // 52
    ("server", ""),                       // 53
    ("set-cookie", ""),                   // 54
    ("strict-transport-security", ""),    // 55
    ("transfer-encoding", ""),            // 56
    ("user-agent", ""),                   // 57
    ("vary", ""),                         // 58
    ("via", ""),                          // 59
    ("www-authenticate", ""),             // 60
];

static_assertions::const_assert!(STANDARD_ENTRIES.len() <= MAX_ENTRIES);
static_assertions::const_assert_eq!(STANDARD_ENTRIES.len(), 61);

/// Returned by [`StaticTable::entry_at`] for a position past the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for table of {} entries", self.index, self.len)
    }
}

/// An immutable, position-addressed header table.
///
/// ## Lookup
/// `index_of` is served from a name map built once at construction. The map
/// keeps only the first position of every name, so duplicate names (the two
/// `:method` rows, the seven `:status` rows) always resolve to the earliest
/// row, same as a front-to-back scan.
pub struct StaticTable {
    entries: Vec<HeaderField>,
    first_by_name: BTreeMap<String, usize>,
}

impl fmt::Debug for StaticTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTable")
            .field("entries_len", &self.entries.len())
            .field("distinct_names", &self.first_by_name.len())
            .finish()
    }
}

impl StaticTable {
    /// Builds the standard 61-entry table.
    pub fn standard() -> Self {
        Self::build(
            STANDARD_ENTRIES
                .iter()
                .map(|&(n, v)| HeaderField::new(n, v))
                .collect(),
        )
    }

    /// Builds a table from arbitrary entries.
    ///
    /// Fails when the entries do not fit the 8-bit index space; the error's
    /// `index` is the first position that cannot be addressed.
    pub fn from_entries<I>(entries: I) -> Result<Self, IndexOutOfRange>
    where
        I: IntoIterator<Item = HeaderField>,
    {
        let entries: Vec<HeaderField> = entries.into_iter().collect();
        if entries.len() > MAX_ENTRIES {
            return Err(IndexOutOfRange {
                index: MAX_ENTRIES,
                len: entries.len(),
            });
        }
        Ok(Self::build(entries))
    }

    fn build(entries: Vec<HeaderField>) -> Self {
        let mut first_by_name = BTreeMap::new();
        for (idx, field) in entries.iter().enumerate() {
            first_by_name.entry(String::from(field.name())).or_insert(idx);
        }

        Self {
            entries,
            first_by_name,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderField> {
        self.entries.iter()
    }

    /// Returns the entry at `index`.
    #[inline]
    pub fn entry_at(&self, index: usize) -> Result<&HeaderField, IndexOutOfRange> {
        self.entries.get(index).ok_or(IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// First position whose name equals `name` exactly (case-sensitive).
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.first_by_name.get(name).copied()
    }

    /// First position whose name equals `name` under ASCII case folding.
    pub fn index_of_ignore_case(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name().eq_ignore_ascii_case(name))
    }

    /// First position whose name and value both match.
    pub fn find(&self, name: &str, value: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name() == name && e.value() == value)
    }

    /// Same as [`find`](Self::find) with the name compared under ASCII case
    /// folding. Values are always compared exactly.
    pub fn find_ignore_case(&self, name: &str, value: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name().eq_ignore_ascii_case(name) && e.value() == value)
    }
}

#[cfg(kani)]
mod proofs {
    use super::*;

    #[kani::proof]
    #[kani::unwind(64)]
    fn prove_entry_at_never_panics() {
        let table = StaticTable::standard();
        let idx: usize = kani::any();
        match table.entry_at(idx) {
            Ok(_) => assert!(idx < table.len()),
            Err(e) => assert!(e.index >= e.len),
        }
    }
}
