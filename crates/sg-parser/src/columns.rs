//! Column-index resolver: where each known metric sits in a section's rows.

use std::collections::BTreeMap;

/// Every column name the assembler knows how to extract.
///
/// New sar versions that rename a column only need an entry here and in
/// the assembler's alias lists.
pub const VOCABULARY: &[&str] = &[
    // cpu
    "%usr", "%user", "%nice", "%sys", "%system", "%idle", "%iowait",
    // process / context switch
    "cswch/s", "proc/s",
    // load
    "ldavg-1", "ldavg-5", "ldavg-15", "runq-sz", "plist-sz",
    // memory / swap
    "kbmemfree", "kbmemused", "kbcached", "kbswpfree", "kbswpused",
    // paging
    "pswpin/s", "pswpout/s",
    // filesystem
    "dentunusd", "file-nr", "inode-nr", "file-sz", "inode-sz",
    // sockets
    "tcpsck", "udpsck",
    // block io
    "bread/s", "bwrtn/s",
];

/// Positions of vocabulary columns within one section's rows.
///
/// Built fresh from a single header line, so a column missing from that
/// header is absent here rather than inherited from an earlier section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: BTreeMap<&'static str, usize>,
}

impl ColumnIndex {
    /// Index the vocabulary columns present in a tokenized header line.
    pub fn from_header<S: AsRef<str>>(tokens: &[S]) -> Self {
        let positions = tokens
            .iter()
            .enumerate()
            .filter_map(|(pos, token)| {
                VOCABULARY
                    .iter()
                    .find(|name| **name == token.as_ref())
                    .map(|name| (*name, pos))
            })
            .collect();
        Self { positions }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Position of the first of `names` present in this index.
    pub fn resolve(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|n| self.get(n))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
