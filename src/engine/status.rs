//! Status token normalization and caller-configurable alias sets.

use std::collections::HashSet;

use crate::dataset::Cell;

/// Trim and upper-case text cells; everything else passes through unchanged.
pub fn normalize_status(cell: &Cell) -> Cell {
    match cell {
        Cell::Text(s) => Cell::Text(s.trim().to_uppercase()),
        other => other.clone(),
    }
}

/// A set of normalized status tokens the caller wants treated as one
/// transition class ("In Progress" or "Done").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSet(HashSet<String>);

impl AliasSet {
    /// Parse a comma-separated alias list: split on commas, trim each
    /// token, upper-case, drop empty tokens.
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(',')
            .map(|token| token.trim().to_uppercase())
            .filter(|token| !token.is_empty())
            .collect();
        AliasSet(tokens)
    }

    /// Membership test against an already-normalized status token.
    pub fn contains(&self, status: &str) -> bool {
        self.0.contains(status)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
