//! Direction-code mapping.
//!
//! Raw feed direction codes are not globally consistent: most lines
//! report 상행/하행, but the circular 2호선 reports 내선/외선. The
//! mapping from code to canonical direction is configuration loaded
//! alongside the topology, keyed per line with shared defaults.

use std::collections::HashMap;

use crate::domain::{Direction, LineId};

/// Per-line mapping from raw direction codes to canonical directions.
///
/// Lookup checks line-specific entries first, then the defaults. A code
/// with no entry in either is unmappable; the normalizer rejects such
/// records rather than guessing.
#[derive(Debug, Clone, Default)]
pub struct DirectionMapping {
    defaults: Vec<(String, Direction)>,
    per_line: HashMap<LineId, Vec<(String, Direction)>>,
}

impl DirectionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a code that applies to every line without a specific
    /// override.
    pub fn default_code(mut self, code: &str, direction: Direction) -> Self {
        self.defaults.push((code.to_string(), direction));
        self
    }

    /// Register a line-specific code.
    pub fn line_code(mut self, line: &str, code: &str, direction: Direction) -> Self {
        let line = LineId::parse(line).expect("line id literals must be non-empty");
        self.per_line
            .entry(line)
            .or_default()
            .push((code.to_string(), direction));
        self
    }

    /// Resolve a raw code for a line, or `None` if unmappable.
    pub fn resolve(&self, line: &LineId, code: &str) -> Option<Direction> {
        if let Some(entries) = self.per_line.get(line) {
            if let Some(direction) = lookup(entries, code) {
                return Some(direction);
            }
        }
        lookup(&self.defaults, code)
    }

    /// The display label for a canonical direction on a line: the first
    /// registered code mapping to it, preferring line-specific entries.
    pub fn label(&self, line: &LineId, direction: Direction) -> Option<&str> {
        if let Some(entries) = self.per_line.get(line) {
            if let Some(code) = reverse_lookup(entries, direction) {
                return Some(code);
            }
        }
        reverse_lookup(&self.defaults, direction)
    }
}

fn lookup(entries: &[(String, Direction)], code: &str) -> Option<Direction> {
    entries
        .iter()
        .find(|(c, _)| c == code)
        .map(|(_, d)| *d)
}

fn reverse_lookup(entries: &[(String, Direction)], direction: Direction) -> Option<&str> {
    entries
        .iter()
        .find(|(_, d)| *d == direction)
        .map(|(c, _)| c.as_str())
}
