//! Time zone name table
//!
//! The name file holds one canonical time zone identifier per line; index
//! record payloads reference those lines by 1-based number.

/// 1-indexed table of time zone identifier lines.
#[derive(Debug)]
pub struct NameTable {
    lines: Vec<String>,
}

impl NameTable {
    /// Create a name table from its decoded lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of identifier lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the table holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Resolve line numbers to identifier strings.
    ///
    /// Line numbers are sorted ascending before mapping — deliberately
    /// discarding the record order the range expansion produced. When a cell
    /// maps to several zones, the zone on the lowest line becomes primary.
    ///
    /// # Panics
    ///
    /// Panics on a line number outside `1..=len`; that is index corruption,
    /// which the build pipeline guarantees against.
    pub fn resolve(&self, line_numbers: &[u32]) -> Vec<String> {
        let mut sorted = line_numbers.to_vec();
        sorted.sort_unstable();
        sorted.into_iter().map(|n| self.line(n)).collect()
    }

    fn line(&self, number: u32) -> String {
        assert!(
            number >= 1 && number as usize <= self.lines.len(),
            "name table line {} out of range 1..={}",
            number,
            self.lines.len()
        );
        self.lines[number as usize - 1].clone()
    }
}
