use std::fmt;

/// One byte in textual hex form: `0x` followed by the two source characters.
///
/// The characters are taken verbatim; nothing checks that they are hex digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexEntry(String);

impl HexEntry {
    pub fn new(code: &str) -> Self {
        Self(format!("0x{code}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered hex entries, displayed as `[0x4c, 0x5a]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HexList {
    entries: Vec<HexEntry>,
}

impl HexList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = HexEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[HexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for HexList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}
