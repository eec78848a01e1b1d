use crate::hex::HexEntry;

/// Splits `input` on every single space.
///
/// Runs of spaces, and spaces at either end, produce empty tokens. An empty
/// input yields exactly one empty token.
pub fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input.split(' ')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Two concatenated byte codes, e.g. `5a4c`.
    Word,
    /// A single byte code, e.g. `5a`.
    Pair,
    /// Any other length. Contributes nothing to the hex list.
    Unclassified,
}

impl TokenKind {
    pub fn classify(token: &str) -> Self {
        match token.chars().count() {
            4 => TokenKind::Word,
            2 => TokenKind::Pair,
            _ => TokenKind::Unclassified,
        }
    }
}

/// Hex entries for one token, in emission order.
///
/// A word is byte swapped: its second half comes out first.
pub fn hex_entries(token: &str) -> Vec<HexEntry> {
    match TokenKind::classify(token) {
        TokenKind::Word => {
            let (high, low) = split_at_char(token, 2);
            vec![HexEntry::new(low), HexEntry::new(high)]
        }
        TokenKind::Pair => vec![HexEntry::new(token)],
        TokenKind::Unclassified => Vec::new(),
    }
}

fn split_at_char(token: &str, n: usize) -> (&str, &str) {
    let idx = token
        .char_indices()
        .nth(n)
        .map(|(idx, _)| idx)
        .unwrap_or(token.len());
    token.split_at(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_char_respects_code_points() {
        assert_eq!(split_at_char("é5a4", 2), ("é5", "a4"));
        assert_eq!(split_at_char("ab", 2), ("ab", ""));
    }

    #[test]
    fn classify_counts_chars_not_bytes() {
        assert_eq!(TokenKind::classify("éé"), TokenKind::Pair);
        assert_eq!(TokenKind::classify("ééé"), TokenKind::Unclassified);
    }
}
