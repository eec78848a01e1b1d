use strtohex_logging::strtohex_debug;

use crate::hex::HexList;
use crate::token::{hex_entries, tokens, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenReport {
    /// Length in characters.
    pub len: usize,
    pub kind: TokenKind,
}

/// Result of converting one input string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Conversion {
    reports: Vec<TokenReport>,
    hex: HexList,
}

impl Conversion {
    /// One report per token, in input order.
    pub fn reports(&self) -> &[TokenReport] {
        &self.reports
    }

    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.reports.iter().map(|report| report.len)
    }

    pub fn hex(&self) -> &HexList {
        &self.hex
    }
}

/// Converts a space-separated string of byte-pair tokens into a hex list.
///
/// Tokens that are neither 2 nor 4 characters long are dropped without error.
pub fn convert(input: &str) -> Conversion {
    let mut conversion = Conversion::default();

    for (index, token) in tokens(input).enumerate() {
        let report = TokenReport {
            len: token.chars().count(),
            kind: TokenKind::classify(token),
        };
        if report.kind == TokenKind::Unclassified {
            strtohex_debug!(
                "dropping token {index} {token:?}: length {} is neither 2 nor 4",
                report.len
            );
        }
        conversion.reports.push(report);
        conversion.hex.extend(hex_entries(token));
    }

    strtohex_debug!(
        "converted {} tokens into {} hex entries",
        conversion.reports.len(),
        conversion.hex.len()
    );
    conversion
}
