//! Lint codes.

use std::fmt;

/// Stable identifiers for the lint's findings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum LintCode {
    /// Unit-less value in a duration assignment
    L0001,
    /// Unit-less value in a duration argument
    L0002,
    /// Integer converted to a duration without multiplication by a unit
    L0003,
}

impl LintCode {
    pub const ALL: [LintCode; 3] = [LintCode::L0001, LintCode::L0002, LintCode::L0003];

    pub fn as_str(self) -> &'static str {
        match self {
            LintCode::L0001 => "L0001",
            LintCode::L0002 => "L0002",
            LintCode::L0003 => "L0003",
        }
    }

    /// One-line description, for `--explain` style listings.
    pub fn description(self) -> &'static str {
        match self {
            LintCode::L0001 => "unit-less value in duration assignment",
            LintCode::L0002 => "unit-less value in duration argument",
            LintCode::L0003 => "bare integer-to-duration conversion without multiplication",
        }
    }

    /// Only reported when improper conversions are forbidden.
    pub fn is_conversion_lint(self) -> bool {
        matches!(self, LintCode::L0003)
    }

    /// Parse a code from its string form.
    pub fn parse(s: &str) -> Option<LintCode> {
        Self::ALL.into_iter().find(|code| code.as_str() == s)
    }
}

impl fmt::Display for LintCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
