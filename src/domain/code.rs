//! Dot/dash signals and validated code paths

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{DomainError, DomainResult};

/// One Morse element. A dot descends left, a dash descends right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Dot,
    Dash,
}

impl Signal {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Signal::Dot),
            '-' => Some(Signal::Dash),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Signal::Dot => '.',
            Signal::Dash => '-',
        }
    }
}

/// A non-empty sequence of signals leading from the root to one node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodePath(Vec<Signal>);

impl CodePath {
    /// Parse a code token such as `".-."`.
    ///
    /// Fails with `InvalidCode` on an empty token or on any character
    /// other than `.` and `-`.
    pub fn parse(code: &str) -> DomainResult<Self> {
        if code.is_empty() {
            return Err(DomainError::InvalidCode {
                code: code.to_string(),
                reason: "empty code".to_string(),
            });
        }
        code.chars()
            .map(|c| {
                Signal::from_char(c).ok_or_else(|| DomainError::InvalidCode {
                    code: code.to_string(),
                    reason: format!("unexpected character {:?}", c),
                })
            })
            .collect::<DomainResult<Vec<_>>>()
            .map(CodePath)
    }

    pub fn signals(&self) -> &[Signal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a parsed path has at least one signal.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn from_signals(signals: Vec<Signal>) -> Self {
        CodePath(signals)
    }
}

impl FromStr for CodePath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CodePath::parse(s)
    }
}

impl fmt::Display for CodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for signal in &self.0 {
            write!(f, "{}", signal.as_char())?;
        }
        Ok(())
    }
}
