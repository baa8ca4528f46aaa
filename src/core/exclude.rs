// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/exclude.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file resolves the operator's "-exclude XX-YY" text into a daily pause
// window. How the window is applied (including start > end) is left to the
// mining engine.
//
// Tree Location:
// - src/core/exclude.rs (pause window parsing)
// - Depends on: std, crate::core::error

use crate::core::error::ExcludeError;
use std::fmt;
use std::str::FromStr;

/// Highest hour accepted for either bound of the window
const MAX_EXCLUDE_HOUR: u8 = 24;

/// Daily hour range during which mining is paused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExcludeWindow {
    /// No pause window configured
    #[default]
    Disabled,
    /// Pause between `start`:00 and `end`:00, both in [0, 24]
    Hours { start: u8, end: u8 },
}

impl ExcludeWindow {
    /// Parse raw option text. Empty input disables the window.
    pub fn parse(input: &str) -> Result<Self, ExcludeError> {
        if input.is_empty() {
            return Ok(Self::Disabled);
        }

        let fields: Vec<&str> = input.split('-').collect();
        if fields.len() != 2 {
            return Err(ExcludeError::Malformed {
                input: input.to_string(),
            });
        }

        let start = parse_hour(input, fields[0])?;
        let end = parse_hour(input, fields[1])?;

        match (u8::try_from(start), u8::try_from(end)) {
            (Ok(start), Ok(end)) if start <= MAX_EXCLUDE_HOUR && end <= MAX_EXCLUDE_HOUR => {
                Ok(Self::Hours { start, end })
            }
            _ => Err(ExcludeError::OutOfRange { start, end }),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Hours { .. })
    }

    /// Start and end hour when the window is enabled
    pub fn hours(&self) -> Option<(u8, u8)> {
        match *self {
            Self::Disabled => None,
            Self::Hours { start, end } => Some((start, end)),
        }
    }
}

fn parse_hour(input: &str, field: &str) -> Result<i64, ExcludeError> {
    field.parse::<i64>().map_err(|_| ExcludeError::Malformed {
        input: input.to_string(),
    })
}

impl FromStr for ExcludeWindow {
    type Err = ExcludeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ExcludeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "disabled"),
            Self::Hours { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_hour_is_malformed() {
        // "-1-5" splits into three fields
        assert!(matches!(
            ExcludeWindow::parse("-1-5"),
            Err(ExcludeError::Malformed { .. })
        ));
    }

    #[test]
    fn test_huge_value_is_malformed() {
        assert!(matches!(
            ExcludeWindow::parse("99999999999999999999-5"),
            Err(ExcludeError::Malformed { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(ExcludeWindow::parse("23-7").unwrap().to_string(), "23-7");
        assert_eq!(ExcludeWindow::Disabled.to_string(), "disabled");
    }
}
