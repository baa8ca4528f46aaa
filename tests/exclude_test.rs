// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/exclude_test.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file contains tests for exclude window resolution and its two
// diagnostics.
//
// Tree Location:
// - tests/exclude_test.rs (exclude window tests)
// - Depends on: csminer

#[cfg(test)]
mod tests {
    use csminer::core::INVALID_EXCLUDE_FORMAT_MESSAGE;
    use csminer::{ExcludeError, ExcludeWindow};

    #[test]
    fn test_every_valid_pair_is_kept_as_given() {
        for start in 0..=24u8 {
            for end in 0..=24u8 {
                let window = ExcludeWindow::parse(&format!("{}-{}", start, end)).unwrap();
                assert_eq!(window, ExcludeWindow::Hours { start, end });
                assert_eq!(window.hours(), Some((start, end)));
            }
        }
    }

    #[test]
    fn test_empty_is_disabled() {
        let window = ExcludeWindow::parse("").unwrap();
        assert_eq!(window, ExcludeWindow::Disabled);
        assert!(!window.is_enabled());
        assert_eq!(window.hours(), None);
    }

    #[test]
    fn test_zero_zero_is_distinct_from_disabled() {
        let window = ExcludeWindow::parse("0-0").unwrap();
        assert!(window.is_enabled());
        assert_eq!(window.hours(), Some((0, 0)));
        assert_ne!(window, ExcludeWindow::Disabled);
        assert_ne!(window.hours(), ExcludeWindow::Disabled.hours());
    }

    #[test]
    fn test_malformed_inputs() {
        for input in ["11", "11-16-20", "ab-cd", "11-", "-16", "11 - 16", "1.5-3", "-"] {
            let err = ExcludeWindow::parse(input).unwrap_err();
            assert!(
                matches!(err, ExcludeError::Malformed { .. }),
                "{:?} should be malformed, got {:?}",
                input,
                err
            );
            assert_eq!(err.to_string(), INVALID_EXCLUDE_FORMAT_MESSAGE);
        }
    }

    #[test]
    fn test_out_of_range_inputs() {
        for input in ["25-5", "5-25", "100-0", "24-99"] {
            let err = ExcludeWindow::parse(input).unwrap_err();
            assert!(matches!(err, ExcludeError::OutOfRange { .. }), "{:?}", input);
            assert!(err.to_string().ends_with("XX and YY must each be between 0 and 24"));
            assert!(err.to_string().starts_with(INVALID_EXCLUDE_FORMAT_MESSAGE));
        }
    }

    #[test]
    fn test_out_of_range_reports_bounds() {
        assert_eq!(
            ExcludeWindow::parse("25-5"),
            Err(ExcludeError::OutOfRange { start: 25, end: 5 })
        );
    }

    #[test]
    fn test_from_str() {
        let window: ExcludeWindow = "11-16".parse().unwrap();
        assert_eq!(window, ExcludeWindow::Hours { start: 11, end: 16 });
    }
}
